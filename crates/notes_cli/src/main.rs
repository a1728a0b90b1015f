//! Interactive terminal front-end for the notes app.
//!
//! # Responsibility
//! - Drive one in-memory app session from stdin commands.
//! - Print the active screen after every command.
//! - Report core linkage (`ping`, version) on start.

mod command;
mod render;

use command::{parse_command, to_action, Command, HELP};
use log::{info, warn};
use notes_core::{init_logging_with, AppConfig, InMemoryNoteStore, NotesApp};
use render::render_screen;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("notes_core ping={}", notes_core::ping());
    println!("notes_core version={}", notes_core::core_version());

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(settings) = config.log.as_ref() {
        if let Err(err) = init_logging_with(settings) {
            eprintln!("warning: {err}");
        }
    }

    let mut app = NotesApp::from_config(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run(&mut app, stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    app: &mut NotesApp<InMemoryNoteStore>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    info!("event=cli_start module=cli status=ok");
    write!(out, "{}", render_screen(&app.screen()))?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                prompt(out)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            command => match to_action(command, &app.screen()) {
                Ok(Some(action)) => {
                    app.dispatch(action);
                    write!(out, "{}", render_screen(&app.screen()))?;
                }
                Ok(None) => write!(out, "{}", render_screen(&app.screen()))?,
                Err(err) => {
                    warn!("event=cli_command module=cli status=error");
                    writeln!(out, "{err}")?;
                }
            },
        }
        prompt(out)?;
    }

    info!("event=cli_exit module=cli status=ok");
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

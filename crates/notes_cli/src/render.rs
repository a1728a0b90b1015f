//! Plain-text screen rendering.

use notes_core::Screen;

/// Renders a screen snapshot as terminal text.
pub fn render_screen(screen: &Screen) -> String {
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", screen.header()));
    match screen {
        Screen::List(list) => {
            if list.rows.is_empty() {
                out.push_str("(no notes)\n");
            }
            for (index, row) in list.rows.iter().enumerate() {
                let mark = if row.checked { 'x' } else { ' ' };
                out.push_str(&format!(
                    "{:>3}. [{mark}] {}  (#{})\n       {}\n",
                    index + 1,
                    row.title,
                    row.id,
                    row.subtitle
                ));
            }
            out.push_str("[+] add\n");
        }
        Screen::Add(form) | Screen::Edit(Some(form)) => {
            out.push_str(&format!("Task:    {}\n", form.title));
            out.push_str(&format!("Details: {}\n", form.subtitle));
            let button = if form.note_id.is_some() {
                "Save Note"
            } else {
                "Add Note"
            };
            let state = if form.can_submit { "" } else { " (disabled)" };
            out.push_str(&format!("[{button}]{state}\n"));
        }
        Screen::Edit(None) => {}
    }
    out
}

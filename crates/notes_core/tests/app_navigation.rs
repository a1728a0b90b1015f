use notes_core::{
    Action, ActionOutcome, AddBackPolicy, AppConfig, IdPolicy, IgnoreReason, InMemoryNoteStore,
    NoteStore, NoteValidationError, NotesApp, Route, Screen,
};

fn app_with(id_policy: IdPolicy, add_back: AddBackPolicy) -> NotesApp<InMemoryNoteStore> {
    NotesApp::new(InMemoryNoteStore::with_id_policy(id_policy), add_back)
}

fn add_note(app: &mut NotesApp<InMemoryNoteStore>, title: &str, subtitle: &str) -> ActionOutcome {
    assert_eq!(app.dispatch(Action::OpenAdd), ActionOutcome::Navigated(Route::Add));
    app.dispatch(Action::SetTitle(title.to_string()));
    app.dispatch(Action::SetSubtitle(subtitle.to_string()));
    app.dispatch(Action::Submit)
}

fn list_rows(app: &NotesApp<InMemoryNoteStore>) -> Vec<(u32, String, bool)> {
    match app.screen() {
        Screen::List(list) => list
            .rows
            .into_iter()
            .map(|row| (row.id, row.title, row.checked))
            .collect(),
        other => panic!("expected list screen, got {other:?}"),
    }
}

#[test]
fn valid_submit_adds_one_note_and_returns_to_list() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Lenient);
    let outcome = add_note(&mut app, "Groceries", "Milk, eggs");
    assert_eq!(outcome, ActionOutcome::Navigated(Route::List));
    assert_eq!(app.service().store().len(), 1);
    assert_eq!(list_rows(&app), vec![(0, "Groceries".to_string(), false)]);
}

#[test]
fn invalid_submits_change_nothing_and_stay_on_add() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Lenient);
    let long_title = "t".repeat(51);
    let long_subtitle = "s".repeat(121);
    let cases = [
        ("ab", "details", NoteValidationError::TitleTooShort { len: 2, min: 3 }),
        (
            long_title.as_str(),
            "details",
            NoteValidationError::TitleTooLong { len: 51, max: 50 },
        ),
        ("title", "   ", NoteValidationError::BlankSubtitle),
        (
            "title",
            long_subtitle.as_str(),
            NoteValidationError::SubtitleTooLong { len: 121, max: 120 },
        ),
    ];

    app.dispatch(Action::OpenAdd);
    for (title, subtitle, expected) in cases {
        app.dispatch(Action::SetTitle(title.to_string()));
        app.dispatch(Action::SetSubtitle(subtitle.to_string()));
        match app.screen() {
            Screen::Add(form) => assert!(!form.can_submit),
            other => panic!("expected add screen, got {other:?}"),
        }
        assert_eq!(
            app.dispatch(Action::Submit),
            ActionOutcome::Ignored(IgnoreReason::Rejected(expected))
        );
        assert_eq!(app.route(), Route::Add);
        assert!(app.service().store().is_empty());
    }
}

#[test]
fn scenario_delete_then_add_collides_under_collection_size() {
    let mut app = app_with(IdPolicy::CollectionSize, AddBackPolicy::Lenient);
    add_note(&mut app, "Groceries", "Milk, eggs");
    add_note(&mut app, "Gym", "Leg day");

    let first_key = app.service().notes()[0].key;
    assert_eq!(app.dispatch(Action::Delete(first_key)), ActionOutcome::Changed);
    assert_eq!(list_rows(&app), vec![(1, "Gym".to_string(), false)]);

    add_note(&mut app, "Read", "Chapter 3");
    let ids: Vec<u32> = list_rows(&app).into_iter().map(|row| row.0).collect();
    assert_eq!(ids, vec![1, 1]);
}

#[test]
fn edit_of_colliding_id_targets_the_first_match() {
    let mut app = app_with(IdPolicy::CollectionSize, AddBackPolicy::Lenient);
    add_note(&mut app, "Groceries", "Milk, eggs");
    add_note(&mut app, "Gym", "Leg day");
    let first_key = app.service().notes()[0].key;
    app.dispatch(Action::Delete(first_key));
    add_note(&mut app, "Read", "Chapter 3");

    app.dispatch(Action::OpenEdit(1));
    match app.screen() {
        Screen::Edit(Some(form)) => assert_eq!(form.title, "Gym"),
        other => panic!("expected edit form, got {other:?}"),
    }
    app.dispatch(Action::SetTitle("Gym v2".to_string()));
    assert_eq!(
        app.dispatch(Action::Submit),
        ActionOutcome::Navigated(Route::List)
    );

    let titles: Vec<String> = list_rows(&app).into_iter().map(|row| row.1).collect();
    assert_eq!(titles, vec!["Gym v2".to_string(), "Read".to_string()]);
}

#[test]
fn edit_overwrites_text_and_keeps_id_and_checked() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Lenient);
    add_note(&mut app, "Groceries", "Milk, eggs");
    add_note(&mut app, "Gym", "Leg day");
    let gym_key = app.service().notes()[1].key;
    app.dispatch(Action::ToggleChecked(gym_key));

    assert_eq!(
        app.dispatch(Action::OpenEdit(1)),
        ActionOutcome::Navigated(Route::Edit(1))
    );
    app.dispatch(Action::SetTitle("Gym".to_string()));
    app.dispatch(Action::SetSubtitle("Arm day".to_string()));
    app.dispatch(Action::Submit);

    let gym = app.service().get_note(gym_key).unwrap();
    assert_eq!(gym.id, 1);
    assert!(gym.checked);
    assert_eq!(gym.subtitle, "Arm day");
    assert_eq!(app.service().notes()[0].subtitle, "Milk, eggs");
}

#[test]
fn invalid_edit_stays_on_screen_and_back_discards() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Lenient);
    add_note(&mut app, "Groceries", "Milk, eggs");

    app.dispatch(Action::OpenEdit(0));
    app.dispatch(Action::SetTitle("Go".to_string()));
    assert!(matches!(
        app.dispatch(Action::Submit),
        ActionOutcome::Ignored(IgnoreReason::Rejected(_))
    ));
    assert_eq!(app.route(), Route::Edit(0));

    app.dispatch(Action::SetTitle("Groceries v2".to_string()));
    assert_eq!(app.dispatch(Action::Back), ActionOutcome::Navigated(Route::List));
    assert_eq!(app.service().notes()[0].title, "Groceries");
}

#[test]
fn unresolved_edit_renders_blank_screen() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Lenient);
    assert_eq!(
        app.dispatch(Action::OpenEdit(42)),
        ActionOutcome::Navigated(Route::Edit(42))
    );
    let screen = app.screen();
    assert!(screen.is_blank());
    assert_eq!(screen.header(), "Edit Note");

    assert_eq!(
        app.dispatch(Action::SetTitle("anything".to_string())),
        ActionOutcome::Ignored(IgnoreReason::NoteMissing)
    );
    assert_eq!(
        app.dispatch(Action::Submit),
        ActionOutcome::Ignored(IgnoreReason::NoteMissing)
    );
    assert_eq!(app.dispatch(Action::Back), ActionOutcome::Navigated(Route::List));
}

#[test]
fn lenient_back_creates_short_note_when_fields_are_non_blank() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Lenient);
    app.dispatch(Action::OpenAdd);
    assert_eq!(
        app.dispatch(Action::Back),
        ActionOutcome::Ignored(IgnoreReason::Rejected(NoteValidationError::BlankTitle))
    );
    assert_eq!(app.route(), Route::Add);

    app.dispatch(Action::SetTitle("a".to_string()));
    app.dispatch(Action::SetSubtitle("b".to_string()));
    assert_eq!(app.dispatch(Action::Back), ActionOutcome::Navigated(Route::List));
    assert_eq!(app.service().notes()[0].title, "a");
}

#[test]
fn strict_back_uses_submit_rule() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Strict);
    app.dispatch(Action::OpenAdd);
    app.dispatch(Action::SetTitle("a".to_string()));
    app.dispatch(Action::SetSubtitle("b".to_string()));
    assert!(matches!(
        app.dispatch(Action::Back),
        ActionOutcome::Ignored(IgnoreReason::Rejected(_))
    ));
    assert!(app.service().store().is_empty());
}

#[test]
fn discard_back_never_creates() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Discard);
    app.dispatch(Action::OpenAdd);
    app.dispatch(Action::SetTitle("Groceries".to_string()));
    app.dispatch(Action::SetSubtitle("Milk".to_string()));
    assert_eq!(app.dispatch(Action::Back), ActionOutcome::Navigated(Route::List));
    assert!(app.service().store().is_empty());
}

#[test]
fn toggle_twice_from_list_restores_state() {
    let mut app = app_with(IdPolicy::Monotonic, AddBackPolicy::Lenient);
    add_note(&mut app, "Groceries", "Milk, eggs");
    add_note(&mut app, "Gym", "Leg day");
    let key = app.service().notes()[0].key;

    app.dispatch(Action::ToggleChecked(key));
    assert_eq!(
        list_rows(&app),
        vec![(0, "Groceries".to_string(), true), (1, "Gym".to_string(), false)]
    );
    app.dispatch(Action::ToggleChecked(key));
    assert_eq!(
        list_rows(&app),
        vec![(0, "Groceries".to_string(), false), (1, "Gym".to_string(), false)]
    );
}

#[test]
fn from_config_applies_policies() {
    let config = AppConfig {
        id_policy: IdPolicy::CollectionSize,
        add_back: AddBackPolicy::Discard,
        log: None,
    };
    let app = NotesApp::from_config(&config);
    assert_eq!(app.add_back_policy(), AddBackPolicy::Discard);
    assert_eq!(app.service().store().id_policy(), IdPolicy::CollectionSize);
    assert_eq!(app.route(), Route::List);
}

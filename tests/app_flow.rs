mod support;

use std::time::Duration;

use support::{
    seeded,
    wait_until,
    word,
    BlockingServer,
};
use wordbook::{
    api::WordClient,
    core::{
        tasks::TaskManager,
        WordPatch,
    },
    gui::{
        settings::SettingsData,
        word_form::FormSubmission,
        UiAction,
        WordbookApp,
    },
    store::FetchStatus,
};

fn app_for(server: &BlockingServer) -> WordbookApp {
    wordbook::logging::test();

    let mut settings = SettingsData::default();
    settings.api.base_url = server.base_url();

    let client = WordClient::new(&settings.api.base_url, None).unwrap();
    let task_manager = TaskManager::new(client).unwrap();
    WordbookApp::with_task_manager(settings, task_manager)
}

fn settle(app: &mut WordbookApp, condition: impl Fn(&WordbookApp) -> bool) {
    let reached = wait_until(|| {
        app.process_task_results();
        condition(app)
    });
    assert!(reached, "app never reached the expected state");
}

fn ids(app: &WordbookApp) -> Vec<String> {
    app.store().state().items().iter().map(|w| w.id.clone()).collect()
}

#[test]
fn test_initial_fetch_populates_list() {
    let server = BlockingServer::start(seeded(vec![word("1", "cat", "a feline")]));
    let mut app = app_for(&server);

    assert!(app.store().state().is_loading());
    settle(&mut app, |app| app.store().state().status() == FetchStatus::Loaded);

    assert_eq!(ids(&app), vec!["1"]);
    assert!(app.store().last_synced().is_some());
}

#[test]
fn test_create_edit_delete_round() {
    let server = BlockingServer::start(seeded(vec![word("1", "cat", "a feline")]));
    let mut app = app_for(&server);
    settle(&mut app, |app| app.store().state().status() == FetchStatus::Loaded);

    // Add
    app.handle_action(UiAction::OpenAddForm);
    assert!(app.modals.word_form.is_open());
    {
        let draft = app.modals.word_form.draft_mut();
        draft.fields.word = "dog".to_string();
        draft.fields.definition = "a canine".to_string();
    }
    let submission = app.modals.word_form.submit().unwrap();
    assert!(!app.modals.word_form.is_open());
    app.dispatch_submission(submission);
    settle(&mut app, |app| app.store().state().items().len() == 2);
    assert_eq!(ids(&app), vec!["1", "2"]);

    // Edit
    app.handle_action(UiAction::EditWord("1".to_string()));
    assert!(app.modals.word_form.is_open());
    assert_eq!(app.modals.word_form.draft().fields.word, "cat");
    app.modals.word_form.draft_mut().fields.definition = "a small feline".to_string();
    let submission = app.modals.word_form.submit().unwrap();
    app.dispatch_submission(submission);
    settle(&mut app, |app| {
        app.store().state().find("1").is_some_and(|w| w.definition == "a small feline")
    });
    assert_eq!(ids(&app), vec!["1", "2"]);

    // Delete
    app.handle_action(UiAction::DeleteWord("2".to_string()));
    settle(&mut app, |app| app.store().state().items().len() == 1);
    assert_eq!(ids(&app), vec!["1"]);
    assert!(app.store().state().mutation_error().is_none());
}

#[test]
fn test_failed_delete_leaves_list_and_reports() {
    let server = BlockingServer::start(seeded(vec![word("1", "cat", "a feline")]));
    let mut app = app_for(&server);
    settle(&mut app, |app| app.store().state().status() == FetchStatus::Loaded);

    app.handle_action(UiAction::DeleteWord("missing".to_string()));
    settle(&mut app, |app| app.store().state().mutation_error().is_some());

    assert_eq!(ids(&app), vec!["1"]);
    assert_eq!(app.store().state().mutation_error(), Some("Failed to delete word: Word not found"));
    assert!(app.modals.error.is_open());

    app.handle_action(UiAction::DismissMutationError);
    assert!(app.store().state().mutation_error().is_none());
}

#[test]
fn test_fetch_failure_keeps_stale_items() {
    let server = BlockingServer::start(seeded(vec![word("1", "cat", "a feline")]));
    let mut app = app_for(&server);
    settle(&mut app, |app| app.store().state().status() == FetchStatus::Loaded);

    server.state.lock().unwrap().fail_with = Some(503);
    app.handle_action(UiAction::RetryFetch);
    settle(&mut app, |app| app.store().state().status() == FetchStatus::Errored);

    assert_eq!(ids(&app), vec!["1"]);
    assert_eq!(app.store().state().error(), Some("database unavailable"));

    server.state.lock().unwrap().fail_with = None;
    app.refresh();
    settle(&mut app, |app| app.store().state().status() == FetchStatus::Loaded);
    assert!(app.store().state().error().is_none());
}

#[test]
fn test_invalid_form_is_not_submitted() {
    let server = BlockingServer::start(seeded(vec![]));
    let mut app = app_for(&server);

    app.handle_action(UiAction::OpenAddForm);
    app.modals.word_form.draft_mut().fields.word = "   ".to_string();
    app.modals.word_form.draft_mut().fields.definition = "something".to_string();

    assert!(app.modals.word_form.submit().is_none());
    assert!(app.modals.word_form.is_open());
}

#[test]
fn test_switching_server_ignores_late_replies_from_the_old_one() {
    let old = BlockingServer::start(seeded(vec![word("1", "old", "from the first server")]));
    old.state.lock().unwrap().fetch_delay = Some(Duration::from_millis(400));
    let new = BlockingServer::start(seeded(vec![word("1", "new", "from the second server")]));

    let mut app = app_for(&old);

    let mut settings = app.settings_data.clone();
    settings.api.base_url = new.base_url();
    app.switch_server(settings).unwrap();

    settle(&mut app, |app| app.store().state().status() == FetchStatus::Loaded);
    assert_eq!(app.store().state().items()[0].word, "new");

    // Give the first server's reply time to arrive, then make sure it changed nothing.
    std::thread::sleep(Duration::from_millis(700));
    app.process_task_results();

    assert_eq!(app.store().state().status(), FetchStatus::Loaded);
    assert_eq!(app.store().state().items().len(), 1);
    assert_eq!(app.store().state().items()[0].word, "new");
    assert_eq!(app.settings_data.api.base_url, new.base_url());
}

#[test]
fn test_empty_update_is_not_sent() {
    let server = BlockingServer::start(seeded(vec![word("1", "cat", "a feline")]));
    let mut app = app_for(&server);
    settle(&mut app, |app| app.store().state().status() == FetchStatus::Loaded);

    app.dispatch_submission(FormSubmission::Update { id: "1".to_string(), patch: WordPatch::default() });

    let patch = WordPatch { definition: Some("a pet".to_string()), ..Default::default() };
    app.dispatch_submission(FormSubmission::Update { id: "1".to_string(), patch });
    settle(&mut app, |app| app.store().state().find("1").is_some_and(|w| w.definition == "a pet"));

    std::thread::sleep(Duration::from_millis(100));
    app.process_task_results();

    let bodies = server.state.lock().unwrap().updated_bodies.clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["definition"], "a pet");
}

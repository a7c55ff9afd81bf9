//! End-to-end behaviour of the controllers, driven only through
//! `handle_event` and the actions it returns.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ghcloner::app::{handle_event, Action, AppState, Event, FetchStatus, Phase, Screen};
use ghcloner::domain::{CloneOutcome, Identity, RepositoryEntry};
use ghcloner::ui::Theme;
use ghcloner::worker::{CommandToken, WorkerMessage, WorkerResponse};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ch(c: char) -> Event {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_event(state, ch(c));
    }
}

fn posted(actions: &[Action]) -> Vec<WorkerMessage> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::PostToWorker(m) => Some(m.clone()),
            _ => None,
        })
        .collect()
}

fn fetch_of(actions: &[Action]) -> (CommandToken, String) {
    match posted(actions).as_slice() {
        [WorkerMessage::FetchRepositories { token, username }] => (*token, username.clone()),
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

fn clone_of(actions: &[Action]) -> (CommandToken, String) {
    match posted(actions).as_slice() {
        [WorkerMessage::CloneRepository { token, url }] => (*token, url.clone()),
        other => panic!("expected exactly one clone, got {other:?}"),
    }
}

fn entries(user: &str, names: &[&str]) -> Vec<RepositoryEntry> {
    names
        .iter()
        .map(|n| RepositoryEntry::new(*n, format!("https://github.com/{user}/{n}.git")))
        .collect()
}

fn listing(token: CommandToken, user: &str, names: &[&str]) -> Event {
    Event::WorkerResponse(WorkerResponse::RepositoriesFetched {
        token,
        username: user.to_string(),
        result: Ok(entries(user, names)),
    })
}

fn cloned(token: CommandToken, url: &str, result: Result<(), String>) -> Event {
    Event::WorkerResponse(WorkerResponse::RepositoryCloned {
        token,
        url: url.to_string(),
        result,
    })
}

/// Starts browsing `user` with `names` already listed.
fn browsing(user: &str, names: &[&str]) -> AppState {
    let mut state = AppState::new(Theme::default());
    let actions = state.start(Identity::confirm(user));
    let (token, username) = fetch_of(&actions);
    assert_eq!(username, user);
    handle_event(&mut state, listing(token, user, names));
    state
}

fn browse(state: &AppState) -> &ghcloner::app::BrowseController {
    state.screen.as_browse().expect("expected the repository browser")
}

fn names(state: &AppState) -> Vec<String> {
    browse(state).list().visible().map(|e| e.name.clone()).collect()
}

#[test]
fn blank_username_never_dispatches_a_fetch() {
    let mut state = AppState::new(Theme::default());
    state.start(None);

    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    assert!(posted(&actions).is_empty());

    type_text(&mut state, "   ");
    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    assert!(posted(&actions).is_empty());
    assert!(matches!(state.screen, Screen::Identity(_)));
}

#[test]
fn confirming_a_username_starts_a_fetch() {
    let mut state = AppState::new(Theme::default());
    state.start(None);

    type_text(&mut state, "  octocat ");
    let (redraw, actions) = handle_event(&mut state, key(KeyCode::Enter));

    assert!(redraw);
    let (_, username) = fetch_of(&actions);
    assert_eq!(username, "octocat");
    assert!(matches!(browse(&state).fetch_status(), FetchStatus::Loading(_)));
}

#[test]
fn esc_on_an_empty_prompt_quits() {
    let mut state = AppState::new(Theme::default());
    state.start(None);
    type_text(&mut state, "typed but never confirmed");

    let (_, actions) = handle_event(&mut state, key(KeyCode::Esc));
    assert_eq!(actions, vec![Action::Quit]);
}

#[test]
fn repeated_enter_while_cloning_dispatches_once() {
    let mut state = browsing("alice", &["one", "two"]);

    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    let (_, url) = clone_of(&actions);
    assert_eq!(url, "https://github.com/alice/one.git");
    assert!(actions.iter().any(|a| matches!(a, Action::ScheduleTick(_))));

    for _ in 0..3 {
        let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
        assert!(posted(&actions).is_empty());
    }
    assert!(browse(&state).phase().is_cloning());
}

#[test]
fn quitting_and_changing_user_wait_for_the_clone() {
    let mut state = browsing("alice", &["one"]);
    handle_event(&mut state, key(KeyCode::Enter));

    for event in [ch('q'), ch('c'), ctrl('c')] {
        let (_, actions) = handle_event(&mut state, event);
        assert!(!actions.contains(&Action::Quit));
    }
    assert!(state.screen.as_browse().is_some());
}

#[test]
fn failed_clone_shows_git_output_and_keeps_the_list_usable() {
    let mut state = browsing("alice", &["one", "two"]);
    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    let (token, url) = clone_of(&actions);

    handle_event(&mut state, cloned(token, &url, Err("fatal: repository not found".to_string())));
    assert_eq!(
        browse(&state).phase(),
        &Phase::CloneResult(CloneOutcome::Failure("fatal: repository not found".to_string()))
    );

    let (redraw, _) = handle_event(&mut state, key(KeyCode::Down));
    assert!(redraw);
    assert_eq!(browse(&state).list().selected_index(), Some(1));

    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    let (_, url) = clone_of(&actions);
    assert_eq!(url, "https://github.com/alice/two.git");
}

#[test]
fn successful_clone_reports_the_directory() {
    let mut state = browsing("alice", &["dotfiles"]);
    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    let (token, url) = clone_of(&actions);

    handle_event(&mut state, cloned(token, &url, Ok(())));
    assert_eq!(
        browse(&state).phase(),
        &Phase::CloneResult(CloneOutcome::Success("dotfiles".to_string()))
    );
}

#[test]
fn changing_user_fetches_the_new_listing() {
    let mut state = browsing("alice", &["a1", "a2"]);

    handle_event(&mut state, ch('c'));
    let Screen::Identity(identity) = &state.screen else {
        panic!("expected the username prompt");
    };
    assert_eq!(identity.input().value(), "alice");

    handle_event(&mut state, ctrl('u'));
    type_text(&mut state, "bob");
    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    let (token, username) = fetch_of(&actions);
    assert_eq!(username, "bob");

    handle_event(&mut state, listing(token, "bob", &["b1"]));
    assert_eq!(browse(&state).identity().username(), "bob");
    assert_eq!(names(&state), vec!["b1"]);
}

#[test]
fn cancelling_a_user_change_restores_the_browser() {
    let mut state = browsing("alice", &["a1", "a2", "a3"]);
    handle_event(&mut state, key(KeyCode::Down));
    let before = browse(&state).clone();

    handle_event(&mut state, ch('c'));
    type_text(&mut state, "-edited");
    let (redraw, actions) = handle_event(&mut state, key(KeyCode::Esc));

    assert!(redraw);
    assert!(posted(&actions).is_empty());
    assert_eq!(browse(&state), &before);
}

#[test]
fn stale_listing_is_ignored() {
    let mut state = AppState::new(Theme::default());
    let actions = state.start(Identity::confirm("alice"));
    let (alice_token, _) = fetch_of(&actions);

    handle_event(&mut state, ch('c'));
    handle_event(&mut state, ctrl('u'));
    type_text(&mut state, "bob");
    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    let (bob_token, _) = fetch_of(&actions);
    assert_ne!(alice_token, bob_token);

    let (redraw, _) = handle_event(&mut state, listing(alice_token, "alice", &["a1"]));
    assert!(!redraw);
    assert_eq!(browse(&state).fetch_status(), &FetchStatus::Loading(bob_token));

    handle_event(&mut state, listing(bob_token, "bob", &["b1"]));
    assert_eq!(names(&state), vec!["b1"]);
}

#[test]
fn stale_clone_completion_is_ignored() {
    let mut state = browsing("alice", &["one"]);
    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    let (token, url) = clone_of(&actions);

    let unknown = ghcloner::worker::CommandTokens::new().next_token();
    assert_ne!(unknown, token);
    let (redraw, _) = handle_event(&mut state, cloned(unknown, &url, Ok(())));
    assert!(!redraw);
    assert!(browse(&state).phase().is_cloning());
}

#[test]
fn prompt_keeps_the_fallback_browser_current() {
    let mut state = AppState::new(Theme::default());
    let actions = state.start(Identity::confirm("alice"));
    let (token, _) = fetch_of(&actions);

    handle_event(&mut state, ch('c'));
    handle_event(&mut state, listing(token, "alice", &["late"]));
    handle_event(&mut state, key(KeyCode::Esc));

    assert_eq!(browse(&state).fetch_status(), &FetchStatus::Ready);
    assert_eq!(names(&state), vec!["late"]);
}

#[test]
fn failed_listing_leaves_nothing_to_clone() {
    let mut state = AppState::new(Theme::default());
    let actions = state.start(Identity::confirm("ghost"));
    let (token, _) = fetch_of(&actions);

    handle_event(
        &mut state,
        Event::WorkerResponse(WorkerResponse::RepositoriesFetched {
            token,
            username: "ghost".to_string(),
            result: Err("GitHub API returned 404: Not Found".to_string()),
        }),
    );
    assert_eq!(
        browse(&state).fetch_status(),
        &FetchStatus::Failed("GitHub API returned 404: Not Found".to_string())
    );

    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    assert!(posted(&actions).is_empty());

    let (_, actions) = handle_event(&mut state, ch('q'));
    assert_eq!(actions, vec![Action::Quit]);
}

#[test]
fn filtering_narrows_what_enter_clones() {
    let mut state = browsing("alice", &["website", "dotfiles", "notes"]);

    handle_event(&mut state, ch('/'));
    type_text(&mut state, "dot");
    assert_eq!(names(&state), vec!["dotfiles"]);

    // Enter applies the filter; it does not clone yet.
    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    assert!(posted(&actions).is_empty());

    let (_, actions) = handle_event(&mut state, key(KeyCode::Enter));
    let (_, url) = clone_of(&actions);
    assert_eq!(url, "https://github.com/alice/dotfiles.git");
}

#[test]
fn q_types_into_the_filter_instead_of_quitting() {
    let mut state = browsing("alice", &["quux", "other"]);

    handle_event(&mut state, ch('/'));
    let (_, actions) = handle_event(&mut state, ch('q'));
    assert!(actions.is_empty());
    assert_eq!(names(&state), vec!["quux"]);

    handle_event(&mut state, key(KeyCode::Esc));
    assert_eq!(names(&state).len(), 2);
}

#[test]
fn spinner_ticks_only_while_busy() {
    let mut state = AppState::new(Theme::default());
    let actions = state.start(Identity::confirm("alice"));
    let (token, _) = fetch_of(&actions);

    let (redraw, actions) = handle_event(&mut state, Event::Tick);
    assert!(redraw);
    assert!(matches!(actions.as_slice(), [Action::ScheduleTick(_)]));

    handle_event(&mut state, listing(token, "alice", &["one"]));
    let (redraw, actions) = handle_event(&mut state, Event::Tick);
    assert!(!redraw);
    assert!(actions.is_empty());
}

#[test]
fn resize_updates_the_viewport_inside_the_margins() {
    let mut state = browsing("alice", &["one"]);
    let (redraw, _) = handle_event(&mut state, Event::Resize { cols: 120, rows: 40 });

    assert!(redraw);
    let layout = state.theme.layout;
    assert_eq!(state.viewport.width, 120 - 2 * layout.margin_horizontal);
    assert_eq!(state.viewport.height, 40 - 2 * layout.margin_vertical);
}

//! Behavior of the results view against a recording database facade.

use std::sync::{Arc, Mutex};

use kpsearch::app::{handle_event, AppState, Event, Layout, SearchInvocation, DEFAULT_TITLE};
use kpsearch::database::{Database, DatabaseSnapshot, SearchParameters};
use kpsearch::domain::{Entry, Group};
use kpsearch::ui::Theme;
use kpsearch::worker::WorkerResponse;
use proptest::prelude::*;

/// Facade that records every query and answers with a canned group per query.
#[derive(Debug, Default)]
struct RecordingDatabase {
    responses: Vec<(String, Option<Group>)>,
    calls: Mutex<Vec<String>>,
}

impl RecordingDatabase {
    fn answering(query: &str, group: Option<Group>) -> Self {
        Self::default().and(query, group)
    }

    fn and(mut self, query: &str, group: Option<Group>) -> Self {
        self.responses.push((query.to_string(), group));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Database for RecordingDatabase {
    fn search(&self, query: &str) -> Option<Group> {
        self.calls.lock().unwrap().push(query.to_string());
        self.responses
            .iter()
            .find(|(q, _)| q == query)
            .and_then(|(_, group)| group.clone())
    }
}

fn e(n: u32) -> Entry {
    Entry::new(format!("uuid-{n}"), format!("E{n}"))
}

fn github_results() -> Group {
    Group::new("Search results: github").with_entries(vec![e(1), e(2), e(3)])
}

fn zzz_results() -> Group {
    Group::new("Search results: zzz")
}

fn view_with(db: &Arc<RecordingDatabase>) -> AppState {
    let database: Arc<dyn Database> = db.clone();
    AppState::new(Theme::default(), SearchParameters::default()).with_database(database)
}

fn create(state: &mut AppState, invocation: SearchInvocation) {
    handle_event(state, &Event::Create(invocation)).unwrap();
}

fn deliver(state: &mut AppState, invocation: SearchInvocation) {
    handle_event(state, &Event::NewInvocation(invocation)).unwrap();
}

fn rows(state: &AppState) -> Vec<Entry> {
    state.adapter().iter().cloned().collect()
}

/// Everything a user of the view can observe.
fn observable(state: &AppState) -> (Layout, String, Vec<Entry>, usize) {
    (state.layout, state.title.clone(), rows(state), state.selected_index)
}

#[test]
fn s1_matches_are_listed_read_only() {
    let db = Arc::new(RecordingDatabase::answering("github", Some(github_results())));
    let mut state = view_with(&db);

    create(&mut state, SearchInvocation::search("github"));

    assert_eq!(state.layout, Layout::ListReadOnly);
    assert_eq!(state.title, "Search results: github");
    assert_eq!(rows(&state), vec![e(1), e(2), e(3)]);
    assert_eq!(db.calls(), vec!["github"]);
}

#[test]
fn s2_an_empty_group_shows_the_empty_layout_with_its_title() {
    let db = Arc::new(RecordingDatabase::answering("zzz", Some(zzz_results())));
    let mut state = view_with(&db);

    create(&mut state, SearchInvocation::search("zzz"));

    assert_eq!(state.layout, Layout::Empty);
    assert_eq!(state.title, "Search results: zzz");
    assert!(rows(&state).is_empty());
}

#[test]
fn s3_no_group_leaves_the_default_title() {
    let db = Arc::new(RecordingDatabase::answering("", None));
    let mut state = view_with(&db);

    create(&mut state, SearchInvocation::search(""));

    assert_eq!(state.layout, Layout::Empty);
    assert_eq!(state.title, DEFAULT_TITLE);
    assert!(state.current_group.is_none());
    assert_eq!(db.calls(), vec![""]);
}

#[test]
fn s4_other_actions_never_reach_the_database() {
    let db = Arc::new(RecordingDatabase::answering("anything", Some(github_results())));
    let mut state = view_with(&db);

    create(&mut state, SearchInvocation::new("VIEW", Some("anything".to_string())));

    assert!(db.calls().is_empty());
    assert_eq!(state.layout, Layout::Empty);
}

#[test]
fn s5_a_later_invocation_replaces_the_first() {
    let db = Arc::new(
        RecordingDatabase::answering("github", Some(github_results())).and("zzz", Some(zzz_results())),
    );
    let mut state = view_with(&db);

    create(&mut state, SearchInvocation::search("github"));
    deliver(&mut state, SearchInvocation::search("zzz"));

    assert_eq!(state.layout, Layout::Empty);
    assert_eq!(state.title, "Search results: zzz");
    assert!(rows(&state).is_empty());
    assert_eq!(db.calls(), vec!["github", "zzz"]);
}

#[test]
fn search_without_a_query_is_not_searched() {
    let db = Arc::new(RecordingDatabase::default());
    let mut state = view_with(&db);

    create(&mut state, SearchInvocation::new("SEARCH", None));

    assert!(db.calls().is_empty());
    assert_eq!(state.layout, Layout::Empty);
}

#[test]
fn layout_follows_the_returned_group() {
    let single = Group::new("Search results: one").with_entries(vec![e(7)]);
    let only_subgroups = Group::new("Search results: nested").with_groups(vec![github_results()]);
    let cases = [
        ("none", None, Layout::Empty),
        ("empty", Some(zzz_results()), Layout::Empty),
        ("nested", Some(only_subgroups), Layout::Empty),
        ("one", Some(single), Layout::ListReadOnly),
        ("three", Some(github_results()), Layout::ListReadOnly),
    ];

    for (query, group, expected) in cases {
        let db = Arc::new(RecordingDatabase::answering(query, group.clone()));
        let mut state = view_with(&db);
        create(&mut state, SearchInvocation::search(query));

        assert_eq!(state.layout, expected, "query {query}");
        if expected == Layout::ListReadOnly {
            assert_eq!(rows(&state), group.unwrap().child_entries, "query {query}");
        }
    }
}

#[test]
fn repeating_an_invocation_changes_nothing_visible() {
    let db = Arc::new(RecordingDatabase::answering("github", Some(github_results())));
    let mut once = view_with(&db);
    create(&mut once, SearchInvocation::search("github"));

    let mut twice = view_with(&db);
    create(&mut twice, SearchInvocation::search("github"));
    deliver(&mut twice, SearchInvocation::search("github"));

    assert_eq!(observable(&once), observable(&twice));
    assert_eq!(once.compute_viewmodel(24, 100), twice.compute_viewmodel(24, 100));
}

#[test]
fn the_invocation_pending_on_an_opening_database_is_the_latest_one() {
    let mut state = AppState::new(Theme::default(), SearchParameters::default());
    create(&mut state, SearchInvocation::search("mail"));
    deliver(&mut state, SearchInvocation::search("bank"));
    assert_eq!(state.layout, Layout::Empty);

    let snapshot = DatabaseSnapshot::from_json(
        r#"{"version":1,"name":"vault","root":{"title":"Root","entries":[
            {"uuid":"a","title":"Mail"},{"uuid":"b","title":"Bank"}]}}"#,
    )
    .unwrap();
    handle_event(
        &mut state,
        &Event::WorkerResponse(WorkerResponse::DatabaseOpened {
            path: "/host/vault.json".to_string(),
            snapshot,
        }),
    )
    .unwrap();

    assert_eq!(state.layout, Layout::ListReadOnly);
    assert_eq!(state.title, "Search results: bank");
    let titles: Vec<String> = rows(&state).into_iter().map(|entry| entry.title).collect();
    assert_eq!(titles, ["Bank"]);
}

proptest! {
    #[test]
    fn non_search_actions_are_never_searched(
        action in "[A-Za-z_]{0,12}".prop_filter("not SEARCH", |a| a != "SEARCH"),
        query in proptest::option::of(".{0,16}"),
    ) {
        let db = Arc::new(RecordingDatabase::default());
        let mut state = view_with(&db);

        create(&mut state, SearchInvocation::new(action, query));

        prop_assert!(db.calls().is_empty());
        prop_assert_eq!(state.layout, Layout::Empty);
    }

    #[test]
    fn search_queries_reach_the_database_verbatim_once(query in ".{0,24}") {
        let db = Arc::new(RecordingDatabase::default());
        let mut state = view_with(&db);

        create(&mut state, SearchInvocation::search(query.clone()));

        prop_assert_eq!(db.calls(), vec![query]);
    }

    #[test]
    fn the_last_of_two_invocations_wins(first in "[a-c]{1,3}", second in "[a-c]{1,3}") {
        let group = |q: &str| {
            let entries = q.chars().enumerate().map(|(i, c)| Entry::new(format!("{q}-{i}"), c.to_string())).collect();
            Group::new(format!("Search results: {q}")).with_entries(entries)
        };
        let db = Arc::new(
            RecordingDatabase::answering(&first, Some(group(&first))).and(&second, Some(group(&second))),
        );

        let mut sequenced = view_with(&db);
        create(&mut sequenced, SearchInvocation::search(first.clone()));
        deliver(&mut sequenced, SearchInvocation::search(second.clone()));

        let mut direct = view_with(&db);
        create(&mut direct, SearchInvocation::search(second));

        prop_assert_eq!(observable(&sequenced), observable(&direct));
    }
}

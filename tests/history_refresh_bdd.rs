//! Behavioural tests for refreshing the history list in the analyser TUI.

mod support {
    #[path = "../support/runtime.rs"]
    pub mod runtime;
}

#[path = "history_refresh_bdd/state.rs"]
mod history_refresh_bdd_state;

use std::sync::Arc;

use bubbletea_rs::Model;
use history_refresh_bdd_state::HistoryState;
use reviewsense::telemetry::NoopTelemetrySink;
use reviewsense::tui::AnalyzerApp;
use reviewsense::tui::messages::AppMsg;
use reviewsense::ReviewGateway;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use support::runtime::{
    ANALYZE_PATH, REVIEWS_PATH, count_requests, ensure_runtime_and_server, gateway_for,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[fixture]
fn history_state() -> HistoryState {
    HistoryState::default()
}

fn product_list(raw: &str) -> Vec<String> {
    raw.trim_matches('"')
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

#[expect(clippy::expect_used, reason = "BDD test helper; panics are acceptable")]
fn ensure_app(history_state: &HistoryState) {
    ensure_runtime_and_server(&history_state.runtime, &history_state.server)
        .expect("runtime and server should start");
    if history_state.app.with_ref(|_| ()).is_some() {
        return;
    }
    let gateway = history_state
        .server
        .with_ref(gateway_for)
        .expect("mock server not initialised")
        .expect("gateway should build for the mock server");
    let backend: Arc<dyn ReviewGateway> = Arc::new(gateway);
    history_state
        .app
        .set(AnalyzerApp::new(Some(backend), Arc::new(NoopTelemetrySink)));
}

#[expect(clippy::expect_used, reason = "BDD test helper; panics are acceptable")]
fn mount(history_state: &HistoryState, mock: Mock) {
    ensure_app(history_state);
    let runtime = history_state.runtime.get().expect("runtime not initialised");
    history_state
        .server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .expect("mock server not initialised");
}

// --- Given steps ---

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("a backend whose history lists {products}")]
fn backend_history_lists(history_state: &HistoryState, products: String) {
    let entries: Vec<_> = product_list(&products)
        .into_iter()
        .enumerate()
        .map(|(index, product)| {
            let review = format!("Review of {product}");
            json!({
                "id": index + 1,
                "product_name": product,
                "review_text": review,
                "sentiment": "NEGATIVE",
                "created_at": "2025-02-01 08:15:00",
            })
        })
        .collect();
    mount(
        history_state,
        Mock::given(method("GET"))
            .and(path(REVIEWS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(entries)),
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[given("the history has already loaded {products}")]
fn history_already_loaded(history_state: &HistoryState, products: String) {
    backend_history_lists(history_state, products);
    refresh(history_state);
}

#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
#[given("the backend history fails with status {status:u16}")]
fn backend_history_fails(history_state: &HistoryState, status: u16) {
    let runtime = history_state.runtime.get().expect("runtime not initialised");
    history_state
        .server
        .with_ref(|server| runtime.block_on(server.reset()))
        .expect("mock server not initialised");
    mount(
        history_state,
        Mock::given(method("GET"))
            .and(path(REVIEWS_PATH))
            .respond_with(ResponseTemplate::new(status)),
    );
}

// --- When steps ---

#[when("the user refreshes history")]
fn user_refreshes_history(history_state: &HistoryState) {
    refresh(history_state);
}

#[expect(clippy::expect_used, reason = "BDD test helper; panics are acceptable")]
fn refresh(history_state: &HistoryState) {
    ensure_app(history_state);
    let runtime = history_state.runtime.get().expect("runtime not initialised");

    let cmd = history_state
        .app
        .with_mut(|app| app.handle_message(&AppMsg::HistoryRequested))
        .expect("app not initialised")
        .expect("refresh should issue a command");
    let msg = runtime
        .block_on(cmd)
        .expect("history command should emit a message");
    let loaded = *msg
        .downcast::<AppMsg>()
        .expect("history command should emit an AppMsg");

    let follow_up = history_state
        .app
        .with_mut(|app| app.handle_message(&loaded))
        .expect("app not initialised");
    assert!(follow_up.is_none(), "history load should not chain commands");
}

// --- Then steps ---

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
#[then("the history shows {products} in order")]
fn history_shows(history_state: &HistoryState, products: String) {
    let (names, view) = history_state
        .app
        .with_ref(|app| {
            let names: Vec<String> = app
                .analyzer()
                .history()
                .iter()
                .map(|entry| entry.product_name.clone())
                .collect();
            (names, app.view())
        })
        .expect("app not initialised");

    let expected = product_list(&products);
    assert_eq!(names, expected);
    for product in &expected {
        assert!(view.contains(product.as_str()), "{product} missing from:\n{view}");
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "rstest-bdd passes owned step arguments"
)]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
#[then("the view shows {text}")]
fn view_shows(history_state: &HistoryState, text: String) {
    let view = history_state
        .app
        .with_ref(AnalyzerApp::view)
        .expect("app not initialised");

    let needle = text.trim_matches('"');
    assert!(view.contains(needle), "{needle} missing from:\n{view}");
}

#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
#[then("the backend received {count:usize} history requests and no analysis requests")]
fn backend_received(history_state: &HistoryState, count: usize) {
    let runtime = history_state.runtime.get().expect("runtime not initialised");
    let (histories, analyses) = history_state
        .server
        .with_ref(|server| {
            (
                count_requests(&runtime, server, "GET", REVIEWS_PATH),
                count_requests(&runtime, server, "POST", ANALYZE_PATH),
            )
        })
        .expect("mock server not initialised");

    assert_eq!(histories, count, "history request count");
    assert_eq!(analyses, 0, "analysis request count");
}

#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
#[then("no alert is shown")]
fn no_alert(history_state: &HistoryState) {
    let alert_visible = history_state
        .app
        .with_ref(AnalyzerApp::is_alert_visible)
        .expect("app not initialised");

    assert!(!alert_visible);
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/history_refresh.feature", index = 0)]
fn refresh_shows_entries_in_order(history_state: HistoryState) {
    let _ = history_state;
}

#[scenario(path = "tests/features/history_refresh.feature", index = 1)]
fn empty_history_shows_placeholder(history_state: HistoryState) {
    let _ = history_state;
}

#[scenario(path = "tests/features/history_refresh.feature", index = 2)]
fn failed_refresh_keeps_previous_list(history_state: HistoryState) {
    let _ = history_state;
}

//! Scenario state for history refresh BDD tests.

use reviewsense::tui::AnalyzerApp;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a history refresh scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct HistoryState {
    /// Runtime driving commands and the mock backend.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Mock review analysis backend.
    pub(crate) server: Slot<MockServer>,
    /// TUI application under test.
    pub(crate) app: Slot<AnalyzerApp>,
}

//! Tokio runtime and mock backend helpers for behavioural tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use reviewsense::{AnalyzerError, BackendEndpoint, HttpReviewGateway};
use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Path of the analysis endpoint on the mock backend.
pub const ANALYZE_PATH: &str = "/api/analyze-review";
/// Path of the history endpoint on the mock backend.
pub const REVIEWS_PATH: &str = "/api/reviews";

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime and Wiremock backend are initialised.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created or if the slots
/// behave unexpectedly.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Builds an HTTP gateway pointed at the mock backend.
///
/// A short timeout keeps a misconfigured scenario from hanging the suite.
///
/// # Errors
///
/// Returns an error if the mock server URI is rejected or the client cannot
/// be built.
pub fn gateway_for(server: &MockServer) -> Result<HttpReviewGateway, AnalyzerError> {
    let endpoint = BackendEndpoint::parse(&server.uri())?;
    HttpReviewGateway::new(endpoint, Some(Duration::from_secs(5)))
}

/// Counts requests the mock backend received for `method` and `path`.
pub fn count_requests(
    runtime: &SharedRuntime,
    server: &MockServer,
    method: &str,
    path: &str,
) -> usize {
    runtime
        .block_on(server.received_requests())
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == method && request.url.path() == path)
        .count()
}

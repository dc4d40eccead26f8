//! Terminal user interface for the review analyser.
//!
//! This module provides the interactive analyser screen using the
//! bubbletea-rs framework: a two-field form, the latest result, and the
//! recent analysis history.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::AnalyzerApp`], which wraps the
//!   [`crate::analyzer::ReviewAnalyzer`] controller
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! Backend requests run as bubbletea commands and report back through
//! [`messages::AppMsg`], so the update loop itself never blocks.
//!
//! # Startup Context
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the backend gateway and telemetry sink are stored at module
//! level. Call [`set_startup_context`] before starting the program, and
//! `AnalyzerApp::init()` will pick them up and request the initial history.

use std::sync::{Arc, OnceLock};

use crate::api::gateway::ReviewGateway;
use crate::telemetry::TelemetrySink;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::AnalyzerApp;

/// Global storage for the gateway and telemetry sink.
///
/// This is set before the TUI program starts and read by
/// `AnalyzerApp::init()`.
static STARTUP_CONTEXT: OnceLock<StartupContext> = OnceLock::new();

/// Collaborators the analyser needs at startup.
struct StartupContext {
    gateway: Arc<dyn ReviewGateway>,
    telemetry: Arc<dyn TelemetrySink>,
}

/// Sets the backend gateway and telemetry sink for the TUI application.
///
/// This must be called before starting the bubbletea-rs program. Without it,
/// every request made by the analyser fails with a configuration error.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_startup_context(
    gateway: Arc<dyn ReviewGateway>,
    telemetry: Arc<dyn TelemetrySink>,
) -> bool {
    STARTUP_CONTEXT
        .set(StartupContext { gateway, telemetry })
        .is_ok()
}

/// Returns the stored gateway, if one was configured.
pub(crate) fn startup_gateway() -> Option<Arc<dyn ReviewGateway>> {
    STARTUP_CONTEXT
        .get()
        .map(|context| Arc::clone(&context.gateway))
}

/// Returns the stored telemetry sink, if one was configured.
pub(crate) fn startup_telemetry() -> Option<Arc<dyn TelemetrySink>> {
    STARTUP_CONTEXT
        .get()
        .map(|context| Arc::clone(&context.telemetry))
}

//! Session keep-alive action.
//!
//! Long markdown walkthroughs can outlive the ziti CLI session token. This
//! action schedules a background refresh — a cheap `ziti edge list
//! edge-routers "limit 1"` — at a configurable interval so the session stays
//! warm for the rest of the run.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use runzmd_core::{Action, ActionContext, Result, Runner};
use tracing::debug;

use crate::cli;

/// Refreshes the ziti CLI session on a timer.
///
/// Headers: `interval` (duration string, default `1m`), `quiet` (`true`
/// suppresses the banner line).
///
/// The refresh thread is detached and runs for the life of the process —
/// there is no stop handle, and each invocation stacks another independent
/// timer. Refresh failures are best-effort and only logged at `debug`.
pub struct KeepSessionAliveAction {
    refresh: Arc<dyn Fn() + Send + Sync>,
}

impl KeepSessionAliveAction {
    pub fn new() -> Self {
        Self {
            refresh: Arc::new(|| {
                if let Err(err) = cli::ziti_list("edge", "edge-routers", "limit 1") {
                    debug!(error = %err, "session refresh failed");
                }
            }),
        }
    }

    /// Test seam: swap the ziti call for a counter.
    pub(crate) fn with_refresh(refresh: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self { refresh }
    }
}

impl Default for KeepSessionAliveAction {
    fn default() -> Self {
        Self::new()
    }
}

impl Action for KeepSessionAliveAction {
    fn execute(&self, ctx: &mut ActionContext, _runner: &mut dyn Runner) -> Result<()> {
        let interval = ctx.duration_header("interval", Duration::from_secs(60))?;

        if !ctx.bool_header("quiet") {
            println!(
                "Running session refresh every {}",
                humantime::format_duration(interval)
            );
        }

        let refresh = Arc::clone(&self.refresh);
        thread::spawn(move || loop {
            thread::sleep(interval);
            refresh();
        });

        Ok(())
    }
}

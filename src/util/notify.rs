//! Registration diagnostics and user acknowledgment.
//!
//! Client-side (hydrate): console logging via `log` and a blocking
//! `alert`. Server-side (SSR): no-ops, since both collaborators only
//! exist in a browser. Failures (missing window, suppressed alerts)
//! are swallowed; nothing here can meaningfully recover.

use crate::state::mcp::NewMcp;

/// Emit the constructed registration record to the console.
pub fn log_registration(record: &NewMcp) {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_string(record)
            .unwrap_or_else(|_| format!("{record:?}"));
        log::info!("registering MCP: {payload}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
    }
}

/// Show a blocking acknowledgment dialog to the user.
pub fn acknowledge(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

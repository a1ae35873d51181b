//! Summary card for one MCP device on the list page.

#[cfg(test)]
#[path = "mcp_card_test.rs"]
mod mcp_card_test;

use leptos::prelude::*;

use crate::state::mcp::{Mcp, McpStatus};

fn badge_class(status: McpStatus) -> &'static str {
    match status {
        McpStatus::Connected => "mcp-card__badge mcp-card__badge--connected",
        McpStatus::Disconnected => "mcp-card__badge mcp-card__badge--disconnected",
    }
}

fn action_class(status: McpStatus) -> &'static str {
    match status {
        McpStatus::Connected => "btn btn--danger",
        McpStatus::Disconnected => "btn btn--positive",
    }
}

/// Purely presentational card for a single device.
///
/// Shows name, location, type label, and a status badge. The action
/// buttons are inert controls; connect/disconnect has no collaborator
/// contract yet.
#[component]
pub fn McpCard(mcp: Mcp) -> impl IntoView {
    let status = mcp.status;

    view! {
        <div class="mcp-card">
            <div class="mcp-card__header">
                <h3 class="mcp-card__name">{mcp.name}</h3>
                <span class=badge_class(status)>{status.label()}</span>
            </div>

            <div class="mcp-card__details">
                <span class="mcp-card__location">{mcp.location}</span>
                <span class="mcp-card__type">{mcp.kind.label()}</span>
            </div>

            <div class="mcp-card__actions">
                <button class="btn btn--secondary">"Details"</button>
                <button class=action_class(status)>{status.action_label()}</button>
            </div>
        </div>
    }
}

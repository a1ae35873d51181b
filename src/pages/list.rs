//! Device list page with a card grid and a link to registration.

use leptos::prelude::*;

use crate::components::mcp_card::McpCard;
use crate::state::mcp::sample_mcps;

/// List page — shows one card per known MCP device.
///
/// The collection is the in-memory sample data, rebuilt on each render.
/// The empty-state branch is unreachable with the current sample set
/// but kept so a future empty store renders a call-to-action instead
/// of a blank grid.
#[component]
pub fn McpListPage() -> impl IntoView {
    let mcps = sample_mcps();

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h2>"MCP Devices"</h2>
                <a class="btn btn--primary" href="/register">
                    "+ Register MCP"
                </a>
            </header>

            {if mcps.is_empty() {
                view! {
                    <div class="list-page__empty">
                        <p>"No MCP devices registered yet."</p>
                        <a class="btn btn--primary" href="/register">
                            "Register the first MCP"
                        </a>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <div class="list-page__grid">
                        {mcps
                            .into_iter()
                            .map(|mcp| view! { <McpCard mcp=mcp/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

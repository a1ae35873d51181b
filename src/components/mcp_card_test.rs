use super::*;

#[test]
fn badge_class_flips_with_status() {
    assert_eq!(
        badge_class(McpStatus::Connected),
        "mcp-card__badge mcp-card__badge--connected"
    );
    assert_eq!(
        badge_class(McpStatus::Disconnected),
        "mcp-card__badge mcp-card__badge--disconnected"
    );
}

#[test]
fn action_class_flips_with_status() {
    assert_eq!(action_class(McpStatus::Connected), "btn btn--danger");
    assert_eq!(action_class(McpStatus::Disconnected), "btn btn--positive");
}

use super::*;

// =============================================================
// McpStatus labels
// =============================================================

#[test]
fn status_labels() {
    assert_eq!(McpStatus::Connected.label(), "Connected");
    assert_eq!(McpStatus::Disconnected.label(), "Disconnected");
}

#[test]
fn action_label_flips_with_status() {
    assert_eq!(McpStatus::Connected.action_label(), "Disconnect");
    assert_eq!(McpStatus::Disconnected.action_label(), "Connect");
}

// =============================================================
// McpType
// =============================================================

#[test]
fn type_default_is_production() {
    assert_eq!(McpType::default(), McpType::Production);
}

#[test]
fn type_labels() {
    assert_eq!(McpType::Production.label(), "Production");
    assert_eq!(McpType::Logistics.label(), "Logistics");
    assert_eq!(McpType::Office.label(), "Office");
    assert_eq!(McpType::Other.label(), "Other");
}

#[test]
fn type_parse_round_trips_option_values() {
    for kind in [
        McpType::Production,
        McpType::Logistics,
        McpType::Office,
        McpType::Other,
    ] {
        assert_eq!(McpType::parse(kind.as_str()), kind);
    }
}

#[test]
fn type_parse_unknown_falls_back_to_other() {
    assert_eq!(McpType::parse("warehouse"), McpType::Other);
    assert_eq!(McpType::parse(""), McpType::Other);
}

// =============================================================
// Sample data
// =============================================================

#[test]
fn sample_mcps_has_three_entries_in_source_order() {
    let mcps = sample_mcps();
    assert_eq!(mcps.len(), 3);
    assert_eq!(
        mcps.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
        ["1", "2", "3"]
    );
}

#[test]
fn sample_mcps_statuses_and_kinds() {
    let mcps = sample_mcps();
    assert_eq!(mcps[0].status, McpStatus::Connected);
    assert_eq!(mcps[0].kind, McpType::Production);
    assert_eq!(mcps[1].status, McpStatus::Disconnected);
    assert_eq!(mcps[1].kind, McpType::Logistics);
    assert_eq!(mcps[2].status, McpStatus::Connected);
    assert_eq!(mcps[2].kind, McpType::Office);
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn mcp_serializes_kind_under_type_key() {
    let mcp = &sample_mcps()[0];
    let value = serde_json::to_value(mcp).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": "1",
            "name": "Line MCP",
            "location": "Factory A",
            "status": "connected",
            "type": "production",
        })
    );
}

#[test]
fn mcp_deserializes_from_wire_shape() {
    let mcp: Mcp = serde_json::from_str(
        r#"{"id":"9","name":"Dock MCP","location":"Pier 4","status":"disconnected","type":"logistics"}"#,
    )
    .unwrap();
    assert_eq!(mcp.status, McpStatus::Disconnected);
    assert_eq!(mcp.kind, McpType::Logistics);
}

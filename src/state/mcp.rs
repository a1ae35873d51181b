#[cfg(test)]
#[path = "mcp_test.rs"]
mod mcp_test;

/// Connection status of an MCP device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McpStatus {
    Connected,
    Disconnected,
}

impl McpStatus {
    /// Badge label shown on the device card.
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        }
    }

    /// Label for the card's connect/disconnect action button.
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Connected => "Disconnect",
            Self::Disconnected => "Connect",
        }
    }
}

/// Site category an MCP device belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McpType {
    #[default]
    Production,
    Logistics,
    Office,
    Other,
}

impl McpType {
    /// Display label for the device card and form options.
    pub fn label(self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Logistics => "Logistics",
            Self::Office => "Office",
            Self::Other => "Other",
        }
    }

    /// Wire value used by the registration form's `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Logistics => "logistics",
            Self::Office => "office",
            Self::Other => "other",
        }
    }

    /// Parse a form option value. Anything unrecognized maps to `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            "logistics" => Self::Logistics,
            "office" => Self::Office,
            _ => Self::Other,
        }
    }
}

/// A managed connection point tracked by the console.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Mcp {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: McpStatus,
    #[serde(rename = "type")]
    pub kind: McpType,
}

/// The ephemeral record constructed by the registration form.
///
/// Never persisted anywhere: it is logged, acknowledged, and dropped.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewMcp {
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: McpType,
}

/// Fixed sample collection shown by the list page.
///
/// Reconstructed on every render; there is no process-wide store, so
/// registered devices never show up here.
pub fn sample_mcps() -> Vec<Mcp> {
    vec![
        Mcp {
            id: "1".to_owned(),
            name: "Line MCP".to_owned(),
            location: "Factory A".to_owned(),
            status: McpStatus::Connected,
            kind: McpType::Production,
        },
        Mcp {
            id: "2".to_owned(),
            name: "Logistics MCP".to_owned(),
            location: "Warehouse B".to_owned(),
            status: McpStatus::Disconnected,
            kind: McpType::Logistics,
        },
        Mcp {
            id: "3".to_owned(),
            name: "Office MCP".to_owned(),
            location: "HQ 3rd Floor".to_owned(),
            status: McpStatus::Connected,
            kind: McpType::Office,
        },
    ]
}

//! Reusable presentation components.

pub mod mcp_card;

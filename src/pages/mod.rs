//! Top-level screens, one module per route.

pub mod list;
pub mod register;

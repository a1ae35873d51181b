//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`mcp` for the device model and sample
//! data, `register` for the registration form) so individual pages can
//! depend on small focused models.

pub mod mcp;
pub mod register;

//! Browser collaborator shims.

pub mod notify;

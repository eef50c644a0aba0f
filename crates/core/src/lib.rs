//! Domain logic for the helpdesk platform.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API server, and any future CLI or worker tooling.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod sla;
pub mod ticket;
pub mod types;

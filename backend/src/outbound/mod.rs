//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business logic.

pub mod persistence;

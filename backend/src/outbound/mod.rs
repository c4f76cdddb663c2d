//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **directory**: key/value user directory backed by Redis (`bb8-redis`) or
//!   an in-memory map
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod directory;

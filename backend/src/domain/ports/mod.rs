//! Domain ports for the hexagonal boundary.

pub(crate) use super::macros::define_port_error;

mod service_output;
mod user_of_id;

pub use service_output::ServiceOutput;
#[cfg(test)]
pub use user_of_id::MockUserOfId;
pub use user_of_id::{FixtureUserOfId, UserDirectoryError, UserOfId};

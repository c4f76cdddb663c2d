//! Domain primitives, use cases and ports.
//!
//! Purpose: define the typed-result discipline every use case follows and the
//! "show user" use case built on it. Types here are transport agnostic;
//! inbound adapters decide how outcomes and faults are rendered.
//!
//! Public surface:
//! - Outcome: `Failure(E)` / `Success(U)` returned by application services.
//! - BusinessError: capability implemented by each use case's failure enum.
//! - Fault: opaque system error travelling outside the outcome.
//! - User / UserId: directory entity and its validated key.
//! - ShowUserService, ShowUserCommand, ShowUserFailure: the lookup use case.

mod business_error;
mod fault;
pub(crate) mod macros;
mod outcome;
pub mod ports;
mod show_user;
pub mod user;

pub use self::business_error::BusinessError;
pub use self::fault::Fault;
pub use self::outcome::Outcome;
pub use self::show_user::{ShowUserCommand, ShowUserFailure, ShowUserService};
pub use self::user::{User, UserId, UserValidationError};

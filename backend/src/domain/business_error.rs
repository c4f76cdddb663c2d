//! Business error capability shared by every use case.
//!
//! A business error is an expected, documented way for a use case to decline
//! a command. Each use case owns a closed enum of them, generated with
//! `define_business_error!` so the variant name doubles as the discriminant
//! reported by [`BusinessError::name`].

use std::fmt;

/// Expected failure returned in the `Failure` channel of an
/// [`Outcome`](crate::domain::Outcome).
pub trait BusinessError: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Stable discriminant naming the failure kind, e.g. `UserNotFound`.
    fn name(&self) -> &'static str;

    /// Human-readable diagnostic message.
    fn message(&self) -> String {
        self.to_string()
    }
}

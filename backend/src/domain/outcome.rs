//! Two-channel outcome value returned by application services.
//!
//! An [`Outcome`] carries either the success value of a use case or one of its
//! documented business failures. System faults travel separately as
//! [`Fault`](crate::domain::Fault), so a service signature reads
//! `Result<Outcome<E, U>, Fault>`: the outer `Err` is "something broke", the
//! inner `Failure` is "the use case said no".

use crate::domain::BusinessError;

/// Outcome of a use-case invocation.
///
/// ## Invariants
/// - Exactly one variant is populated; there is no empty state.
/// - The payload can only be reached by matching on the variant.
///
/// # Examples
/// ```
/// use user_directory::domain::{Outcome, ShowUserFailure};
///
/// let outcome: Outcome<ShowUserFailure, u8> = Outcome::Success(7);
/// assert!(outcome.is_success());
/// assert_eq!(outcome.success(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome may carry a business failure that must be rendered"]
pub enum Outcome<E: BusinessError, U> {
    /// The use case rejected the command with an expected failure.
    Failure(E),
    /// The use case completed and produced a value.
    Success(U),
}

impl<E: BusinessError, U> Outcome<E, U> {
    /// Return `true` when the outcome carries a success value.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Return `true` when the outcome carries a business failure.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Consume the outcome, returning the success value if present.
    pub fn success(self) -> Option<U> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Consume the outcome, returning the business failure if present.
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Transform the success value, leaving failures untouched.
    pub fn map<V>(self, f: impl FnOnce(U) -> V) -> Outcome<E, V> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the business failure, leaving success values untouched.
    pub fn map_failure<F: BusinessError>(self, f: impl FnOnce(E) -> F) -> Outcome<F, U> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Convert into a standard [`Result`] for use with `?` inside a use case.
    pub fn into_result(self) -> Result<U, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<E: BusinessError, U> From<Result<U, E>> for Outcome<E, U> {
    fn from(value: Result<U, E>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

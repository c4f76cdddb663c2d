//! Opaque system fault travelling outside the business outcome channel.

use std::any::Any;
use std::fmt;

use color_eyre::eyre::{Report, eyre};

/// Unexpected failure raised below a use case.
///
/// Anything that is not a documented business outcome ends up here:
/// infrastructure errors bubbled through `?`, and panics caught at the
/// adapter boundary. Renderers receive a `Fault` but only adapters that log
/// may look at it, and only through `Display`/`Debug`.
///
/// `Fault` deliberately does not implement [`std::error::Error`] so that any
/// error type converts into it with `?`.
///
/// # Examples
/// ```
/// use user_directory::domain::Fault;
///
/// fn read() -> Result<(), Fault> {
///     let _ = "x".parse::<u8>()?;
///     Ok(())
/// }
///
/// assert!(read().is_err());
/// ```
pub struct Fault(Report);

impl Fault {
    /// Build a fault from a message.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self(Report::msg(message))
    }

    /// Build a fault from a panic payload captured by `catch_unwind`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());
        Self(eyre!("use case panicked: {detail}"))
    }
}

impl<E> From<E> for Fault
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self(Report::new(error))
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.0)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, thiserror::Error)]
    #[error("directory offline")]
    struct Offline;

    #[rstest]
    fn errors_convert_with_question_mark() {
        fn fail() -> Result<(), Fault> {
            let probe: Result<(), Offline> = Err(Offline);
            probe?;
            Ok(())
        }

        let fault = fail().expect_err("conversion yields a fault");
        assert_eq!(fault.to_string(), "directory offline");
    }

    #[rstest]
    fn message_faults_display_their_message() {
        assert_eq!(Fault::msg("boom").to_string(), "boom");
    }

    #[rstest]
    #[case::str_payload(Box::new("static boom"), "static boom")]
    #[case::string_payload(Box::new(String::from("formatted boom")), "formatted boom")]
    #[case::opaque_payload(Box::new(42_u8), "non-string panic payload")]
    fn panic_payloads_keep_their_message(
        #[case] payload: Box<dyn Any + Send>,
        #[case] expected: &str,
    ) {
        let fault = Fault::from_panic(payload);
        assert!(fault.to_string().contains(expected), "{fault}");
    }
}

use thiserror::Error;

/// The error returned when an operator is called in a way it cannot honor.
///
/// Every operator checks its arguments when it is constructed, before any element is pulled.
/// Running out of elements is signaled by [`None`] and is never an `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input cannot be iterated to completion, so it cannot be materialized.
    #[error("input cannot be iterated to completion: {reason}")]
    InvalidInput {
        /// What is wrong with the input.
        reason: &'static str,
    },

    /// An argument is outside of what the operator accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// The name of the offending parameter.
        name: &'static str,
        /// What the parameter must satisfy.
        reason: &'static str,
    },
}

/// A [`Result`](std::result::Result) defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn invalid_input(reason: &'static str) -> Self {
        tracing::debug!(reason, "rejected input");
        Self::InvalidInput { reason }
    }

    pub(crate) fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        tracing::debug!(name, reason, "rejected argument");
        Self::InvalidArgument { name, reason }
    }
}

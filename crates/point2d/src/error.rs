use std::fmt;

/// Errors surfaced by point operations that require a second point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointError {
    /// A required point argument was absent.
    MissingArgument { arg: &'static str },
}

impl PointError {
    pub(crate) fn missing(arg: &'static str) -> Self {
        tracing::debug!(arg, "rejecting absent point argument");
        Self::MissingArgument { arg }
    }
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument { arg } => write!(f, "invalid argument: `{arg}` is required"),
        }
    }
}

impl std::error::Error for PointError {}

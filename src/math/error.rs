use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// The arguments lie outside the domain of the function.
    InvalidArgument {
        function: &'static str,
        reason: String,
    },
}

impl MathError {
    pub(crate) fn invalid_argument<S: Into<String>>(function: &'static str, reason: S) -> Self {
        MathError::InvalidArgument {
            function,
            reason: reason.into(),
        }
    }
}

impl Error for MathError {}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::InvalidArgument { function, reason } => {
                write!(f, "invalid argument to {function}: {reason}")
            }
        }
    }
}

use std::ffi::NulError;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An error occurring while converting a path into the form the operating system accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path contains a NUL byte at the given position.
    InteriorNul(usize),
}

impl super::Error for PathError {}

impl From<NulError> for PathError {
    fn from(error: NulError) -> Self {
        PathError::InteriorNul(error.nul_position())
    }
}

impl Display for PathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Invalid pipe path: ")?;
        match self {
            PathError::InteriorNul(position) => {
                write!(f, "Found a NUL byte at position {}", position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PathError;
    use crate::errors::Error;

    #[test]
    fn test_message() {
        assert_eq!(
            PathError::InteriorNul(3).error_message(),
            "Invalid pipe path: Found a NUL byte at position 3"
        );
    }
}

use std::convert::TryFrom;
use std::ffi::{CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::errors::PathError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A path as handed to the operating system. Unlike `Path`, it is NUL-terminated and never
/// contains an interior NUL. No normalization takes place.
pub struct PipePath(CString);

impl PipePath {
    /// Generates a pipe path from any path-like value.
    pub fn new<T: AsRef<Path>>(value: T) -> Result<Self, PathError> {
        PipePath::try_from(value.as_ref())
    }
}

impl TryFrom<&Path> for PipePath {
    type Error = PathError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        Ok(PipePath(CString::new(path.as_os_str().as_bytes())?))
    }
}

impl AsRef<CStr> for PipePath {
    fn as_ref(&self) -> &CStr {
        self.0.as_c_str()
    }
}

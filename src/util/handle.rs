use std::io::{Read, Result as IoResult};
use std::os::unix::io::{AsRawFd, RawFd};

use crate::errors::OsError;

/// A raw handle to an opened pipe or file.
///
/// The handle is a plain descriptor value: it is neither closed on drop nor checked for validity.
/// Using it after `close` is the caller's mistake to avoid.
#[derive(Clone, Copy, Debug, Hash, PartialOrd, PartialEq, Eq, Ord)]
pub struct Handle(pub RawFd);

impl Handle {
    /// The sentinel returned if opening failed.
    pub const INVALID: Handle = Handle(-1);

    /// Returns whether the value could denote an opened descriptor.
    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }

    /// Returns the handle if it is valid or the error the operating system reported otherwise.
    pub fn check(self) -> Result<Handle, OsError> {
        match self.is_valid() {
            true => Ok(self),
            false => Err(OsError::last()),
        }
    }
}

impl From<RawFd> for Handle {
    fn from(raw_value: RawFd) -> Self {
        Handle(raw_value)
    }
}

impl From<Handle> for RawFd {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl AsRawFd for Handle {
    fn as_raw_fd(&self) -> RawFd {
        self.0
    }
}

impl Read for Handle {
    fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
        OsError::check(crate::read(*self, buf)).map_err(Into::into)
    }
}

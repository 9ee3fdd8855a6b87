use std::convert::TryFrom;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::io::{Error as IoError, ErrorKind};

/// An error code reported by the operating system.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct OsError(i32);

impl super::Error for OsError {}

impl OsError {
    /// Code used if the operating system did not report a code.
    pub const UNKNOWN_CODE: i32 = 0;

    /// Capture the last error the operating system reported on this thread.
    pub fn last() -> Self {
        OsError::from_code(IoError::last_os_error().raw_os_error().unwrap_or(Self::UNKNOWN_CODE))
    }

    /// Wrap a raw `errno` value.
    pub const fn from_code(code: i32) -> Self {
        OsError(code)
    }

    /// Interpret the verbatim result of a system call.
    ///
    /// Non-negative values are passed through, negative values capture the current `errno`.
    /// This must run before any other call that may overwrite it.
    pub fn check(result: isize) -> Result<usize, OsError> {
        usize::try_from(result).map_err(|_| OsError::last())
    }

    /// Store the code as the calling thread's `errno` again.
    pub fn restore(&self) {
        unsafe {
            *errno_location() = self.0;
        }
    }

    /// Returns the raw `errno` value.
    pub fn code(&self) -> i32 {
        self.0
    }

    /// Returns the platform-independent category of the error.
    pub fn kind(&self) -> ErrorKind {
        IoError::from_raw_os_error(self.0).kind()
    }
}

#[cfg(any(target_os = "linux", target_os = "emscripten", target_os = "redox"))]
unsafe fn errno_location() -> *mut libc::c_int {
    libc::__errno_location()
}

#[cfg(target_os = "android")]
unsafe fn errno_location() -> *mut libc::c_int {
    libc::__errno()
}

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "dragonfly"
))]
unsafe fn errno_location() -> *mut libc::c_int {
    libc::__error()
}

impl Debug for OsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "OsError({}, {:?})", self.0, self.kind())
    }
}

impl Display for OsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", IoError::from_raw_os_error(self.0))
    }
}

impl From<IoError> for OsError {
    fn from(error: IoError) -> Self {
        OsError(error.raw_os_error().unwrap_or(Self::UNKNOWN_CODE))
    }
}

impl From<OsError> for IoError {
    fn from(error: OsError) -> Self {
        IoError::from_raw_os_error(error.0)
    }
}

#[cfg(test)]
mod tests {
    use super::OsError;
    use std::io::ErrorKind;

    #[test]
    fn test_kind() {
        assert_eq!(OsError::from_code(libc::ENOENT).kind(), ErrorKind::NotFound);
        assert_eq!(
            OsError::from_code(libc::EACCES).kind(),
            ErrorKind::PermissionDenied
        );
        assert_eq!(OsError::from_code(libc::EBADF).code(), libc::EBADF);
    }

    #[test]
    fn test_check_passes_values() {
        assert_eq!(OsError::check(0), Ok(0));
        assert_eq!(OsError::check(42), Ok(42));
    }

    #[test]
    fn test_restore() {
        OsError::from_code(libc::ENOENT).restore();
        assert_eq!(unsafe { libc::close(-1) }, -1);
        assert_eq!(OsError::last().code(), libc::EBADF);

        OsError::from_code(libc::ENOENT).restore();
        assert_eq!(OsError::last().code(), libc::ENOENT);
    }

    #[test]
    fn test_io_conversion() {
        let error: std::io::Error = OsError::from_code(libc::ENOENT).into();
        assert_eq!(error.raw_os_error(), Some(libc::ENOENT));
        assert_eq!(OsError::from(error), OsError::from_code(libc::ENOENT));
    }
}

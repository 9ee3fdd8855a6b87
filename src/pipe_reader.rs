use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::path::Path;

use super::errors::PathError;
use super::trace::{self, TraceEvent};
use super::util::{Handle, PipePath};

mod constants {
    use std::os::raw::c_int;

    /// Read-only with synchronized I/O, so data is visible as soon as the producer wrote it.
    pub const OPEN_FLAGS: c_int = libc::O_RDONLY | libc::O_DSYNC;
}

pub use self::constants::OPEN_FLAGS;

/// Open a pipe or file for reading.
///
/// Returns [`Handle::INVALID`] on failure; the cause is left in `errno`
/// (see [`OsError::last`](crate::errors::OsError::last)).
pub fn open(path: &CStr) -> Handle {
    unsafe { open_raw(path.as_ptr()) }
}

/// Open a pipe or file given as a Rust path.
///
/// Fails only if the path cannot be passed to the operating system at all. Failures of the open
/// itself are reported like in [`open`].
pub fn open_path<P: AsRef<Path>>(path: P) -> Result<Handle, PathError> {
    let path = PipePath::new(path)?;
    Ok(open(path.as_ref()))
}

/// Open a pipe or file given as a raw C string.
///
/// # Safety
/// `path` must be null or point to a NUL-terminated string. A null pointer is handed to the
/// operating system as is.
pub unsafe fn open_raw(path: *const c_char) -> Handle {
    let handle = Handle(libc::open(path, OPEN_FLAGS));
    let path = match path.is_null() {
        true => None,
        false => Some(CStr::from_ptr(path)),
    };
    trace::emit(TraceEvent::Opened { path, handle });
    handle
}

/// Perform a single blocking read into the buffer.
///
/// Returns the number of bytes read, 0 at the end of the stream, or a negative value on failure.
/// Short reads are neither retried nor completed.
pub fn read(handle: Handle, buffer: &mut [u8]) -> isize {
    unsafe { read_raw(handle, buffer.as_mut_ptr(), buffer.len()) }
}

/// Perform a single blocking read of up to `count` bytes.
///
/// # Safety
/// `buffer` must be valid for writes of `count` bytes.
pub unsafe fn read_raw(handle: Handle, buffer: *mut u8, count: usize) -> isize {
    let result = libc::read(handle.0, buffer as *mut libc::c_void, count);
    trace::emit(TraceEvent::Read {
        handle,
        requested: count,
        result,
    });
    result
}

/// Close a handle. Returns 0 on success or a negative value on failure.
///
/// Closing a handle twice is not detected; the outcome is whatever the operating system does with
/// the descriptor number at that point.
pub fn close(handle: Handle) -> c_int {
    let result = unsafe { libc::close(handle.0) };
    trace::emit(TraceEvent::Closed { handle, result });
    result
}

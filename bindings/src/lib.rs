#![allow(clippy::missing_safety_doc)] // Well, using C-pointers *is* unsafe...

use std::ffi::CString;
use std::os::raw::{c_char, c_int, c_uint};

use pjreader::trace::{self, TraceEvent};
use pjreader::Handle;

/// A callback receiving a single, NUL-terminated trace line.
pub type TraceCallback = unsafe extern "C" fn(line: *const c_char);

struct TraceLine(CString);

impl From<&TraceEvent<'_>> for TraceLine {
    fn from(event: &TraceEvent<'_>) -> Self {
        let mut line = event.to_string().into_bytes();
        if let Some(position) = line.iter().position(|byte| *byte == 0) {
            line.truncate(position);
        }
        TraceLine(CString::new(line).unwrap_or_default())
    }
}

/// Open a pipe or file for non-buffered reads.
///
/// @param path The path of the pipe or file.
///
/// @return The file descriptor or a negative value on failure. The cause is left in errno.
#[no_mangle]
pub unsafe extern "C" fn open_rpipe_port(path: *const c_char) -> c_int {
    pjreader::open_raw(path).0
}

/// Close a file descriptor returned by open_rpipe_port.
///
/// @param fd The file descriptor. Closing it twice is not detected.
///
/// @return 0 on success or a negative value on failure.
#[no_mangle]
pub unsafe extern "C" fn close_rpipe_port(fd: c_int) -> c_int {
    pjreader::close(Handle(fd))
}

/// Read samples from the pipe with a single blocking read. Short reads are not retried.
///
/// @param fd The file descriptor returned by open_rpipe_port.
///
/// @param samples The destination with space for at least count bytes.
///
/// @param count The maximal number of bytes to read.
///
/// @return The number of bytes read, 0 at the end of the stream or a negative value on failure.
#[no_mangle]
pub unsafe extern "C" fn read_rpipe_port(fd: c_int, samples: *mut c_char, count: c_uint) -> c_int {
    pjreader::read_raw(Handle(fd), samples as *mut u8, count as usize) as c_int
}

/// Install a callback receiving one line per call of this library.
///
/// @param callback The callback, replacing any previous one. The line passed is only valid during
/// the call. Passing nullptr removes the callback.
#[no_mangle]
pub unsafe extern "C" fn set_rpipe_trace(callback: Option<TraceCallback>) {
    match callback {
        Some(callback) => {
            log::debug!(target: trace::LOG_TARGET, "Trace callback installed");
            trace::set_hook(Some(Box::new(move |event: &TraceEvent<'_>| {
                let line = TraceLine::from(event);
                unsafe { callback(line.0.as_ptr()) };
            })));
        }
        None => {
            trace::set_hook(None);
            log::debug!(target: trace::LOG_TARGET, "Trace callback removed");
        }
    }
}

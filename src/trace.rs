//! Diagnostics emitted by every pipe operation.
//!
//! Each call produces exactly one [`TraceEvent`]. It is forwarded to the `log` facade (target
//! `pjreader`, level `debug`) and to the optional hook installed with [`set_hook`].
use std::ffi::CStr;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::RwLock;

use crate::errors::OsError;
use crate::util::Handle;

/// Target used for all log records of this crate.
pub const LOG_TARGET: &str = "pjreader";

/// A diagnostic record describing a finished call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// A path was opened. `path` is `None` if the caller passed a null pointer.
    Opened {
        /// The path as passed by the caller.
        path: Option<&'a CStr>,
        /// The handle or sentinel returned to the caller.
        handle: Handle,
    },
    /// A single read returned.
    Read {
        /// The handle read from.
        handle: Handle,
        /// The number of bytes requested.
        requested: usize,
        /// The verbatim result of the read.
        result: isize,
    },
    /// A handle was closed.
    Closed {
        /// The handle passed by the caller.
        handle: Handle,
        /// The verbatim result of the close.
        result: i32,
    },
}

impl Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TraceEvent::Opened {
                path: Some(path), ..
            } => write!(f, "PJReader opened for read file {}", path.to_string_lossy()),
            TraceEvent::Opened { path: None, .. } => {
                write!(f, "PJReader opened for read file (null)")
            }
            TraceEvent::Read { result, .. } => write!(f, "PJReader read {} bytes", result),
            TraceEvent::Closed { .. } => f.write_str("PJReader closed file"),
        }
    }
}

/// A callback receiving every trace event.
pub type Hook = Box<dyn Fn(&TraceEvent<'_>) + Send + Sync>;

static HOOK: RwLock<Option<Hook>> = RwLock::new(None);

/// Install a process-wide hook, replacing the previous one. `None` removes it.
///
/// The hook runs on the calling thread after the system call returned. It must not install
/// another hook itself. `errno` as seen by the caller is restored after the hook returned.
pub fn set_hook(hook: Option<Hook>) {
    let mut slot = HOOK.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = hook;
}

/// Returns whether a hook is installed.
pub fn has_hook() -> bool {
    HOOK.read()
        .map(|slot| slot.is_some())
        .unwrap_or_else(|poisoned| poisoned.into_inner().is_some())
}

pub(crate) fn emit(event: TraceEvent<'_>) {
    // The caller reads the cause of a failure from `errno` after we return.
    let last_error = OsError::last();

    log::debug!(target: LOG_TARGET, "{}", event);
    {
        let slot = HOOK.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(hook) = slot.as_ref() {
            hook(&event);
        }
    }

    last_error.restore();
}

#[cfg(test)]
mod tests {
    use super::TraceEvent;
    use crate::util::Handle;
    use std::ffi::CString;

    #[test]
    fn test_messages() {
        let path = CString::new("/tmp/audio.pipe").expect("Valid path");
        assert_eq!(
            TraceEvent::Opened {
                path: Some(&path),
                handle: Handle(3)
            }
            .to_string(),
            "PJReader opened for read file /tmp/audio.pipe"
        );
        assert_eq!(
            TraceEvent::Opened {
                path: None,
                handle: Handle::INVALID
            }
            .to_string(),
            "PJReader opened for read file (null)"
        );
        assert_eq!(
            TraceEvent::Read {
                handle: Handle(3),
                requested: 320,
                result: -1
            }
            .to_string(),
            "PJReader read -1 bytes"
        );
        assert_eq!(
            TraceEvent::Closed {
                handle: Handle(3),
                result: 0
            }
            .to_string(),
            "PJReader closed file"
        );
    }
}

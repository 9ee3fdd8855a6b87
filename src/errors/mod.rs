//! Errors a Rust caller may inspect after a call failed.
//!
//! The passthrough operations never return these themselves; they report failures the way the
//! system calls do. These types are an opt-in view on top of that contract.

use std::fmt::{Debug, Display};

mod os_error;
mod path_error;

pub use self::os_error::OsError;
pub use self::path_error::PathError;

/// An error occurring while accessing a pipe.
pub trait Error: PartialEq + Debug + Display {
    /// Generate a human-readable version of the error.
    fn error_message(&self) -> String {
        format!("{}", &self)
    }
}

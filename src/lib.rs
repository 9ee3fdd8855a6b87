//! This crate reads raw samples from named pipes and files without any buffering of its own.
//!
//! The three operations [`open`], [`read`] and [`close`] are plain passthroughs to the system
//! calls of the same name: a failure is reported by a negative return value and the cause is left
//! in `errno`. Every call emits one [`trace::TraceEvent`].
#![deny(missing_docs)]

pub mod errors;
mod pipe_reader;
pub mod trace;
mod util;

pub use self::pipe_reader::*;
pub use self::util::{Handle, PipePath};

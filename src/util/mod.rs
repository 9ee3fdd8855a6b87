mod handle;
mod pipe_path;

pub use self::handle::Handle;
pub use self::pipe_path::PipePath;

use std::env::consts::DLL_EXTENSION;
use std::io::Result;
use std::path::PathBuf;
use std::process::{Command, Output};

/// Build the crate and return the shared library, not the Rust library built alongside it.
pub fn shared_lib() -> PathBuf {
    let artifact = test_cdylib::build_current_project();
    let shared_lib = artifact.with_extension(DLL_EXTENSION);
    assert!(
        shared_lib.is_file(),
        "Shared library missing next to '{}'",
        artifact.display()
    );
    shared_lib
}

pub fn execute_with_shared_lib(command: &mut Command) -> Result<Output> {
    let dynamic_lib_env_var = if cfg!(target_os = "macos") {
        "DYLD_LIBRARY_PATH"
    } else if cfg!(target_os = "linux") {
        "LD_LIBRARY_PATH"
    } else {
        panic!("Unsupported OS!")
    };
    let dylib_path = shared_lib();

    command
        .arg(dylib_path.to_str().expect("Invalid path to shared library"))
        .env(
            dynamic_lib_env_var,
            dylib_path
                .parent()
                .expect("Shared library has no parent")
                .to_str()
                .expect("Invalid path to shared library"),
        )
        .output()
}

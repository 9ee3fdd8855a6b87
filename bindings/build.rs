use cbindgen::DocumentationStyle;
use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing");
    let output_file: PathBuf = [
        crate_dir.as_ref(),
        "..",
        "target",
        env::var("PROFILE").expect("PROFILE missing").as_ref(),
        "pjreader.h",
    ]
    .iter()
    .collect();

    let config = cbindgen::Config {
        language: cbindgen::Language::C,
        include_guard: Some(String::from("PJREADER")),
        documentation_style: DocumentationStyle::Doxy,
        ..Default::default()
    };

    cbindgen::generate_with_config(&crate_dir, config)
        .expect("Generating the C header failed")
        .write_to_file(output_file);
}

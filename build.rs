//! Build script for compiling protobuf definitions.
//!
//! `protoc` is taken from `PROTOC` or `PATH`. Without it, the checked-in
//! `proto/port/v1/port.v1.rs` is used instead; regenerate that file whenever
//! `ports.proto` changes.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const GENERATED: &str = "port.v1.rs";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let proto_files = ["proto/port/v1/ports.proto"];
    let includes = ["proto"];
    let fallback = "proto/port/v1/port.v1.rs";

    // Rerun if proto files change
    for file in proto_files.iter().chain([&fallback]) {
        println!("cargo:rerun-if-changed={file}");
    }
    println!("cargo:rerun-if-env-changed=PROTOC");

    if protoc_available() {
        prost_build::Config::new().compile_protos(&proto_files, &includes)?;
    } else {
        println!("cargo:warning=protoc not found, using checked-in {fallback}");
        let out_dir = PathBuf::from(env::var("OUT_DIR")?);
        fs::copy(fallback, out_dir.join(GENERATED))?;
    }

    Ok(())
}

fn protoc_available() -> bool {
    let protoc = env::var_os("PROTOC").unwrap_or_else(|| "protoc".into());
    Command::new(protoc)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

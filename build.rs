//! Build script for Glasspane
//!
//! This script handles:
//! - Platform-specific linker setup
//! - Hiding the console window for Windows release builds

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    match target_os.as_str() {
        "windows" => configure_windows(),
        "macos" | "linux" => {}
        other => println!("cargo:warning=Untested platform: {}", other),
    }
}

/// Windows-specific configuration
fn configure_windows() {
    let release = env::var("PROFILE").map(|p| p == "release").unwrap_or(false);
    let msvc = env::var("CARGO_CFG_TARGET_ENV").map(|e| e == "msvc").unwrap_or(false);

    // The pane has no console to talk to
    if release && msvc {
        println!("cargo:rustc-link-arg-bins=/SUBSYSTEM:WINDOWS");
        println!("cargo:rustc-link-arg-bins=/ENTRY:mainCRTStartup");
    }
}

//! Build script capturing toolchain metadata.
//!
//! Emits `RUST_VERSION` (the full `rustc --version` line) and
//! `RUST_VERSION_SEMVER` (`major.minor.patch` only) as compile-time
//! environment variables for the status and metrics endpoints.

use std::process::Command;

fn main() {
    let rust_version = get_rust_version().unwrap_or_else(|| "unknown".to_string());
    let semver = semver_of(&rust_version).unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=RUST_VERSION={}", rust_version);
    println!("cargo:rustc-env=RUST_VERSION_SEMVER={}", semver);

    println!("cargo:rerun-if-changed=Cargo.toml");
}

/// Get the Rust version used for compilation.
fn get_rust_version() -> Option<String> {
    let output = Command::new("rustc").args(["--version"]).output().ok()?;

    if output.status.success() {
        let version = String::from_utf8(output.stdout).ok()?;
        Some(version.trim().to_string())
    } else {
        None
    }
}

/// Extract `major.minor.patch` from a `rustc --version` line.
///
/// `"rustc 1.80.0 (051478957 2024-07-21)"` -> `"1.80.0"`. Channel
/// suffixes such as `-nightly` are stripped.
fn semver_of(version_line: &str) -> Option<String> {
    let token = version_line.split_whitespace().nth(1)?;
    let semver = token.split('-').next()?;
    Some(semver.to_string())
}

//! Toolchain and platform introspection.
//!
//! Version strings come from `build.rs`, which captures `rustc --version`
//! at compile time; platform and architecture come from `std::env::consts`.

/// Full toolchain version line, e.g. `rustc 1.80.0 (051478957 2024-07-21)`.
pub fn rust_version() -> &'static str {
    env!("RUST_VERSION")
}

/// Toolchain version as `major.minor.patch`, e.g. `1.80.0`.
pub fn rust_version_semver() -> &'static str {
    env!("RUST_VERSION_SEMVER")
}

/// Platform description, e.g. `linux-x86_64`.
pub fn platform() -> String {
    format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// CPU architecture, e.g. `x86_64`.
pub fn architecture() -> &'static str {
    std::env::consts::ARCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_strings_are_present() {
        assert!(!rust_version().is_empty());
        assert!(!rust_version_semver().is_empty());
    }

    #[test]
    fn semver_has_three_numeric_components() {
        let semver = rust_version_semver();
        if semver == "unknown" {
            return;
        }

        let parts: Vec<&str> = semver.split('.').collect();
        assert_eq!(parts.len(), 3, "expected major.minor.patch, got {semver}");
        for part in parts {
            assert!(part.parse::<u32>().is_ok(), "non-numeric component in {semver}");
        }
    }

    #[test]
    fn platform_includes_os_and_arch() {
        let platform = platform();
        assert!(platform.contains(std::env::consts::OS));
        assert!(platform.contains(std::env::consts::ARCH));
    }
}

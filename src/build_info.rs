//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `heropath <crate version> (<date>, <commit>)`, shown by `--version`.
pub fn version_line(binary: &str) -> String {
    format!(
        "{} {} ({}, {})",
        binary,
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

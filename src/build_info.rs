//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string, e.g. `flapwing 0.1.0 (2026-10-18, a1b2c3d)`.
pub fn version_line() -> String {
    format!(
        "flapwing {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

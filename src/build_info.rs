//! Compile-time build information.

pub const BUILD_COMMIT: &str = env!("ADVENTURE_BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("ADVENTURE_BUILD_DATE");

/// One-line version string, e.g. `adventure 0.1.0 (2026-10-17, 1a2b3c4)`.
pub fn version_line() -> String {
    format!(
        "{} {} ({}, {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // 7-char short hash or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_version_line_mentions_package() {
        let line = version_line();
        assert!(line.starts_with("adventure "));
        assert!(line.contains(BUILD_DATE));
    }
}

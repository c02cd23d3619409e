//! Version display.

/// The current version of stepmatch, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("stepmatch {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_line_names_binary() {
        assert!(version_line().starts_with("stepmatch "));
        assert!(version_line().ends_with(VERSION));
    }
}

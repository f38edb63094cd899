//! Output and traversal configuration

/// Configuration for validation and serialization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Spaces per nesting level (0 writes the document on a single line)
    pub indent: usize,
    /// Maximum element nesting depth below `<adf>` (0 means unlimited)
    pub max_depth: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: 2,
            max_depth: 128,
        }
    }
}

impl Config {
    /// Create a new config with specific settings
    pub const fn new(indent: usize, max_depth: u16) -> Self {
        Self { indent, max_depth }
    }

    /// Single-line output, default depth limit
    pub const fn compact() -> Self {
        Self {
            indent: 0,
            max_depth: 128,
        }
    }

    /// Default indentation with no depth limit
    pub const fn unlimited() -> Self {
        Self {
            indent: 2,
            max_depth: 0,
        }
    }

    pub const fn is_pretty(&self) -> bool {
        self.indent > 0
    }

    pub(crate) fn depth_exceeded(&self, depth: usize) -> bool {
        self.max_depth != 0 && depth > usize::from(self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, 2);
        assert!(config.is_pretty());
        assert!(!config.depth_exceeded(128));
        assert!(config.depth_exceeded(129));
    }

    #[test]
    fn test_compact_and_unlimited() {
        assert!(!Config::compact().is_pretty());
        assert!(!Config::unlimited().depth_exceeded(10_000));
        assert_eq!(Config::new(4, 8), Config { indent: 4, max_depth: 8 });
    }
}

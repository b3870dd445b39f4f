//! Configuration types for the tree walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// List files beneath their directories, after the subdirectories.
    pub include_files: bool,
    /// Deepest layer to descend into; the root's children are layer 0.
    /// `None` walks the whole tree.
    pub max_depth: Option<usize>,
    /// Descend into directories reached through symbolic links.
    pub follow_links: bool,
}

impl TreeConfig {
    /// Check if a layer at `depth` is past the depth limit.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_depth() {
        let config = TreeConfig::default();
        assert!(!config.beyond_max_depth(0));
        assert!(!config.beyond_max_depth(10_000));
    }

    #[test]
    fn test_depth_limit_is_inclusive() {
        let config = TreeConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        assert!(!config.beyond_max_depth(0));
        assert!(!config.beyond_max_depth(1));
        assert!(config.beyond_max_depth(2));
    }
}

//! Browser configuration.

/// Behavior configuration for the browser core.
///
/// No file format: collaborators construct this in code and decide
/// themselves where the values come from.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Lines moved by one page-scroll step. A rendering surface with
    /// real font metrics will usually override this with its visible
    /// line count.
    pub page_lines: usize,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self { page_lines: 24 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let cfg = BrowserConfig::default();
        assert_eq!(cfg.page_lines, 24);
    }
}

//! Build configuration.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Placeholder replaced by an entry's `srcFile` in a source template.
pub const SRC_PLACEHOLDER: &str = "{src}";

/// Default source template: pages live in a sibling `Client` directory as `.tsx` files.
pub const DEFAULT_SOURCE_TEMPLATE: &str = "../Client/{src}.tsx";

/// Default output file.
pub const DEFAULT_OUTPUT: &str = "sitemap.xml";

/// Maps an entry's `srcFile` to a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    template: String,
}

impl SourceLayout {
    /// Create a layout from a template containing `{src}`.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(SRC_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "source template '{}' must contain {}",
                template, SRC_PLACEHOLDER
            )));
        }
        Ok(Self { template })
    }

    /// Expand the template for a `srcFile` value.
    ///
    /// Leading slashes are stripped so `"Home"` and `"/Home"` name the same file.
    pub fn source_path(&self, src_file: &str) -> PathBuf {
        let src = src_file.trim_start_matches('/');
        PathBuf::from(self.template.replace(SRC_PLACEHOLDER, src))
    }
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            template: DEFAULT_SOURCE_TEMPLATE.to_string(),
        }
    }
}

/// Options for a sitemap build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Where the sitemap is written
    pub output: PathBuf,
    /// How `srcFile` values map to files
    pub layout: SourceLayout,
    /// Indent the XML output
    pub pretty: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            layout: SourceLayout::default(),
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = SourceLayout::default();
        assert_eq!(layout.source_path("Home"), PathBuf::from("../Client/Home.tsx"));
        assert_eq!(layout.source_path("/Home"), PathBuf::from("../Client/Home.tsx"));
        assert_eq!(
            layout.source_path("pages/About"),
            PathBuf::from("../Client/pages/About.tsx")
        );
    }

    #[test]
    fn test_custom_layout() {
        let layout = SourceLayout::new("site/src/{src}.mdx").unwrap();
        assert_eq!(layout.source_path("blog"), PathBuf::from("site/src/blog.mdx"));
    }

    #[test]
    fn test_template_requires_placeholder() {
        assert!(matches!(SourceLayout::new("../Client/page.tsx"), Err(Error::Config(_))));
    }
}

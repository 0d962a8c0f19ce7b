//! Theme-extension types.
//!
//! `theme.extend` adds design tokens on top of the generator's built-in
//! theme without replacing it. The font-family category is modeled with
//! concrete types; any other token category (colors, spacing, ...) is
//! carried through as raw JSON so it round-trips untouched. How the
//! generator merges these tokens into its defaults is its own business.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Theme customization block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThemeConfig {
    /// Tokens added on top of the generator's default theme
    #[serde(default)]
    pub extend: ThemeExtend,
}

/// Token categories added by this project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ThemeExtend {
    /// Font stacks by category name, e.g. `sans = ["Inter", "system-ui", "sans-serif"]`
    ///
    /// Each value is an ordered CSS fallback list.
    #[serde(default, rename = "fontFamily", skip_serializing_if = "IndexMap::is_empty")]
    pub font_family: IndexMap<String, Vec<String>>,

    /// Token categories this tool doesn't model; passed through verbatim
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl ThemeExtend {
    /// True when no tokens are declared at all.
    pub fn is_empty(&self) -> bool {
        self.font_family.is_empty() && self.other.is_empty()
    }

    /// Names of all declared token categories, in declaration order.
    pub fn categories(&self) -> Vec<String> {
        let mut names = Vec::new();
        if !self.font_family.is_empty() {
            names.push("fontFamily".to_string());
        }
        names.extend(self.other.keys().cloned());
        names
    }
}

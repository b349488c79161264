//! Configuration for an import run

use serde::{Deserialize, Serialize};
use stardex_domain::Category;

/// What to do with a season/episode value that is not a plain integer
/// (multi-part numbering like `01/02` is the usual culprit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Store the record with the number set to 0
    #[default]
    CoerceToZero,
    /// Reject the record with `BuildError::InvalidNumber`
    Skip,
}

/// Configuration for an import run
///
/// Controls which categories are imported and how non-numeric
/// season/episode values are handled.
///
/// # Examples
///
/// ```
/// use stardex_import::{ImportConfig, NumberPolicy};
/// use stardex_domain::Category;
///
/// // Default configuration: every category, lenient number handling
/// let config = ImportConfig::default();
/// assert!(config.is_enabled(Category::Starship));
/// assert_eq!(config.number_policy, NumberPolicy::CoerceToZero);
///
/// // Strict configuration rejects records with unparseable numbers
/// let config = ImportConfig::strict();
/// assert_eq!(config.number_policy, NumberPolicy::Skip);
///
/// // Restrict the run to a subset of categories
/// let config = ImportConfig::only(vec![Category::Episode]);
/// assert!(!config.is_enabled(Category::Species));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Categories to import; sidebars of other categories are skipped
    /// with a diagnostic log
    pub categories: Vec<Category>,

    /// Handling of non-numeric season/episode values
    /// Default: `CoerceToZero`
    #[serde(default)]
    pub number_policy: NumberPolicy,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            number_policy: NumberPolicy::CoerceToZero,
        }
    }
}

impl ImportConfig {
    /// Every category, rejecting records whose numeric fields do not parse.
    pub fn strict() -> Self {
        Self {
            number_policy: NumberPolicy::Skip,
            ..Default::default()
        }
    }

    /// Import only the given categories.
    pub fn only(categories: Vec<Category>) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }

    /// Whether a category is enabled for this run.
    pub fn is_enabled(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

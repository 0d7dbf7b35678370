//! Category filter used by selection and the category dropdown.
use std::fmt;

use strum_macros::EnumString;

/// Value of the "all categories" sentinel.
pub const ALL: &str = "all";
/// Label shown for the sentinel in the dropdown.
pub const ALL_LABEL: &str = "All Categories";

/// Selected category: either the `all` sentinel or one exact category.
///
/// Parsing never fails: `"all"` maps to `All`, anything else to `Only`.
#[derive(Debug, Clone, Default, PartialEq, Eq, EnumString)]
pub enum CategoryFilter {
    /// Every quote matches.
    #[default]
    #[strum(serialize = "all")]
    All,
    /// Only quotes whose category equals the value exactly.
    #[strum(default)]
    Only(String),
}

impl CategoryFilter {
    /// Returns `true` if `category` passes the filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sentinel_and_categories() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "All".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("All".to_string())
        );
        assert_eq!(
            "Motivation".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("Motivation".to_string())
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        let filter = CategoryFilter::Only("Life".to_string());
        assert!(filter.matches("Life"));
        assert!(!filter.matches("life"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(CategoryFilter::Only("Humor".into()).to_string(), "Humor");
    }
}

//! View model for the presentation surface: display text and the category
//! dropdown.
use quote_common::category::{ALL, ALL_LABEL};

use crate::store::QuoteStore;

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value passed back as the selected filter.
    pub value: String,
    /// Visible label.
    pub label: String,
}

impl CategoryOption {
    fn same(category: &str) -> Self {
        CategoryOption {
            value: category.to_string(),
            label: category.to_string(),
        }
    }
}

/// The `all` sentinel followed by every derived category.
pub fn category_options(store: &QuoteStore) -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption {
        value: ALL.to_string(),
        label: ALL_LABEL.to_string(),
    }];
    options.extend(store.categories().iter().map(|c| CategoryOption::same(c)));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_common::Quote;

    #[test]
    fn sentinel_comes_first() {
        let store = QuoteStore::from(vec![
            Quote::new("a", "Life"),
            Quote::new("b", "Work"),
            Quote::new("c", "Life"),
        ]);
        let values: Vec<String> = category_options(&store).into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["all", "Life", "Work"]);
    }

    #[test]
    fn empty_store_only_has_sentinel() {
        let options = category_options(&QuoteStore::new());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, ALL_LABEL);
    }
}

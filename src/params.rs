use url::form_urlencoded;

use crate::visibility::SearchMode;

/// Sort orders offered by the search form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Alphabetical,
    Recent,
    BestMatch,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [
        SortOrder::Alphabetical,
        SortOrder::Recent,
        SortOrder::BestMatch,
    ];

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "alphabetical" => Some(SortOrder::Alphabetical),
            "recent" => Some(SortOrder::Recent),
            "best_match" => Some(SortOrder::BestMatch),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "alphabetical",
            SortOrder::Recent => "recent",
            SortOrder::BestMatch => "best_match",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "Alphabetical",
            SortOrder::Recent => "Most recent",
            SortOrder::BestMatch => "Best match",
        }
    }
}

/// Search state carried in the page URL from a previous search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    pub ingredients: Vec<String>,
    pub exclusive: Option<String>,
    pub include_ubiquitous: bool,
    pub sort_by: Option<SortOrder>,
}

impl SearchParams {
    /// Parse a query string, with or without the leading `?`.
    /// The first occurrence of a repeated key wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = SearchParams::default();
        let mut seen_ingredients = false;
        let mut seen_ubiquitous = false;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "ingredients" if !seen_ingredients => {
                    seen_ingredients = true;
                    params.ingredients = value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "exclusive" if params.exclusive.is_none() => {
                    params.exclusive = Some(value.into_owned());
                }
                "include-ubiquitous" if !seen_ubiquitous => {
                    seen_ubiquitous = true;
                    params.include_ubiquitous = value == "on";
                }
                "sort_by" if params.sort_by.is_none() => {
                    params.sort_by = SortOrder::from_wire(&value);
                }
                _ => {}
            }
        }
        params
    }

    /// Only the literal `"False"` selects inclusive mode.
    pub fn mode(&self) -> SearchMode {
        match self.exclusive.as_deref() {
            Some("False") => SearchMode::Inclusive,
            _ => SearchMode::Exclusive,
        }
    }

    /// Initial state of the ubiquitous checkbox. Inclusive searches leave
    /// it untouched (unchecked).
    pub fn ubiquitous_checked(&self) -> bool {
        self.mode() == SearchMode::Exclusive && self.include_ubiquitous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::IngredientPool;
    use crate::visibility::VisibilityToggle;

    #[test]
    fn test_missing_ingredients_means_nothing_to_replay() {
        let params = SearchParams::parse("");
        assert!(params.ingredients.is_empty());
        assert_eq!(params.mode(), SearchMode::Exclusive);
        assert!(!params.ubiquitous_checked());

        let params = SearchParams::parse("?sort_by=recent");
        assert!(params.ingredients.is_empty());
        assert_eq!(params.sort_by, Some(SortOrder::Recent));
    }

    #[test]
    fn test_replay_inclusive_search() {
        let params = SearchParams::parse("?ingredients=flour,sugar&exclusive=False");
        assert_eq!(params.ingredients, vec!["flour", "sugar"]);
        assert_eq!(params.mode(), SearchMode::Inclusive);

        let mut pool = IngredientPool::new(["butter", "flour", "sugar"]);
        pool.replay(&params.ingredients);
        assert_eq!(pool.selected().collect::<Vec<_>>(), vec!["flour", "sugar"]);

        let toggle = VisibilityToggle::new(params.mode(), true);
        assert!(!toggle.container_visible(), "Inclusive mode hides the checkbox");
        assert!(!params.ubiquitous_checked());
    }

    #[test]
    fn test_ubiquitous_checkbox_follows_param() {
        let on = SearchParams::parse("ingredients=eggs&exclusive=True&include-ubiquitous=on");
        assert_eq!(on.mode(), SearchMode::Exclusive);
        assert!(on.ubiquitous_checked());

        let off = SearchParams::parse("ingredients=eggs&include-ubiquitous=off");
        assert!(!off.ubiquitous_checked());
    }

    #[test]
    fn test_only_literal_false_is_inclusive() {
        for raw in ["false", "inclusive", "0", ""] {
            let params = SearchParams::parse(&format!("exclusive={}", raw));
            assert_eq!(params.mode(), SearchMode::Exclusive, "exclusive={:?}", raw);
        }
    }

    #[test]
    fn test_decodes_form_encoding() {
        let params = SearchParams::parse("ingredients=cr%C3%A8me+fra%C3%AEche%2Csalt");
        assert_eq!(params.ingredients, vec!["crème fraîche", "salt"]);
    }

    #[test]
    fn test_unknown_sort_is_ignored() {
        let params = SearchParams::parse("sort_by=random");
        assert_eq!(params.sort_by, None);
        assert_eq!(SortOrder::from_wire("best_match"), Some(SortOrder::BestMatch));
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_wire(order.as_wire()), Some(order));
        }
    }
}

use std::str::FromStr;

use tracing::warn;

use crate::error::RecipeUiError;

/// Value carried by the exclusive/inclusive radio controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleValue {
    True,
    False,
}

impl ToggleValue {
    pub fn as_str(self) -> &'static str {
        match self {
            ToggleValue::True => "True",
            ToggleValue::False => "False",
        }
    }
}

impl FromStr for ToggleValue {
    type Err = RecipeUiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "True" => Ok(ToggleValue::True),
            "False" => Ok(ToggleValue::False),
            other => Err(RecipeUiError::UnknownToggleValue(other.to_string())),
        }
    }
}

/// Whether a recipe must use only the chosen ingredients (exclusive) or
/// just any of them (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Exclusive,
    Inclusive,
}

impl From<ToggleValue> for SearchMode {
    fn from(value: ToggleValue) -> Self {
        match value {
            ToggleValue::True => SearchMode::Exclusive,
            ToggleValue::False => SearchMode::Inclusive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Shown,
    Hidden,
    Unrecognized,
}

/// Visibility of the "include ubiquitous ingredients" checkbox, driven by
/// the search mode radios.
///
/// With `gate_best_match` set, switching to exclusive mode also drops the
/// "best match" sort option. That removal is permanent for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityToggle {
    mode: SearchMode,
    gate_best_match: bool,
    best_match_available: bool,
}

impl VisibilityToggle {
    pub fn new(mode: SearchMode, gate_best_match: bool) -> Self {
        Self {
            mode,
            gate_best_match,
            best_match_available: true,
        }
    }

    /// Mode of the last recognized control value.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// The ubiquitous checkbox is only offered in exclusive mode.
    pub fn container_visible(&self) -> bool {
        self.mode == SearchMode::Exclusive
    }

    pub fn best_match_available(&self) -> bool {
        self.best_match_available
    }

    /// Handle a raw control value. Unknown values are logged and ignored.
    pub fn on_change(&mut self, raw: &str) -> ToggleOutcome {
        match raw.parse::<ToggleValue>() {
            Ok(value) => self.apply(value),
            Err(e) => {
                warn!("Error when toggling ubiquitous checkbox: {}", e);
                ToggleOutcome::Unrecognized
            }
        }
    }

    pub fn apply(&mut self, value: ToggleValue) -> ToggleOutcome {
        self.mode = SearchMode::from(value);
        match self.mode {
            SearchMode::Exclusive => {
                if self.gate_best_match {
                    self.best_match_available = false;
                }
                ToggleOutcome::Shown
            }
            SearchMode::Inclusive => ToggleOutcome::Hidden,
        }
    }
}

use serde::Deserialize;

use crate::error::RecipeUiError;

/// Id of the optional `<script type="application/json">` element holding
/// overrides for [`UiConfig`].
pub const CONFIG_SCRIPT_ID: &str = "recipe-ui-config";

/// Where the widgets find their data and mount points on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Serving counter; its text is the baseline count and the scaler
    /// controls are mounted in its place.
    pub servings_id: String,
    /// Class shared by the quantity labels, in ingredient order.
    pub quantity_class: String,
    /// Container whose children are the selectable ingredient options.
    pub ingredient_list_id: String,
    pub selector_mount_id: String,
    pub search_options_mount_id: String,
    /// Name of the hidden form field receiving the comma-joined selection.
    pub form_field_name: String,
    pub suggestion_limit: usize,
    /// Drop the "best match" sort option once exclusive mode is chosen.
    pub gate_best_match: bool,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            servings_id: "servings".to_string(),
            quantity_class: "serving-span".to_string(),
            ingredient_list_id: "ingredients".to_string(),
            selector_mount_id: "ingredient-selector".to_string(),
            search_options_mount_id: "search-options".to_string(),
            form_field_name: "ingredients".to_string(),
            suggestion_limit: 8,
            gate_best_match: true,
            log_filter: "info".to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, RecipeUiError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

pub mod ingredient_selector;
pub mod search_options;
pub mod serving_scaler;

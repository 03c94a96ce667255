mod app;
mod components;
mod config;
mod dom;
mod error;
mod logging;
mod params;
mod quantity;
mod scaling;
mod selection;
mod visibility;

use tracing::error;

use config::UiConfig;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = dom::config_json()
        .map(|json| UiConfig::from_json(&json))
        .unwrap_or_else(|| Ok(UiConfig::default()));
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (UiConfig::default(), Some(e)),
    };

    logging::init(&config.log_filter);
    if let Some(e) = config_error {
        error!("{}; falling back to defaults", e);
    }

    app::mount_widgets(&config);
}

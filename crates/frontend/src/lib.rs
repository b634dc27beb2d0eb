pub mod binding;
pub mod components;
pub mod web_document;

use components::TabStrip;
use leptos::prelude::*;
use tabs::TabSelectionConfig;
use wasm_bindgen::prelude::*;

/// `undefined`/`null` mean the default config
fn config_from_js(config: JsValue) -> Result<TabSelectionConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(TabSelectionConfig::default());
    }
    let config: TabSelectionConfig = serde_wasm_bindgen::from_value(config)?;
    config
        .validate()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(config)
}

/// Bind the tabs of an existing page container and keep the listeners for
/// the page lifetime.
#[wasm_bindgen]
pub fn bind_tab_selection(config: JsValue) -> Result<(), JsValue> {
    let config = config_from_js(config)?;
    let binding =
        binding::bind_tabs(config).map_err(|err| JsValue::from_str(&err.to_string()))?;
    binding.forget();
    Ok(())
}

/// Render a `TabStrip` into `<body>` and bind it.
#[wasm_bindgen]
pub fn mount_tab_strip(titles: JsValue, config: JsValue) -> Result<(), JsValue> {
    let titles: Vec<String> = serde_wasm_bindgen::from_value(titles)?;
    let config = config_from_js(config)?;

    leptos::mount::mount_to_body(move || view! { <TabStrip titles=titles.clone() config=config.clone() /> });
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    match binding::bind_tabs(TabSelectionConfig::default()) {
        Ok(binding) => binding.forget(),
        // Страница без контейнера табов: ничего не привязываем
        Err(err) => log::warn!("tab selection not bound: {}", err),
    }
}

// Browser helpers: console logging, viewport size, page config.

use crate::config::{CONFIG_ELEMENT_ID, InteractionConfig};

pub fn clog(msg: &str) {
    gloo::console::log!(msg);
}

pub fn cwarn(msg: &str) {
    gloo::console::warn!(msg);
}

/// Height of the layout viewport, used as the screen height for drop
/// detection. Falls back to 800 when there is no window.
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0)
}

/// Reads the optional JSON config embedded in the page. Missing config
/// means defaults; invalid config is reported and ignored.
pub fn load_config() -> InteractionConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        return InteractionConfig::default();
    };
    if raw.trim().is_empty() {
        return InteractionConfig::default();
    }
    match InteractionConfig::from_json(&raw) {
        Ok(cfg) => {
            clog(&format!("config loaded: {:?}", cfg.skin));
            cfg
        }
        Err(err) => {
            cwarn(&format!("ignoring {CONFIG_ELEMENT_ID}: {err}"));
            InteractionConfig::default()
        }
    }
}

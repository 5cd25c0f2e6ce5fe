//! Thin `web-sys` wrappers for the browser features the app touches:
//! alerts, opening a new tab and one-shot geolocation.

use swim_core::geo::Coordinates;
use swim_core::marker::Selection;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Show a blocking browser alert. No-op outside a window context.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available to open {}", url);
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::error!("Failed to open {}: {:?}", url, e);
    }
}

/// Open navigation directions to the selected record, or alert when it
/// has no coordinates.
pub fn open_directions(selection: &Selection) {
    match selection.directions_url() {
        Ok(url) => open_in_new_tab(&url),
        Err(e) => {
            log::warn!("No directions for {}: {}", selection.title(), e);
            alert(&e.to_string());
        }
    }
}

/// How long the browser may take to produce a fix once permission is granted.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 10_000;

/// Ask the browser for the current position.
///
/// Resolves to `None` when geolocation is unavailable, the user denies
/// the permission prompt or no fix arrives within the timeout.
pub async fn current_position() -> Option<Coordinates> {
    let geolocation = web_sys::window()?.navigator().geolocation().ok()?;
    let options = web_sys::PositionOptions::new();
    options.set_timeout(GEOLOCATION_TIMEOUT_MS);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) =
            geolocation.get_current_position_with_error_callback_and_options(&resolve, Some(&reject), &options)
        {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: web_sys::Position = value.unchecked_into();
            let coords = position.coords();
            let here = Coordinates::from_parts(Some(coords.latitude()), Some(coords.longitude()));
            log::info!("User position: {:?}", here);
            here
        }
        Err(e) => {
            log::warn!("Geolocation unavailable: {:?}", e);
            None
        }
    }
}

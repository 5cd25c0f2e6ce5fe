//! Typed wrappers around the Leaflet map via `js_sys::eval()`.
//!
//! The map functions live in `assets/js/swim-map.js`, embedded at compile
//! time and evaluated as globals once Leaflet has loaded. Every call polls
//! until the map is ready, so callers never need to sequence against the
//! script loading or the container being mounted.

use dioxus::prelude::*;
use swim_core::geo::Coordinates;
use swim_core::marker::MapMarker;

static SWIM_MAP_JS: &str = include_str!("../assets/js/swim-map.js");

/// DOM id of the map container.
pub const MAP_CONTAINER_ID: &str = "swim-map";

pub const DEFAULT_ZOOM: u8 = 11;
pub const FOCUS_ZOOM: u8 = 15;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SwimSafe JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Run `call` once the map exists.
fn when_map_ready(call: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__swimMapReady) {{
                    clearInterval(poll);
                    try {{ {call} }} catch(e) {{ console.error('[SwimSafe] map call failed:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Load the map scripts and create the map in [`MAP_CONTAINER_ID`],
/// centred on `center`.
///
/// Waits for Leaflet and the container element, then evaluates the map
/// script at global scope and promotes its functions to `window.*`.
pub fn init_map(center: Coordinates) {
    let store_js = format!(
        "window.__swimMapScript = {};",
        serde_json::to_string(SWIM_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    call_js(&format!(
        r#"
        (function() {{
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{MAP_CONTAINER_ID}')) {{
                    clearInterval(waitForLeaflet);
                    if (typeof initSwimMap === 'undefined') {{
                        (0, eval)(window.__swimMapScript);
                    }}
                    delete window.__swimMapScript;
                    window.initSwimMap = initSwimMap;
                    window.renderSwimMarkers = renderSwimMarkers;
                    window.focusSwimMap = focusSwimMap;
                    window.showUserPosition = showUserPosition;
                    window.initSwimMap('{MAP_CONTAINER_ID}', {lat}, {lon}, {DEFAULT_ZOOM});
                    console.log('SwimSafe map initialized');
                }}
            }}, 100);
        }})();
        "#,
        lat = center.lat,
        lon = center.lon,
    ));
}

/// Replace the markers on the map.
pub fn render_markers(markers: &[MapMarker]) {
    let json = match serde_json::to_string(markers) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize markers: {}", e);
            return;
        }
    };
    log::debug!("Rendering {} markers", markers.len());
    // Serialized JSON is a valid JS array literal.
    when_map_ready(&format!("window.renderSwimMarkers({});", json));
}

pub fn focus(target: Coordinates) {
    when_map_ready(&format!(
        "window.focusSwimMap({}, {}, {});",
        target.lat, target.lon, FOCUS_ZOOM
    ));
}

pub fn show_user_position(position: Coordinates) {
    when_map_ready(&format!(
        "window.showUserPosition({}, {});",
        position.lat, position.lon
    ));
}

/// Open a channel that receives the key of every clicked marker.
///
/// Read it with `eval.recv::<String>().await` in a spawned loop; the
/// channel stays open for as long as the returned handle lives.
pub fn marker_clicks() -> document::Eval {
    document::eval(
        r#"
        window.__swimMarkerSink = function(key) { dioxus.send(key); };
        await new Promise(function() {});
        "#,
    )
}

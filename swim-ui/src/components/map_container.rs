//! Map container component with loading state.

use crate::map_bridge::MAP_CONTAINER_ID;
use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// Whether data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 480)]
    pub min_height: u32,
}

/// A container div for the Leaflet map with a loading overlay.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; height: 100%; position: relative; width: 100%;",
        props.min_height
    );
    let map_style = format!("width: 100%; height: 100%; min-height: {}px;", props.min_height);

    rsx! {
        div {
            style: "{style}",
            div {
                id: MAP_CONTAINER_ID,
                style: "{map_style}",
            }
            if props.loading {
                div {
                    style: "position: absolute; top: 12px; left: 50%; transform: translateX(-50%); z-index: 1000; padding: 4px 12px; background: rgba(255,255,255,0.9); border-radius: 12px; color: #666; font-size: 12px;",
                    "Loading locations..."
                }
            }
        }
    }
}

//! Water fountain detail panel.

use crate::browser;
use crate::components::info_panel::{action_button_style, ACTION_ROW_STYLE};
use crate::components::InfoPanel;
use crate::state::AppState;
use dioxus::prelude::*;
use swim_core::amenity::WaterFountain;
use swim_core::marker::Selection;

#[derive(Props, Clone, PartialEq)]
pub struct FountainInfoProps {
    pub fountain: WaterFountain,
}

#[component]
pub fn FountainInfo(props: FountainInfoProps) -> Element {
    let mut state = use_context::<AppState>();
    let fountain = props.fountain.clone();
    let description = props
        .fountain
        .description
        .clone()
        .filter(|d| !d.trim().is_empty());

    rsx! {
        InfoPanel {
            title: props.fountain.display_name().to_string(),
            subtitle: "Drinking water fountain".to_string(),
            on_close: move |_| state.selection.set(None),

            if let Some(description) = description {
                p { style: "margin: 0; font-size: 13px; color: #455A64;", "{description}" }
            }

            div {
                style: ACTION_ROW_STYLE,
                button {
                    style: action_button_style(false),
                    onclick: move |_| state.selection.set(None),
                    "Close"
                }
                button {
                    style: action_button_style(true),
                    onclick: move |_| browser::open_directions(&Selection::Fountain(fountain.clone())),
                    "Directions"
                }
            }
        }
    }
}

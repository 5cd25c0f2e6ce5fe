//! Page header with today's date, local weather and the planner button.

use crate::state::AppState;
use dioxus::prelude::*;
use swim_core::planner::{today_label, PlannerForm};

#[derive(Props, Clone, PartialEq)]
pub struct SiteHeaderProps {
    pub title: String,
}

#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let mut state = use_context::<AppState>();
    let today = use_hook(today_label);
    let weather = (state.area_weather)();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 16px; padding: 8px 16px; background: #0D47A1; color: #FFF;",
            h2 {
                style: "margin: 0; font-size: 18px; flex: 1;",
                "{props.title}"
            }
            span {
                style: "font-size: 13px; opacity: 0.9;",
                "{today}"
            }
            if let Some(weather) = weather {
                span {
                    style: "font-size: 13px;",
                    strong { "{weather.temperature_label()}" }
                    if let Some(summary) = weather.summary() {
                        " {summary}"
                    }
                }
            }
            button {
                style: "padding: 6px 14px; border: none; border-radius: 4px; background: #FFF; color: #0D47A1; font-weight: bold; cursor: pointer;",
                onclick: move |_| state.open_planner(PlannerForm::new(None)),
                "Planner"
            }
        }
    }
}

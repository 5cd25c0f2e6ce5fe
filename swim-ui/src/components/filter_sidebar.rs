//! Search box, filter panel and result list.

use crate::components::StatusBadge;
use crate::state::{AppState, Pipeline};
use dioxus::prelude::*;
use swim_core::filter::{self, Amenity, DistanceBucket, FilterOutcome, ShowOnMap, NO_RESULTS_MESSAGE};
use swim_core::location::{Location, SafetyStatus};

const SECTION_STYLE: &str = "margin: 12px 0;";
const SECTION_TITLE_STYLE: &str = "margin: 0 0 6px 0; font-size: 13px; font-weight: bold; color: #37474F;";

fn chip_style(active: bool, disabled: bool) -> String {
    let (background, color) = if active { ("#0D47A1", "#FFF") } else { ("#ECEFF1", "#37474F") };
    let cursor = if disabled { "not-allowed; opacity: 0.5" } else { "pointer" };
    format!(
        "padding: 4px 10px; margin: 0 6px 6px 0; border: none; border-radius: 12px; font-size: 12px; background: {}; color: {}; cursor: {};",
        background, color, cursor
    )
}

/// The left-hand panel: search, filters and the visible locations.
#[component]
pub fn FilterSidebar() -> Element {
    let mut state = use_context::<AppState>();
    let pipeline = use_context::<Pipeline>();
    let query = (state.search)();
    let suggestions = filter::suggestions(&pipeline.visible.read(), &query);
    let visible = FilterOutcome::from_visible(pipeline.visible.read().clone());

    rsx! {
        div {
            style: "width: 320px; padding: 12px; overflow-y: auto; border-right: 1px solid #E0E0E0; background: #FAFAFA;",

            input {
                r#type: "search",
                placeholder: "Search beach, river location",
                value: "{query}",
                style: "width: 100%; box-sizing: border-box; padding: 8px 10px; border: 1px solid #CFD8DC; border-radius: 4px;",
                oninput: move |evt: Event<FormData>| state.search.set(evt.value()),
            }

            {match suggestions {
                Some(FilterOutcome::Matches(matches)) => rsx! {
                    ul {
                        style: "list-style: none; margin: 4px 0 0 0; padding: 0; border: 1px solid #CFD8DC; border-radius: 4px; background: #FFF;",
                        for location in matches {
                            Suggestion { key: "{location.key()}", location }
                        }
                    }
                },
                Some(FilterOutcome::NoResults) => rsx! {
                    p {
                        style: "margin: 6px 0; font-size: 12px; color: #757575;",
                        "{NO_RESULTS_MESSAGE}"
                    }
                },
                None => rsx! {},
            }}

            FilterPanel {}

            h4 {
                style: "margin: 16px 0 6px 0; font-size: 13px; color: #37474F;",
                "{visible.locations().len()} locations"
            }
            {match visible {
                FilterOutcome::NoResults => rsx! {
                    p {
                        style: "font-size: 12px; color: #757575;",
                        "{NO_RESULTS_MESSAGE}"
                    }
                },
                FilterOutcome::Matches(locations) => rsx! {
                    for location in locations {
                        ResultRow { key: "{location.key()}", location }
                    }
                },
            }}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LocationRowProps {
    location: Location,
}

#[component]
fn Suggestion(props: LocationRowProps) -> Element {
    let mut state = use_context::<AppState>();
    let location = props.location.clone();

    rsx! {
        li {
            style: "padding: 6px 10px; cursor: pointer; font-size: 13px; border-bottom: 1px solid #ECEFF1;",
            onclick: move |_| {
                state.search.set(String::new());
                state.select_location(location.clone());
            },
            "{props.location.name}"
            span {
                style: "margin-left: 6px; font-size: 11px; color: #90A4AE;",
                "{props.location.kind.display_name()}"
            }
        }
    }
}

#[component]
fn ResultRow(props: LocationRowProps) -> Element {
    let mut state = use_context::<AppState>();
    let location = props.location.clone();
    let distance = props.location.distance_label();

    rsx! {
        div {
            style: "padding: 8px; margin-bottom: 6px; background: #FFF; border: 1px solid #ECEFF1; border-radius: 4px; cursor: pointer;",
            onclick: move |_| state.select_location(location.clone()),
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 8px;",
                strong { style: "font-size: 13px;", "{props.location.name}" }
                StatusBadge { status: props.location.status, label: props.location.status_label.clone() }
            }
            div {
                style: "font-size: 11px; color: #78909C; margin-top: 2px;",
                "{props.location.kind.display_name()}"
                if let Some(distance) = distance {
                    " · {distance}"
                }
            }
        }
    }
}

/// Water quality, distance, amenity and scope filters with a reset button.
#[component]
fn FilterPanel() -> Element {
    let mut state = use_context::<AppState>();
    let filters = (state.filters)();
    let has_position = (state.user_position)().is_some();

    rsx! {
        div {
            style: "margin-top: 12px; padding: 8px 10px; background: #FFF; border: 1px solid #E0E0E0; border-radius: 4px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; font-size: 14px;", "Filters" }
                button {
                    style: "border: none; background: transparent; color: #0D47A1; cursor: pointer; font-size: 12px;",
                    disabled: filters.is_default() && (state.search)().is_empty(),
                    onclick: move |_| state.reset_filters(),
                    "Reset"
                }
            }

            div {
                style: SECTION_STYLE,
                p { style: SECTION_TITLE_STYLE, "Show on Map" }
                for scope in ShowOnMap::ALL {
                    button {
                        style: chip_style(filters.show_on_map == scope, false),
                        onclick: move |_| state.filters.write().show_on_map = scope,
                        "{scope.label()}"
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                p { style: SECTION_TITLE_STYLE, "Water Quality" }
                for tier in SafetyStatus::SELECTABLE {
                    button {
                        style: chip_style(filters.water_quality == Some(tier), false),
                        onclick: move |_| state.filters.write().toggle_water_quality(tier),
                        "{tier.display_name()}"
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                p { style: SECTION_TITLE_STYLE, "Distance" }
                for bucket in DistanceBucket::ALL {
                    button {
                        style: chip_style(filters.distance == Some(bucket), !has_position),
                        disabled: !has_position,
                        title: if has_position { "" } else { "Allow location access to filter by distance" },
                        onclick: move |_| state.filters.write().toggle_distance(bucket),
                        "{bucket.label()}"
                    }
                }
            }

            div {
                style: SECTION_STYLE,
                p { style: SECTION_TITLE_STYLE, "Amenities" }
                for amenity in Amenity::ALL {
                    label {
                        style: "display: block; font-size: 12px; margin-bottom: 4px; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: filters.shows_amenity(amenity),
                            onchange: move |_| state.filters.write().toggle_amenity(amenity),
                        }
                        " {amenity.label()}"
                    }
                }
            }
        }
    }
}

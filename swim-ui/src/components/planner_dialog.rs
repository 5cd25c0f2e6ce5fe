//! Visit planner dialog: email, date, time and place for a reminder.

use crate::components::info_panel::{action_button_style, ACTION_ROW_STYLE};
use crate::components::ErrorDisplay;
use crate::state::{AppState, Pipeline};
use dioxus::prelude::*;
use swim_core::location::LocationKind;
use swim_core::planner::PlannerForm;

const FIELD_STYLE: &str = "display: block; margin-bottom: 10px; font-size: 12px; color: #37474F;";
const INPUT_STYLE: &str = "display: block; width: 100%; box-sizing: border-box; margin-top: 4px; padding: 6px 8px; border: 1px solid #CFD8DC; border-radius: 4px;";

/// Modal shown while `AppState::planner` holds a form. Clicking the
/// backdrop closes it.
#[component]
pub fn PlannerDialog() -> Element {
    let mut state = use_context::<AppState>();
    let pipeline = use_context::<Pipeline>();
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut confirmation = use_signal(|| None::<String>);

    let Some(form) = (state.planner)() else {
        return rsx! {};
    };

    let places: Vec<(String, String)> = pipeline
        .all
        .read()
        .iter()
        .filter(|location| location.kind == form.place_type)
        .map(|location| (location.id.clone(), location.name.clone()))
        .collect();
    let selected_place = form.place_id.clone().unwrap_or_default();
    let can_submit = form.is_valid() && !submitting();

    let mut update = move |edit: &dyn Fn(&mut PlannerForm)| {
        if let Some(form) = state.planner.write().as_mut() {
            edit(form);
        }
        error.set(None);
    };

    let on_submit = move |_: Event<MouseData>| {
        let Some(form) = (state.planner)() else {
            return;
        };
        let visit = match form.validate() {
            Ok(visit) => visit,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(services) = (state.services)() else {
            return;
        };
        submitting.set(true);
        spawn(async move {
            match services.api.schedule_visit(&visit).await {
                Ok(user) => {
                    log::info!("Reminder registered for user {}", user.id);
                    confirmation.set(Some(format!(
                        "Reminder set for {} at {}.",
                        visit.date.format("%-d %b %Y"),
                        visit.time.format("%H:%M")
                    )));
                }
                Err(e) => {
                    log::error!("Failed to register reminder: {}", e);
                    error.set(Some(format!("Could not save your reminder: {}", e)));
                }
            }
            submitting.set(false);
        });
    };

    let mut close = move || {
        state.planner.set(None);
        confirmation.set(None);
        error.set(None);
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 2000; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.4);",
            onclick: move |_| close(),

            div {
                style: "width: 360px; padding: 20px; background: #FFF; border-radius: 8px; box-shadow: 0 4px 16px rgba(0,0,0,0.3);",
                onclick: move |evt| evt.stop_propagation(),

                h3 { style: "margin: 0 0 12px 0;", "Plan a visit" }

                if let Some(message) = confirmation() {
                    p { style: "font-size: 13px; color: #2E7D32;", "{message}" }
                    div {
                        style: ACTION_ROW_STYLE,
                        button {
                            style: action_button_style(true),
                            onclick: move |_| close(),
                            "Close"
                        }
                    }
                } else {
                    label {
                        style: FIELD_STYLE,
                        "Email"
                        input {
                            r#type: "email",
                            style: INPUT_STYLE,
                            value: "{form.email}",
                            oninput: move |evt: Event<FormData>| update(&|f| f.email = evt.value()),
                        }
                    }
                    label {
                        style: FIELD_STYLE,
                        "Date"
                        input {
                            r#type: "date",
                            style: INPUT_STYLE,
                            value: "{form.date}",
                            oninput: move |evt: Event<FormData>| update(&|f| f.date = evt.value()),
                        }
                    }
                    label {
                        style: FIELD_STYLE,
                        "Time"
                        input {
                            r#type: "time",
                            style: INPUT_STYLE,
                            value: "{form.time}",
                            oninput: move |evt: Event<FormData>| update(&|f| f.time = evt.value()),
                        }
                    }
                    label {
                        style: FIELD_STYLE,
                        "Place Type"
                        select {
                            style: INPUT_STYLE,
                            onchange: move |evt: Event<FormData>| {
                                if let Ok(kind) = evt.value().parse::<LocationKind>() {
                                    update(&|f| f.set_place_type(kind));
                                }
                            },
                            for kind in [LocationKind::Beach, LocationKind::River] {
                                option {
                                    value: kind.as_str(),
                                    selected: form.place_type == kind,
                                    "{kind.display_name()}"
                                }
                            }
                        }
                    }
                    label {
                        style: FIELD_STYLE,
                        "Location"
                        select {
                            style: INPUT_STYLE,
                            onchange: move |evt: Event<FormData>| {
                                let id = evt.value();
                                update(&|f| f.place_id = Some(id.clone()).filter(|id| !id.is_empty()));
                            },
                            option {
                                value: "",
                                disabled: true,
                                selected: selected_place.is_empty(),
                                "-- Choose a location --"
                            }
                            for (id, name) in places {
                                option {
                                    selected: id == selected_place,
                                    value: "{id}",
                                    "{name}"
                                }
                            }
                        }
                    }

                    if let Some(message) = error() {
                        ErrorDisplay {
                            message,
                            on_dismiss: move |_| error.set(None),
                        }
                    }

                    div {
                        style: ACTION_ROW_STYLE,
                        button {
                            style: action_button_style(false),
                            onclick: move |_| close(),
                            "Cancel"
                        }
                        button {
                            style: action_button_style(true),
                            disabled: !can_submit,
                            onclick: on_submit,
                            if submitting() { "Saving..." } else { "Submit" }
                        }
                    }
                }
            }
        }
    }
}

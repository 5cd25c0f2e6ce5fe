//! Toilet detail: facilities, average rating, latest comments and the rating form.

use crate::browser;
use crate::components::info_panel::{action_button_style, ACTION_ROW_STYLE};
use crate::components::{ErrorDisplay, InfoPanel, LoadingSpinner};
use crate::state::AppState;
use dioxus::prelude::*;
use swim_core::amenity::{RatingForm, Toilet, ToiletDetail, MAX_RATING};
use swim_core::marker::Selection;

#[derive(Props, Clone, PartialEq)]
pub struct ToiletInfoProps {
    pub toilet: Toilet,
}

/// Toilet panel. Key it by toilet id so switching toilets reloads the detail.
#[component]
pub fn ToiletInfo(props: ToiletInfoProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut rating_open = use_signal(|| false);
    let toilet_id = props.toilet.id.clone();

    let mut detail = use_resource(move || {
        let id = toilet_id.clone();
        async move {
            let services = (state.services)()?;
            services.api.toilet_detail(&id).await
        }
    });

    let fallback = props.toilet.clone();
    let toilet = props.toilet.clone();
    let loaded = detail();

    rsx! {
        InfoPanel {
            title: props.toilet.display_name().to_string(),
            subtitle: "Public toilet".to_string(),
            on_close: move |_| state.selection.set(None),

            {match loaded {
                None => rsx! { LoadingSpinner { label: "Loading toilet details...".to_string() } },
                Some(None) => rsx! {
                    Facilities { toilet: fallback.clone() }
                    p { style: "font-size: 12px; color: #90A4AE;", "Ratings are unavailable right now." }
                },
                Some(Some(detail)) => rsx! {
                    Facilities { toilet: detail.toilet.clone() }
                    Reviews { detail }
                },
            }}

            if rating_open() {
                RatingFormView {
                    toilet_id: props.toilet.id.clone(),
                    on_cancel: move |_| rating_open.set(false),
                    on_submitted: move |_| {
                        rating_open.set(false);
                        detail.restart();
                    },
                }
            } else {
                div {
                    style: ACTION_ROW_STYLE,
                    button {
                        style: action_button_style(false),
                        onclick: move |_| rating_open.set(true),
                        "Rate"
                    }
                    button {
                        style: action_button_style(true),
                        onclick: move |_| browser::open_directions(&Selection::Toilet(toilet.clone())),
                        "Directions"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FacilitiesProps {
    toilet: Toilet,
}

#[component]
fn Facilities(props: FacilitiesProps) -> Element {
    let hours = props
        .toilet
        .opening_hours
        .clone()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| "Hours not listed".to_string());

    rsx! {
        p { style: "margin: 0 0 6px 0; font-size: 13px;", "{hours}" }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 4px;",
            for (label, available) in props.toilet.facilities() {
                if available {
                    span {
                        style: "padding: 2px 8px; border-radius: 10px; font-size: 11px; background: #E3F2FD; color: #0D47A1;",
                        "{label}: Available"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ReviewsProps {
    detail: ToiletDetail,
}

#[component]
fn Reviews(props: ReviewsProps) -> Element {
    let average = props.detail.average_label();

    rsx! {
        div {
            style: "margin-top: 10px; font-size: 13px;",
            strong { "Average rating: " }
            "{average}"
        }
        div {
            style: "margin-top: 8px;",
            if props.detail.comments.is_empty() {
                p { style: "font-size: 12px; color: #90A4AE;", "No comments yet" }
            }
            for (i, comment) in props.detail.comments.iter().enumerate() {
                div {
                    key: "{i}",
                    style: "padding: 6px 0; border-top: 1px solid #ECEFF1; font-size: 12px;",
                    if let Some(stars) = comment.rating {
                        span { style: "color: #F9A825;", "{stars_label(stars)} " }
                    }
                    "{comment.comment}"
                    if let Some(posted) = comment.posted_label() {
                        span { style: "margin-left: 6px; color: #90A4AE;", "{posted}" }
                    }
                }
            }
        }
    }
}

fn stars_label(stars: u8) -> String {
    let filled = stars.min(MAX_RATING) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
}

#[derive(Props, Clone, PartialEq)]
struct RatingFormViewProps {
    toilet_id: String,
    on_cancel: EventHandler<()>,
    on_submitted: EventHandler<()>,
}

#[component]
fn RatingFormView(props: RatingFormViewProps) -> Element {
    let state = use_context::<AppState>();
    let mut form = use_signal(RatingForm::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let current = form();
    let toilet_id = props.toilet_id.clone();
    let on_submitted = props.on_submitted;
    let on_cancel = props.on_cancel;

    let on_submit = move |_: Event<MouseData>| {
        let payload = match form.read().build(&toilet_id) {
            Ok(payload) => payload,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let Some(services) = (state.services)() else {
            return;
        };
        submitting.set(true);
        error.set(None);
        spawn(async move {
            let outcome = services.api.submit_toilet_rating(&payload).await;
            submitting.set(false);
            if outcome.success {
                log::info!("Rating submitted for toilet {}", payload.toilet_id);
                on_submitted.call(());
            } else {
                error.set(Some(
                    outcome.error.unwrap_or_else(|| "Could not submit your rating.".to_string()),
                ));
            }
        });
    };

    rsx! {
        div {
            style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #ECEFF1; font-size: 13px;",
            p { style: "margin: 0 0 4px 0;", "Was it clean?" }
            label {
                input {
                    r#type: "radio",
                    name: "is-clean",
                    checked: current.is_clean == Some(true),
                    onchange: move |_| form.write().is_clean = Some(true),
                }
                " Yes "
            }
            label {
                input {
                    r#type: "radio",
                    name: "is-clean",
                    checked: current.is_clean == Some(false),
                    onchange: move |_| form.write().is_clean = Some(false),
                }
                " No"
            }

            div {
                style: "margin: 8px 0; font-size: 20px;",
                for star in 1..=MAX_RATING {
                    span {
                        key: "{star}",
                        style: if current.rating.is_some_and(|r| r >= star) { "cursor: pointer; color: #F9A825;" } else { "cursor: pointer; color: #CFD8DC;" },
                        onclick: move |_| form.write().set_rating(star),
                        "★"
                    }
                }
            }

            textarea {
                placeholder: "share your experience",
                value: "{current.comment}",
                rows: "3",
                style: "width: 100%; box-sizing: border-box; padding: 6px; border: 1px solid #CFD8DC; border-radius: 4px;",
                oninput: move |evt: Event<FormData>| form.write().comment = evt.value(),
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
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    style: action_button_style(true),
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Submitting..." } else { "Submit" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_label() {
        assert_eq!(stars_label(3), "★★★☆☆");
        assert_eq!(stars_label(9), "★★★★★");
    }
}

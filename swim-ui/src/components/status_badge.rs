//! Water quality badge.

use dioxus::prelude::*;
use swim_core::location::SafetyStatus;

#[derive(Props, Clone, PartialEq)]
pub struct StatusBadgeProps {
    pub status: SafetyStatus,
    /// Published label, e.g. "Surveillance"; falls back to the tier name
    #[props(default = String::new())]
    pub label: String,
}

/// Coloured pill showing a location's safety tier.
#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let text = if props.label.is_empty() {
        props.status.display_name().to_string()
    } else {
        props.label.clone()
    };
    let style = format!(
        "display: inline-block; padding: 2px 8px; border-radius: 10px; font-size: 11px; font-weight: bold; color: #FFF; background: {};",
        props.status.color()
    );

    rsx! {
        span {
            style: "{style}",
            title: "{props.status.display_name()}",
            "{text}"
        }
    }
}

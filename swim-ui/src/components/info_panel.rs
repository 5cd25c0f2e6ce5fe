//! Floating panel shared by the location, toilet and fountain details.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InfoPanelProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    pub on_close: EventHandler<()>,
    pub children: Element,
}

#[component]
pub fn InfoPanel(props: InfoPanelProps) -> Element {
    rsx! {
        div {
            style: "position: absolute; top: 16px; right: 16px; z-index: 1000; width: 340px; max-height: calc(100% - 32px); overflow-y: auto; padding: 16px; background: #FFF; border-radius: 8px; box-shadow: 0 2px 12px rgba(0,0,0,0.25);",
            div {
                style: "display: flex; align-items: flex-start; gap: 8px; margin-bottom: 8px;",
                div {
                    style: "flex: 1;",
                    h3 { style: "margin: 0; font-size: 16px;", "{props.title}" }
                    if !props.subtitle.is_empty() {
                        p { style: "margin: 2px 0 0 0; font-size: 12px; color: #78909C;", "{props.subtitle}" }
                    }
                }
                button {
                    style: "border: none; background: transparent; cursor: pointer; font-size: 18px; color: #78909C;",
                    title: "Close",
                    onclick: move |_| props.on_close.call(()),
                    "×"
                }
            }
            {props.children}
        }
    }
}

pub(crate) const ACTION_ROW_STYLE: &str = "display: flex; gap: 8px; margin-top: 12px;";

pub(crate) fn action_button_style(primary: bool) -> &'static str {
    if primary {
        "flex: 1; padding: 6px 0; border: none; border-radius: 4px; background: #0D47A1; color: #FFF; cursor: pointer;"
    } else {
        "flex: 1; padding: 6px 0; border: 1px solid #CFD8DC; border-radius: 4px; background: #FFF; color: #37474F; cursor: pointer;"
    }
}

//! Page header with title and short description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Page title
    pub title: String,
    /// Optional one-line description under the title
    #[props(default = String::new())]
    pub description: String,
}

/// Header for the dashboard showing title and optional description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px; padding: 16px; background: #E9ECEF; border-radius: 4px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #666;",
                    "{props.description}"
                }
            }
        }
    }
}

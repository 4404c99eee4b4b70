use leptos::*;

use crate::status::Severity;

/// Small colored pill with the severity label.
#[component]
pub fn StatusBadge(severity: Severity, #[prop(optional)] small: bool) -> impl IntoView {
    let style = severity.style();
    let class = if small {
        format!("{} badge-sm", style.badge_class)
    } else {
        style.badge_class.to_string()
    };

    view! { <span class=class>{style.label}</span> }
}

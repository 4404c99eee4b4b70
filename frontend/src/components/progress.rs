use leptos::*;

/// Color of the filled part of a [`ProgressBar`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressVariant {
    Default,
    #[default]
    Primary,
    Danger,
    Success,
}

impl ProgressVariant {
    fn fill_class(self) -> &'static str {
        match self {
            ProgressVariant::Default => "progress-fill fill-default",
            ProgressVariant::Primary => "progress-fill fill-primary",
            ProgressVariant::Danger => "progress-fill fill-danger",
            ProgressVariant::Success => "progress-fill fill-success",
        }
    }
}

/// Clamp a displayed percentage into `[0, 100]`.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[component]
pub fn ProgressBar(
    #[prop(into)] progress: Signal<f64>,
    #[prop(optional)] variant: ProgressVariant,
    #[prop(optional)] show_label: bool,
) -> impl IntoView {
    let clamped = move || clamp_percent(progress.get());

    view! {
        <div class="progress">
            <Show when=move || show_label>
                <div class="progress-label">
                    <span class="muted">"Progress"</span>
                    <span class="strong">{move || format!("{}%", clamped().round())}</span>
                </div>
            </Show>
            <div class="progress-bar">
                <div
                    class=variant.fill_class()
                    style=move || format!("width: {}%;", clamped())
                ></div>
            </div>
        </div>
    }
}

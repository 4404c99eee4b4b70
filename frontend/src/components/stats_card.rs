use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Primary,
    Danger,
    Success,
}

impl CardVariant {
    fn class(self) -> &'static str {
        match self {
            CardVariant::Default => "stats-card",
            CardVariant::Primary => "stats-card card-primary",
            CardVariant::Danger => "stats-card card-danger",
            CardVariant::Success => "stats-card card-success",
        }
    }
}

/// Percent change shown in the card corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    pub value: f64,
    pub is_positive: bool,
}

#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    icon: &'static str,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] trend: Option<Trend>,
    #[prop(optional)] variant: CardVariant,
) -> impl IntoView {
    view! {
        <div class=variant.class()>
            <div class="stats-card-top">
                <div class="stats-card-icon">{icon}</div>
                {trend.map(|t| {
                    let class = if t.is_positive { "trend trend-up" } else { "trend trend-down" };
                    let arrow = if t.is_positive { "↑" } else { "↓" };
                    view! { <div class=class>{arrow} " " {format!("{}%", t.value.abs())}</div> }
                })}
            </div>
            <p class="stats-card-title">{title}</p>
            <p class="stats-card-value">{value}</p>
            {subtitle.map(|s| view! { <p class="stats-card-subtitle">{s}</p> })}
        </div>
    }
}

/// Placeholder shown while stats are loading.
#[component]
pub fn StatsCardSkeleton() -> impl IntoView {
    view! {
        <div class="stats-card skeleton">
            <div class="skeleton-block icon"></div>
            <div class="skeleton-line half"></div>
            <div class="skeleton-line wide"></div>
        </div>
    }
}

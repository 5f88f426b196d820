use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour accent of a [`StatCard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Good,
    Warning,
    Bad,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Good => "stat-card stat-card--success",
            StatTone::Bad => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Neutral => "stat-card",
        }
    }
}

/// Tone for an occupancy percentage.
pub fn occupancy_tone(rate: f64) -> StatTone {
    if rate >= 85.0 {
        StatTone::Good
    } else if rate >= 50.0 {
        StatTone::Neutral
    } else {
        StatTone::Warning
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Already formatted value; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional)]
    tone: StatTone,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let shown = move || value.get().unwrap_or_else(|| "-".to_string());

    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{shown}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_tone() {
        assert_eq!(occupancy_tone(92.0), StatTone::Good);
        assert_eq!(occupancy_tone(60.0), StatTone::Neutral);
        assert_eq!(occupancy_tone(10.0), StatTone::Warning);
    }
}

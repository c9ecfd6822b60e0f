use crate::shared::icons::icon;
use leptos::prelude::*;

/// Thousands separated with a dot, as in pt-BR.
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}

/// Dashboard counter card.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// `None` while loading
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// "warning" / "error" highlight the card when the value is not zero
    #[prop(optional)]
    alert: Option<&'static str>,
    /// Tab opened when the card is clicked
    #[prop(optional_no_strip)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let card_class = move || {
        let highlight = matches!(value.get(), Some(v) if v > 0);
        match (alert, highlight) {
            (Some("error"), true) => "stat-card stat-card--error",
            (Some("warning"), true) => "stat-card stat-card--warning",
            _ => "stat-card",
        }
    };

    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "—".to_string(),
    };

    view! {
        <div
            class=card_class
            class:stat-card--clickable=on_click.is_some()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }
}

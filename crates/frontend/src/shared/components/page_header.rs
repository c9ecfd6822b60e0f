use leptos::prelude::*;

/// Header of a tab page: title, optional subtitle and the action buttons.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Action buttons (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-text">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__actions">
                {children()}
            </div>
        </div>
    }
}

/// Inline error banner.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
    }
}

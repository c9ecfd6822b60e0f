use super::tabs::TabBar;
use leptos::prelude::*;

/// Tab strip plus the pages of the open tabs.
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <TabBar />
            {children()}
        </div>
    }
}

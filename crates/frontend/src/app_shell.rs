//! Root components: `AppShell` (login gate) and `MainLayout` (sidebar +
//! tabs).

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Signed-in layout. Syncs the active tab with `?active=` on creation.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

/// `LoginPage` until a session user exists, then `MainLayout`.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

use crate::layout::global_context::{AppGlobalContext, Tab as TabData, HOME_TAB};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key_for_active = tab.key.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.with(|a| a.as_deref() == Some(key_for_active.as_str())));

    let key_for_click = tab.key.clone();
    let on_click = move |_| tabs_store.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    // The dashboard tab stays open
    let closable = tab.key != HOME_TAB;

    view! {
        <div class="tab" class:active=is_active on:click=on_click title=tab.title.clone()>
            <span>{tab.title.clone()}</span>
            {closable.then(|| view! {
                <button class="tab-close" on:click=on_close>"×"</button>
            })}
        </div>
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| view! { <Tab tab=tab /> }
            />
        </div>
    }
}

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_style: Option<String>,
    modal_class: Option<String>,
}

/// Returned by `ModalStackService::push*`; closes the modal it belongs to.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open modals. Escape closes only the topmost one (see `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    // Removing a modal synchronously inside the DOM event that triggered it
    // drops the handler mid-dispatch; wait one tick.
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_frame(None, None, builder)
    }

    /// Push a modal with style/class overrides for the modal surface.
    pub fn push_with_frame<F>(
        &self,
        modal_style: Option<String>,
        modal_class: Option<String>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder: Arc::new(builder),
                modal_style,
                modal_class,
            });
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

/// Renders the modal stack. Mounted once at the application root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let Some(svc) = use_context::<ModalStackService>() else {
        log::error!("ModalStackService not provided; modals are disabled");
        return ().into_any();
    };

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // Lives as long as the app.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let content = (entry.builder)(ModalHandle { id, svc });

                    view! {
                        <ModalFrame
                            z_index=1000 + idx as i32
                            on_close=on_close
                            modal_style=entry.modal_style.clone().unwrap_or_default()
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
    .into_any()
}

//! Sidebar menu. Items open (or activate) a tab; entries the user cannot
//! read are hidden.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: &'static str,
    icon: &'static str,
    /// Resource whose read permission shows the item; `None` = always shown
    resource: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

const fn item(key: &'static str, icon: &'static str, resource: &'static str) -> MenuItem {
    MenuItem {
        key,
        icon,
        resource: Some(resource),
    }
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "overview",
            label: "Visão geral",
            icon: "dashboard",
            items: vec![MenuItem {
                key: "d400_summary",
                icon: "dashboard",
                resource: None,
            }],
        },
        MenuGroup {
            id: "properties",
            label: "Empreendimentos",
            icon: "building",
            items: vec![
                item("a004_development", "building", "empreendimentos"),
                item("a005_unit", "home", "unidades"),
                item("a009_building_system", "layers", "sistemas"),
                item("a010_document", "file-text", "documentos"),
            ],
        },
        MenuGroup {
            id: "catalog",
            label: "Cadastros",
            icon: "package",
            items: vec![
                item("a001_product", "package", "produtos"),
                item("a002_supplier", "truck", "fornecedores"),
                item("a003_contact", "contact", "contatos"),
            ],
        },
        MenuGroup {
            id: "warranties",
            label: "Garantias",
            icon: "shield",
            items: vec![
                item("a006_warranty", "shield", "garantias"),
                item("a007_warranty_lot", "layers", "garantias-lote"),
                item("a007_warranty_catalog", "shield", "garantias"),
            ],
        },
        MenuGroup {
            id: "maintenance",
            label: "Manutenção",
            icon: "wrench",
            items: vec![
                item("a008_preventive", "wrench", "preventivos"),
                item("a008_preventive_calendar", "calendar", "preventivos"),
            ],
        },
        MenuGroup {
            id: "communication",
            label: "Comunicação",
            icon: "megaphone",
            items: vec![
                item("a012_bulletin", "megaphone", "informativos"),
                item("a011_faq", "help-circle", "faqs"),
            ],
        },
        MenuGroup {
            id: "settings",
            label: "Configurações",
            icon: "settings",
            items: vec![item("sys_users", "users", "usuarios")],
        },
    ]
}

/// Groups with the items `can_read` allows; empty groups are dropped.
fn visible_groups(groups: Vec<MenuGroup>, can_read: impl Fn(&str) -> bool) -> Vec<MenuGroup> {
    groups
        .into_iter()
        .filter_map(|mut group| {
            group
                .items
                .retain(|i| i.resource.map_or(true, |r| can_read(r)));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let expanded_groups = RwSignal::new(vec![
        "overview".to_string(),
        "properties".to_string(),
        "maintenance".to_string(),
    ]);

    let groups = Memo::new(move |_| {
        auth_state.with(|s| visible_groups(get_menu_groups(), |r| s.can_read(r)))
    });

    let render_item = move |menu_item: MenuItem| {
        let key = menu_item.key;
        let label = tab_label(key);
        view! {
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || ctx.active.with(|a| a.as_deref() == Some(key))
                style:padding-left="10px"
                on:click=move |_| ctx.open_tab(key, label)
            >
                <div class="app-sidebar__item-content">
                    {icon(menu_item.icon)}
                    <span>{label}</span>
                </div>
            </div>
        }
    };

    view! {
        <div class="app-sidebar__content">
            {move || groups.get().into_iter().map(|group| {
                let gid = group.id.to_string();
                let gid_for_click = gid.clone();
                let gid_for_chevron = gid.clone();
                let items = StoredValue::new(group.items);

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_for_click.clone();
                                expanded_groups.update(move |open| {
                                    if let Some(pos) = open.iter().position(|x| x == &gid) {
                                        open.remove(pos);
                                    } else {
                                        open.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.with(|g| g.contains(&gid_for_chevron))
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.with(|g| g.contains(&gid))>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(render_item).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(groups: &[MenuGroup]) -> Vec<&'static str> {
        groups.iter().flat_map(|g| g.items.iter().map(|i| i.key)).collect()
    }

    #[test]
    fn test_every_item_has_a_title() {
        for key in keys(&get_menu_groups()) {
            assert_ne!(tab_label(key), "Página", "{key}");
        }
    }

    #[test]
    fn test_hides_unreadable_items_and_empty_groups() {
        let groups = visible_groups(get_menu_groups(), |r| r == "preventivos");
        assert_eq!(
            keys(&groups),
            ["d400_summary", "a008_preventive", "a008_preventive_calendar"]
        );
        assert!(groups.iter().all(|g| g.id != "settings"));
    }
}

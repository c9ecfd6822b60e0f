//! Tab key → page. Every navigable page is listed here.

use crate::dashboards::SummaryDashboard;
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_contact::ui::list::ContactList;
use crate::domain::a004_development::ui::list::DevelopmentList;
use crate::domain::a005_unit::ui::list::UnitList;
use crate::domain::a006_warranty::ui::list::WarrantyList;
use crate::domain::a007_warranty_lot::ui::catalog::WarrantyCatalogPage;
use crate::domain::a007_warranty_lot::ui::list::WarrantyLotList;
use crate::domain::a008_preventive::ui::calendar::PreventiveCalendarPage;
use crate::domain::a008_preventive::ui::list::PreventiveList;
use crate::domain::a009_building_system::ui::list::BuildingSystemList;
use crate::domain::a010_document::ui::list::DocumentList;
use crate::domain::a011_faq::ui::list::FaqList;
use crate::domain::a012_bulletin::ui::list::BulletinList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::guard::RequirePermission;
use crate::system::users::ui::list::UsersListPage;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::a003_contact::aggregate::Contact;
use contracts::domain::a004_development::aggregate::Development;
use contracts::domain::a005_unit::aggregate::Unit;
use contracts::domain::a006_warranty::aggregate::Warranty;
use contracts::domain::a007_warranty_lot::aggregate::WarrantyLot;
use contracts::domain::a008_preventive::aggregate::Preventive;
use contracts::domain::a009_building_system::aggregate::BuildingSystem;
use contracts::domain::a010_document::aggregate::Document;
use contracts::domain::a011_faq::aggregate::Faq;
use contracts::domain::a012_bulletin::aggregate::Bulletin;
use contracts::domain::common::Resource;
use contracts::system::auth::read_permission;
use leptos::prelude::*;

/// Page behind `R`'s read permission.
fn guarded<R: Resource>(page: fn() -> AnyView) -> AnyView {
    view! {
        <RequirePermission permission=read_permission(R::collection_name())>
            {page()}
        </RequirePermission>
    }
    .into_any()
}

/// Page for a tab key. `tabs_store` lets pages close their own tab.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "d400_summary" => view! { <SummaryDashboard /> }.into_any(),

        "a001_product" => guarded::<Product>(|| view! { <ProductList /> }.into_any()),
        "a002_supplier" => guarded::<Supplier>(|| view! { <SupplierList /> }.into_any()),
        "a003_contact" => guarded::<Contact>(|| view! { <ContactList /> }.into_any()),
        "a004_development" => guarded::<Development>(|| view! { <DevelopmentList /> }.into_any()),
        "a005_unit" => guarded::<Unit>(|| view! { <UnitList /> }.into_any()),
        "a006_warranty" => guarded::<Warranty>(|| view! { <WarrantyList /> }.into_any()),
        "a007_warranty_lot" => guarded::<WarrantyLot>(|| view! { <WarrantyLotList /> }.into_any()),
        // Demo catalog shares the warranty read permission
        "a007_warranty_catalog" => {
            guarded::<Warranty>(|| view! { <WarrantyCatalogPage /> }.into_any())
        }
        "a008_preventive" => guarded::<Preventive>(|| view! { <PreventiveList /> }.into_any()),
        "a008_preventive_calendar" => {
            guarded::<Preventive>(|| view! { <PreventiveCalendarPage /> }.into_any())
        }
        "a009_building_system" => {
            guarded::<BuildingSystem>(|| view! { <BuildingSystemList /> }.into_any())
        }
        "a010_document" => guarded::<Document>(|| view! { <DocumentList /> }.into_any()),
        "a011_faq" => guarded::<Faq>(|| view! { <FaqList /> }.into_any()),
        "a012_bulletin" => guarded::<Bulletin>(|| view! { <BulletinList /> }.into_any()),

        "sys_users" => view! { <UsersListPage /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            let key_for_close = key.to_string();
            view! {
                <div class="placeholder">
                    <p>{format!("Página \"{}\" não encontrada.", key)}</p>
                    <button
                        class="button button--secondary"
                        on:click=move |_| tabs_store.close_tab(&key_for_close)
                    >
                        "Fechar"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}

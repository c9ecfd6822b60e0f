//! Building blocks shared by the CRUD pages: a generic list with search,
//! sorting, selection and delete, and a details view model with load/save.

pub mod details;
pub mod list;
pub mod view_model;

pub use details::DetailsForm;
pub use list::{Cell, Column, CrudList, DetailsBuilder};
pub use view_model::{cancel_callback, non_empty, opt_to_string, parse_opt, DetailsViewModel};

//! Data-transfer shapes and pure client-side logic shared by the CCA admin frontend.
//!
//! Nothing in this crate touches the browser, so everything here is covered by
//! native unit tests.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

pub mod aggregate;
pub mod calendar_demo;
pub mod schedule;

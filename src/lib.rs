//! Investor profile — a four-page questionnaire that builds an investor
//! profile and keeps it in a local settings store.

pub mod app;
pub mod config;
pub mod error;
pub mod profile;
pub mod questionnaire;
pub mod shell;
pub mod store;

//! tomstore-web - Tom-Store web client using Leptos (CSR)

pub mod app;
pub mod components;
pub mod pages;
pub mod store;
pub mod viewport;

pub use app::App;

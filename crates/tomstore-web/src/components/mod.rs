//! Leptos UI components

mod header;
mod nav_drawer;
mod nav_links;

pub use header::Header;
pub use nav_drawer::NavDrawer;
pub use nav_links::NavLinks;

//! tomstore-core - Presentation/state logic for the Tom-Store client
//!
//! Provides the navigation link configuration, the responsive layout
//! selector, the drawer state machine, and the basket snapshot model used
//! by the web frontend. None of this depends on a UI framework, so all of
//! it is unit-testable on the host target.

pub mod basket;
pub mod drawer;
pub mod layout;
pub mod links;

pub use basket::{cart_item_count, BasketSnapshot, CartLineItem};
pub use drawer::DrawerState;
pub use layout::{LayoutFlags, ViewportClass, COMPACT_BREAKPOINT_PX};
pub use links::{validate_links, LinkConfigError, NavLink, MID_LINKS, RIGHT_LINKS};

//! Shared basket state, injected via context
//!
//! The basket is owned by the host application and updated outside the
//! header (e.g. after a network-driven refresh elsewhere in the app). The
//! header only ever reads through [`BasketContext::snapshot`]; writers go
//! through the setter methods on the same context, so every reader
//! re-renders reactively on change.

use leptos::prelude::*;
use tomstore_core::BasketSnapshot;

/// Reactive accessor for the shared basket snapshot. `None` means "not
/// yet loaded", which is a valid state, not an error.
#[derive(Clone, Copy)]
pub struct BasketContext {
    basket: RwSignal<Option<BasketSnapshot>>,
}

impl BasketContext {
    pub fn new() -> Self {
        Self {
            basket: RwSignal::new(None),
        }
    }

    /// Current snapshot, tracked reactively.
    pub fn snapshot(&self) -> Option<BasketSnapshot> {
        self.basket.get()
    }

    /// Replace the snapshot (host side: after a basket refresh).
    pub fn set(&self, snapshot: BasketSnapshot) {
        self.basket.set(Some(snapshot));
    }

    /// Forget the snapshot (host side: logout, basket expiry).
    pub fn clear(&self) {
        self.basket.set(None);
    }
}

impl Default for BasketContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Basket provider component (wraps app root)
#[component]
pub fn BasketProvider(children: Children) -> impl IntoView {
    provide_context(BasketContext::new());
    children()
}

/// Hook to access the basket context
pub fn use_basket() -> BasketContext {
    expect_context::<BasketContext>()
}

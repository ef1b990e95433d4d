//! Responsive navigation header
//!
//! Composes the layout selector, the drawer state machine, and the cart
//! badge derived from the shared basket snapshot. The theme flag is host
//! owned: the switch only invokes the supplied callback.

use leptos::prelude::*;
use leptos_router::components::A;
use tomstore_core::{cart_item_count, DrawerState, MID_LINKS, RIGHT_LINKS};

use super::{NavDrawer, NavLinks};
use crate::store::use_basket;
use crate::viewport::use_viewport_class;

/// Badge text for the cart icon. Absent basket suppresses the badge;
/// an explicit zero still renders.
fn badge_label(count: Option<u32>) -> Option<String> {
    count.map(|n| n.to_string())
}

/// Header with brand link, theme switch, responsive navigation, and cart
#[component]
pub fn Header(
    /// Current theme flag, owned by the host
    dark_mode: ReadSignal<bool>,
    /// Invoked once per switch activation; the host decides the new value
    request_theme_change: Callback<()>,
) -> impl IntoView {
    let viewport = use_viewport_class();
    let flags = Memo::new(move |_| viewport.get().flags());

    // Drawer state is owned here, not by the host
    let drawer = RwSignal::new(DrawerState::default());
    let basket = use_basket();

    // Recomputed from the live snapshot on every render, never cached
    let badge = move || badge_label(cart_item_count(basket.snapshot().as_ref()));

    view! {
        <header class="header">
            <div class="header-left">
                <Show when=move || flags.get().show_drawer_trigger>
                    <button
                        class="menu-trigger"
                        on:click=move |_| drawer.update(|d| d.open())
                        aria-label="Open navigation menu"
                        aria-expanded=move || drawer.get().is_open().to_string()
                    >
                        <span class="menu-trigger-icon">"☰"</span>
                    </button>
                </Show>

                <A href="/" attr:class="brand">"TOM-STORE"</A>

                <label class="theme-switch">
                    <input
                        type="checkbox"
                        prop:checked=move || dark_mode.get()
                        on:change=move |_| request_theme_change.run(())
                        aria-label="Toggle dark mode"
                    />
                    <span class="theme-switch-icon">
                        {move || if dark_mode.get() { "🌙" } else { "☀️" }}
                    </span>
                </label>
            </div>

            <Show when=move || flags.get().show_inline_menu>
                <NavLinks links=MID_LINKS list_class="nav-list nav-list-mid" />
            </Show>

            <div class="header-right">
                <A href="/basket" attr:class="cart-button" attr:aria-label="Open basket">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    >
                        <circle cx="8" cy="21" r="1"/>
                        <circle cx="19" cy="21" r="1"/>
                        <path d="M2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12"/>
                    </svg>
                    {move || badge().map(|label| view! { <span class="cart-badge">{label}</span> })}
                </A>

                <Show when=move || flags.get().show_inline_menu>
                    <NavLinks links=RIGHT_LINKS list_class="nav-list nav-list-right" />
                </Show>
            </div>

            <Show when=move || flags.get().show_drawer_trigger>
                <NavDrawer drawer />
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label_renders_counts() {
        assert_eq!(badge_label(Some(5)), Some("5".to_string()));
        assert_eq!(badge_label(Some(0)), Some("0".to_string()));
    }

    #[test]
    fn test_badge_label_suppressed_when_absent() {
        assert_eq!(badge_label(None), None);
    }
}

//! Off-canvas navigation drawer for the compact layout

use leptos::ev;
use leptos::prelude::*;
use tomstore_core::{DrawerState, MID_LINKS, RIGHT_LINKS};

use super::NavLinks;

/// Drawer panel listing both link groups, dismissed by scrim click,
/// Escape, or activating any contained link
#[component]
pub fn NavDrawer(drawer: RwSignal<DrawerState>) -> impl IntoView {
    // Closing on link activation is a side effect; the router still
    // performs the navigation itself.
    let link_activated = Callback::new(move |()| drawer.update(|d| d.link_activated()));

    let escape_handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            drawer.update(|d| d.close());
        }
    });
    on_cleanup(move || escape_handle.remove());

    view! {
        <>
            // Scrim behind the panel; clicking it dismisses
            <Show when=move || drawer.get().is_open()>
                <div class="drawer-backdrop" on:click=move |_| drawer.update(|d| d.close())></div>
            </Show>

            <aside class="drawer" class:drawer-open=move || drawer.get().is_open()>
                <button
                    class="drawer-close"
                    on:click=move |_| drawer.update(|d| d.close())
                    aria-label="Close navigation menu"
                >
                    "✕"
                </button>

                <nav class="drawer-nav">
                    <NavLinks
                        links=MID_LINKS
                        list_class="drawer-list"
                        on_activate=link_activated
                    />
                    <NavLinks
                        links=RIGHT_LINKS
                        list_class="drawer-list"
                        on_activate=link_activated
                    />
                </nav>
            </aside>
        </>
    }
}

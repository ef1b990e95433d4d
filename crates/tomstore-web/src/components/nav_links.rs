//! Config-driven navigation link renderer
//!
//! Maps a static [`NavLink`] slice to an ordered list of router links,
//! used both for the inline desktop menus and inside the drawer. Active
//! matching is by path against the router location; the upper-cased title
//! is display-only.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use tomstore_core::NavLink;

/// Ordered list of navigation links with active-route highlight
#[component]
pub fn NavLinks(
    /// Static link configuration, rendered in slice order
    links: &'static [NavLink],
    /// Class for the enclosing list element
    list_class: &'static str,
    /// Invoked after a link is activated (the drawer closes itself here);
    /// navigation still happens normally through the router
    #[prop(optional, into)]
    on_activate: Option<Callback<()>>,
) -> impl IntoView {
    // `Memo` is Copy, so every link's closure can capture it
    let pathname = use_location().pathname;

    view! {
        <ul class=list_class>
            {links
                .iter()
                .map(|link| {
                    let activated = move |_| {
                        if let Some(cb) = on_activate {
                            cb.run(());
                        }
                    };
                    let is_active = move || link.is_active(&pathname.get());
                    view! {
                        <li class="nav-item" class:nav-item-active=is_active>
                            <A href=link.path attr:class="nav-link" on:click=activated>
                                {link.display_title()}
                            </A>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use tomstore_core::validate_links;

use crate::components::Header;
use crate::pages::{About, BasketPage, Catalog, Contact, Home, Login, Register};
use crate::store::BasketProvider;

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // Configuration defect, not a runtime error: log once, keep rendering
    if let Err(e) = validate_links() {
        leptos::logging::error!("Navigation link configuration defect: {e}");
    }

    // Theme flag is owned here; the header only requests changes
    let (dark_mode, set_dark_mode) = signal(false);
    let request_theme_change = Callback::new(move |()| set_dark_mode.update(|v| *v = !*v));

    view! {
        <BasketProvider>
            <Router>
                <div class="app" class:theme-dark=move || dark_mode.get()>
                    <Header dark_mode request_theme_change />
                    <main class="content">
                        <Routes fallback=|| "Not found">
                            <Route path=path!("/") view=Home />
                            <Route path=path!("/catalog") view=Catalog />
                            <Route path=path!("/about") view=About />
                            <Route path=path!("/contact") view=Contact />
                            <Route path=path!("/login") view=Login />
                            <Route path=path!("/register") view=Register />
                            <Route path=path!("/basket") view=BasketPage />
                        </Routes>
                    </main>
                </div>
            </Router>
        </BasketProvider>
    }
}

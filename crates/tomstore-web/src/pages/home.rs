//! Home page component

use leptos::prelude::*;

/// Home page - storefront landing
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Welcome to Tom-Store"</h2>
            <div class="page-content">
                <p>"Browse the catalog to get started."</p>
            </div>
        </div>
    }
}

//! About page component

use leptos::prelude::*;

/// About page
#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="page about-page">
            <h2>"About"</h2>
            <div class="page-content">
                <p>"Tom-Store is a demo storefront client."</p>
            </div>
        </div>
    }
}

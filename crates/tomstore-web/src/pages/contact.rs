//! Contact page component

use leptos::prelude::*;

/// Contact page
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="page contact-page">
            <h2>"Contact"</h2>
            <div class="page-content">
                <p>"Contact - Coming Soon"</p>
                <p class="hint">"This will display support channels and a contact form."</p>
            </div>
        </div>
    }
}

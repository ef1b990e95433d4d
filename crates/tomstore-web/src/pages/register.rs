//! Register page component

use leptos::prelude::*;

/// Register page
#[component]
pub fn Register() -> impl IntoView {
    view! {
        <div class="page register-page">
            <h2>"Register"</h2>
            <div class="page-content">
                <p>"Register - Coming Soon"</p>
                <p class="hint">"Account creation is handled by the host application."</p>
            </div>
        </div>
    }
}

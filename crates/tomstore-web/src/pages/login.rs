//! Login page component

use leptos::prelude::*;

/// Login page
#[component]
pub fn Login() -> impl IntoView {
    view! {
        <div class="page login-page">
            <h2>"Login"</h2>
            <div class="page-content">
                <p>"Login - Coming Soon"</p>
                <p class="hint">"Authentication is handled by the host application."</p>
            </div>
        </div>
    }
}

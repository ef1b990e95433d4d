//! Basket page component
//!
//! Read-only view of the shared snapshot; checkout lives elsewhere.

use leptos::prelude::*;

use crate::store::use_basket;

/// Basket page - current basket contents
#[component]
pub fn BasketPage() -> impl IntoView {
    let basket = use_basket();

    view! {
        <div class="page basket-page">
            <h2>"Basket"</h2>
            {move || match basket.snapshot() {
                None => view! {
                    <p class="hint">"Your basket has not loaded yet."</p>
                }
                .into_any(),
                Some(snapshot) => view! {
                    <div class="page-content">
                        <ul class="basket-list">
                            {snapshot
                                .items
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="basket-item">
                                            <span class="basket-item-name">{item.name.clone()}</span>
                                            <span class="basket-item-quantity">
                                                {format!("x{}", item.quantity)}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <p>{format!("{} item(s) total", snapshot.item_count())}</p>
                        <button class="basket-clear" on:click=move |_| basket.clear()>
                            "Clear basket"
                        </button>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

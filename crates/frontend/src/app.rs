use crate::usecases::u501_product_search::ui::page::ProductSearchPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ProductSearchPage />
    }
}

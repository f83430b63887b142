use contracts::domain::a001_catalog_product::aggregate::{format_price, CatalogProduct};
use leptos::prelude::*;

use super::page::SearchPageState;
use crate::shared::date_utils::format_best_before;

const STORE_LAYOUT_IMAGE: &str = "/assets/store_layout.png";

#[component]
pub fn StoreLayout() -> impl IntoView {
    view! {
        <details class="store-layout">
            <summary>"Store Layout"</summary>
            <img class="store-layout__image" src=STORE_LAYOUT_IMAGE alt="Store layout" />
        </details>
    }
}

#[component]
pub fn SearchResults(state: SearchPageState) -> impl IntoView {
    view! {
        <section class="results">
            <h2>"Search Results"</h2>
            {move || {
                if let Some(err) = state.error.get() {
                    return view! { <p class="results__empty results__empty--error">{err}</p> }
                        .into_any();
                }
                match state.results.get() {
                    None => view! { <p class="results__loading">"Loading..."</p> }.into_any(),
                    Some(response) if response.products.is_empty() => {
                        view! {
                            <p class="results__empty">
                                "No products found matching the selected filters."
                            </p>
                        }
                            .into_any()
                    }
                    Some(response) => {
                        let summary = format!(
                            "{} of {} products",
                            response.total,
                            response.catalog_size,
                        );
                        view! {
                            <div>
                                <p class="results__count">{summary}</p>
                                <div class="results__list">
                                    {response
                                        .products
                                        .into_iter()
                                        .map(|product| view! { <ProductCard product=product /> })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn ProductCard(product: CatalogProduct) -> impl IntoView {
    let brand = product.brand_or_dash().to_string();
    let CatalogProduct {
        title,
        price,
        after_sale,
        discount,
        best_before,
        shelf,
        image,
        link,
        ..
    } = product;

    view! {
        <article class="product-card">
            {image.map(|src| view! { <img class="product-card__image" src=src width="150" alt="" /> })}
            <div class="product-card__body">
                <p><strong>"Product Name: "</strong>{title}</p>
                <p><strong>"Brand: "</strong>{brand}</p>
                <p><strong>"Price: "</strong>{format_price(price)}</p>
                <p><strong>"After Sale Price: "</strong>{format_price(after_sale)}</p>
                <p>
                    <strong>"Discount Info: "</strong>
                    {discount.unwrap_or_else(|| "-".to_string())}
                </p>
                <p><strong>"Best Before Date: "</strong>{format_best_before(best_before)}</p>
                <p>
                    <strong>"Shelf Location: "</strong>
                    {shelf.unwrap_or_else(|| "-".to_string())}
                </p>
                {link
                    .map(|href| {
                        view! {
                            <a class="product-card__link" href=href target="_blank" rel="noopener">
                                "View Details"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}

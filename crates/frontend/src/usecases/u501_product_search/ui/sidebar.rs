use contracts::usecases::u501_product_search::criteria::ALL_BRANDS;
use leptos::prelude::*;

use super::page::{reset_filters, run_search, SearchPageState};
use crate::projections::p901_keyword_counts::ui::popular_keywords::PopularKeywords;

#[component]
pub fn SearchSidebar(state: SearchPageState) -> impl IntoView {
    let form = state.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_search(state);
    };

    // Клик по популярному запросу подставляет его в поиск
    let on_keyword_select = Callback::new(move |keyword: String| {
        form.update(|f| f.query = keyword);
        run_search(state);
    });

    view! {
        <aside class="sidebar">
            <h2>"Search Filters"</h2>
            <form class="sidebar__form" on:submit=on_submit>
                <label class="form__label" for="search-query">
                    "Search by Product Name or Keyword:"
                </label>
                <input
                    id="search-query"
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().query
                    on:input=move |ev| form.update(|f| f.query = event_target_value(&ev))
                />

                <label class="form__label" for="brand-filter">"Filter by Brand:"</label>
                <select
                    id="brand-filter"
                    class="form__select"
                    prop:value=move || form.get().brand
                    on:change=move |ev| form.update(|f| f.brand = event_target_value(&ev))
                >
                    <option value=ALL_BRANDS>{ALL_BRANDS}</option>
                    <For
                        each=move || state.facets.get().brands
                        key=|brand| brand.clone()
                        children=move |brand: String| {
                            let value = brand.clone();
                            view! { <option value=value>{brand}</option> }
                        }
                    />
                </select>

                <label class="form__label">"Filter by Price Range:"</label>
                <div class="sidebar__price-range">
                    <input
                        type="number"
                        step="0.01"
                        class="form__input"
                        prop:value=move || form.get().price_min
                        on:input=move |ev| form.update(|f| f.price_min = event_target_value(&ev))
                    />
                    <span>"to"</span>
                    <input
                        type="number"
                        step="0.01"
                        class="form__input"
                        prop:value=move || form.get().price_max
                        on:input=move |ev| form.update(|f| f.price_max = event_target_value(&ev))
                    />
                </div>

                <div class="form__checkbox-wrapper">
                    <input
                        id="discount-only"
                        type="checkbox"
                        class="form__checkbox"
                        prop:checked=move || form.get().discount_only
                        on:change=move |ev| {
                            form.update(|f| f.discount_only = event_target_checked(&ev))
                        }
                    />
                    <label class="form__checkbox-label" for="discount-only">
                        "Show Discounted Items Only"
                    </label>
                </div>

                <label class="form__label" for="shelf-filter">"Search by Shelf Location:"</label>
                <input
                    id="shelf-filter"
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().shelf
                    on:input=move |ev| form.update(|f| f.shelf = event_target_value(&ev))
                />

                <div class="sidebar__actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || state.loading.get()
                    >
                        "Search"
                    </button>
                    <button type="button" class="button" on:click=move |_| reset_filters(state)>
                        "Reset filters"
                    </button>
                </div>
            </form>

            <PopularKeywords keywords=state.top_keywords on_select=on_keyword_select />
        </aside>
    }
}

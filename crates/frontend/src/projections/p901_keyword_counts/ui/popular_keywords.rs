use contracts::projections::p901_keyword_counts::dto::KeywordCount;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::projections::p901_keyword_counts::api;

const TOP_LIMIT: usize = 10;

/// Перезагружает список популярных запросов
pub fn refresh_keywords(keywords: RwSignal<Vec<KeywordCount>>) {
    spawn_local(async move {
        match api::fetch_top(TOP_LIMIT).await {
            Ok(items) => keywords.set(items),
            Err(e) => log::warn!("Failed to load popular keywords: {}", e),
        }
    });
}

#[component]
pub fn PopularKeywords(
    keywords: RwSignal<Vec<KeywordCount>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let clearing = RwSignal::new(false);

    let on_clear = move |_: leptos::ev::MouseEvent| {
        clearing.set(true);
        spawn_local(async move {
            match api::clear_history().await {
                Ok(response) => {
                    log::info!("Search history cleared: {} keywords", response.cleared);
                    keywords.set(Vec::new());
                }
                Err(e) => log::error!("Failed to clear search history: {}", e),
            }
            clearing.set(false);
        });
    };

    view! {
        <div class="popular-keywords">
            <h3>"Popular Searches"</h3>
            <Show
                when=move || !keywords.get().is_empty()
                fallback=|| view! { <p class="popular-keywords__empty">"No searches yet"</p> }
            >
                <ol class="popular-keywords__list">
                    <For
                        each=move || keywords.get()
                        key=|item| (item.keyword.clone(), item.count)
                        children=move |item: KeywordCount| {
                            let keyword = item.keyword.clone();
                            view! {
                                <li>
                                    <a
                                        href="#"
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.prevent_default();
                                            on_select.run(keyword.clone());
                                        }
                                    >
                                        {item.keyword.clone()}
                                    </a>
                                    " (" {item.count} ")"
                                </li>
                            }
                        }
                    />
                </ol>
            </Show>
            <button
                type="button"
                class="button button--small"
                disabled=move || clearing.get()
                on:click=on_clear
            >
                "Clear history"
            </button>
        </div>
    }
}

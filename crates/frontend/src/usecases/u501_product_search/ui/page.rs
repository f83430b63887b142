use contracts::projections::p901_keyword_counts::dto::KeywordCount;
use contracts::usecases::u501_product_search::criteria::SearchCriteria;
use contracts::usecases::u501_product_search::dto::{CatalogFacets, SearchResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::results::{SearchResults, StoreLayout};
use super::sidebar::SearchSidebar;
use super::state::FilterForm;
use crate::projections::p901_keyword_counts::ui::popular_keywords::refresh_keywords;
use crate::shared::api_utils::ApiError;
use crate::usecases::u501_product_search::api;

/// Сигналы страницы поиска
#[derive(Clone, Copy)]
pub struct SearchPageState {
    pub session_id: RwSignal<Option<Uuid>>,
    pub facets: RwSignal<CatalogFacets>,
    pub form: RwSignal<FilterForm>,
    pub results: RwSignal<Option<SearchResponse>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub top_keywords: RwSignal<Vec<KeywordCount>>,
}

impl SearchPageState {
    pub fn new() -> Self {
        Self {
            session_id: RwSignal::new(None),
            facets: RwSignal::new(CatalogFacets::default()),
            form: RwSignal::new(FilterForm::default()),
            results: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            top_keywords: RwSignal::new(Vec::new()),
        }
    }
}

/// Отправляет текущие значения формы на сервер
pub fn run_search(state: SearchPageState) {
    let criteria = state
        .form
        .get_untracked()
        .to_criteria(&state.facets.get_untracked());
    let session_id = state.session_id.get_untracked();
    state.loading.set(true);

    spawn_local(async move {
        match search_with_session_renewal(state, session_id, criteria).await {
            Ok(response) => {
                let recorded = response.keyword_recorded;
                state.results.set(Some(response));
                state.error.set(None);
                if recorded {
                    refresh_keywords(state.top_keywords);
                }
            }
            Err(e) => {
                log::error!("Search failed: {}", e);
                state.results.set(None);
                state.error.set(Some(e.message));
            }
        }
        state.loading.set(false);
    });
}

/// Сервер не знает сессию (перезапуск или истек срок простоя):
/// создаем новую и повторяем поиск один раз
async fn search_with_session_renewal(
    state: SearchPageState,
    session_id: Option<Uuid>,
    criteria: SearchCriteria,
) -> Result<SearchResponse, ApiError> {
    match api::search(session_id, criteria.clone()).await {
        Err(e) if should_renew_session(&e, session_id) => {
            log::warn!("Session is no longer known to the server, starting a new one");
            let renewed = match api::create_session().await {
                Ok(session) => Some(session.session_id),
                Err(err) => {
                    log::warn!("Session could not be created, searching without one: {}", err);
                    None
                }
            };
            state.session_id.set(renewed);
            api::search(renewed, criteria).await
        }
        other => other,
    }
}

fn should_renew_session(error: &ApiError, session_id: Option<Uuid>) -> bool {
    session_id.is_some() && error.is_not_found()
}

/// Сбрасывает фильтры к значениям по умолчанию и повторяет поиск
pub fn reset_filters(state: SearchPageState) {
    let facets = state.facets.get_untracked();
    state.form.set(FilterForm::with_facets(&facets));

    match state.session_id.get_untracked() {
        Some(id) => spawn_local(async move {
            if let Err(e) = api::reset_session(id).await {
                log::error!("Failed to reset session: {}", e);
            }
            run_search(state);
        }),
        None => run_search(state),
    }
}

fn initialize(state: SearchPageState) {
    spawn_local(async move {
        match api::create_session().await {
            Ok(session) => state.session_id.set(Some(session.session_id)),
            Err(e) => log::warn!("Session could not be created, searching without one: {}", e),
        }

        match api::fetch_facets().await {
            Ok(facets) => {
                state.form.set(FilterForm::with_facets(&facets));
                state.facets.set(facets);
            }
            Err(e) => {
                state.error.set(Some(e));
                return;
            }
        }

        run_search(state);
    });
    refresh_keywords(state.top_keywords);
}

#[component]
pub fn ProductSearchPage() -> impl IntoView {
    let state = SearchPageState::new();
    initialize(state);

    view! {
        <div class="app">
            <SearchSidebar state=state />
            <main class="content">
                <h1>"Supermarket Product Search Tool"</h1>
                <StoreLayout />
                <SearchResults state=state />
            </main>
        </div>
    }
}

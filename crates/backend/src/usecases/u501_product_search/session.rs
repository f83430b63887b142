use chrono::{DateTime, Duration, Utc};
use contracts::usecases::u501_product_search::criteria::SearchCriteria;
use contracts::usecases::u501_product_search::dto::SessionDto;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use uuid::Uuid;

pub const DEFAULT_IDLE_TIMEOUT_MINUTES: i64 = 30;

/// Состояние поиска одного пользователя
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub id: Uuid,
    pub criteria: SearchCriteria,
    /// Последний запрос, засчитанный в статистику в этой сессии
    pub last_counted_query: Option<String>,
    /// Время последнего обращения; по нему удаляются брошенные сессии
    pub last_access: DateTime<Utc>,
}

impl SessionState {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            criteria: SearchCriteria::default(),
            last_counted_query: None,
            last_access: Utc::now(),
        }
    }

    pub fn to_dto(&self) -> SessionDto {
        SessionDto {
            session_id: self.id,
            criteria: self.criteria.clone(),
        }
    }

    fn is_idle(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
        now - self.last_access > timeout
    }
}

/// Хранилище сессий по идентификатору
pub trait SessionStore: Send + Sync {
    fn create(&self) -> SessionState;
    fn get(&self, id: Uuid) -> Option<SessionState>;
    /// Изменяет сессию под блокировкой хранилища.
    /// `false`, если сессии нет или она просрочена.
    fn update(&self, id: Uuid, f: &mut dyn FnMut(&mut SessionState)) -> bool;
    fn remove(&self, id: Uuid) -> bool;
}

/// Сессии в памяти процесса. Сессия без обращений дольше `idle_timeout`
/// считается удаленной; такие записи вычищаются при создании новых.
#[derive(Debug)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<Uuid, SessionState>>,
    idle_timeout: Duration,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(Duration::minutes(DEFAULT_IDLE_TIMEOUT_MINUTES))
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_timeout,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Живая сессия с обновленным временем обращения
    fn live<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, SessionState>,
        id: Uuid,
    ) -> Option<&'a mut SessionState> {
        let now = Utc::now();
        if sessions.get(&id)?.is_idle(now, self.idle_timeout) {
            sessions.remove(&id);
            tracing::debug!("Session {} expired", id);
            return None;
        }
        let session = sessions.get_mut(&id)?;
        session.last_access = now;
        Some(session)
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self) -> SessionState {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(now, self.idle_timeout));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!("Evicted {} idle session(s)", evicted);
        }

        let state = SessionState::new(Uuid::new_v4());
        sessions.insert(state.id, state.clone());
        tracing::debug!("Session {} created", state.id);
        state
    }

    fn get(&self, id: Uuid) -> Option<SessionState> {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        self.live(&mut sessions, id).map(|s| s.clone())
    }

    fn update(&self, id: Uuid, f: &mut dyn FnMut(&mut SessionState)) -> bool {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        match self.live(&mut sessions, id) {
            Some(session) => {
                f(session);
                true
            }
            None => false,
        }
    }

    fn remove(&self, id: Uuid) -> bool {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some()
    }
}

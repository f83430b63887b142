pub mod executor;
pub mod session;

pub use executor::{reset, search, SearchOutcome};
pub use session::{InMemorySessionStore, SessionState, SessionStore};

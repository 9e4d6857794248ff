//! Application state for dependency injection.

use std::sync::Arc;

use application::TokenProvider;
use infrastructure::Database;

use crate::container::UseCases;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub use_cases: Arc<dyn UseCases>,
    pub tokens: Arc<dyn TokenProvider>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        use_cases: Arc<dyn UseCases>,
        tokens: Arc<dyn TokenProvider>,
        database: Database,
    ) -> Self {
        Self {
            use_cases,
            tokens,
            database,
        }
    }
}

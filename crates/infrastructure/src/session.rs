//! Per-request database session.
//!
//! A session owns the pooled connection handle and, while a unit of work is
//! open, the active transaction. Repositories of the same request share one
//! session, so their statements join the transaction without ever holding it.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction};
use tokio::sync::{Mutex, MutexGuard};

pub struct DbSession {
    connection: Arc<DatabaseConnection>,
    transaction: Mutex<Option<DatabaseTransaction>>,
}

impl DbSession {
    pub fn new(connection: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self {
            connection: connection.into(),
            transaction: Mutex::new(None),
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Whether a transaction is currently open.
    pub async fn has_transaction(&self) -> bool {
        self.transaction.lock().await.is_some()
    }

    pub(crate) async fn active_transaction(&self) -> MutexGuard<'_, Option<DatabaseTransaction>> {
        self.transaction.lock().await
    }
}

/// Run a statement on the session's open transaction, or on the pooled
/// connection when there is none.
///
/// `$body` is evaluated with `$conn` bound to a `ConnectionTrait` reference.
macro_rules! on_session {
    ($session:expr, |$conn:ident| $body:expr) => {{
        let active = $session.active_transaction().await;
        match active.as_ref() {
            Some($conn) => $body,
            None => {
                let $conn = $session.connection();
                $body
            }
        }
    }};
}

pub(crate) use on_session;

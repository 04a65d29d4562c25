use std::sync::Arc;

use ypsl_integrations::email::EmailClient;
use ypsl_integrations::sheets::SheetsClient;
use ypsl_integrations::storage::MediaStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ypsl_db::DbPool,
    /// Server configuration (JWT secret, CORS, timeouts).
    pub config: Arc<ServerConfig>,
    /// Media storage provider for uploads and payment slips.
    pub storage: Arc<dyn MediaStorage>,
    /// Sheets order log. `None` when credentials are not configured.
    pub sheets: Option<Arc<SheetsClient>>,
    /// Transactional email. `None` when the API key is not configured.
    pub email: Option<Arc<EmailClient>>,
}

use std::sync::Arc;

use crate::config::Config;
use crate::screening::catalog::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill vocabulary and role profiles. Built once at startup, read-only afterwards.
    pub catalog: Arc<Catalog>,
}

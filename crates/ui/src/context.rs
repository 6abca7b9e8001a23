use std::sync::Arc;

use hub_core::Catalog;
use hub_core::model::UserId;
use services::ProgressStore;

/// What the composition root must supply for the UI to run.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn progress_store(&self) -> Arc<ProgressStore>;
    fn current_user(&self) -> Option<UserId>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    progress_store: Arc<ProgressStore>,
    current_user: Option<UserId>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress_store: app.progress_store(),
            current_user: app.current_user(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress_store(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress_store)
    }

    #[must_use]
    pub fn current_user(&self) -> Option<UserId> {
        self.current_user.clone()
    }
}

/// Build an `AppContext` from the composition root's app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

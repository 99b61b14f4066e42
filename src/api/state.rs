//! Application state for the utilization API.

use std::sync::Arc;

use crate::config::{ConfigLoader, HrSettings};
use crate::source::HrDataSource;

/// Shared application state.
///
/// Holds the HR settings and the data source every report request runs
/// against. Both are read-only for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<HrSettings>,
    source: Arc<dyn HrDataSource>,
}

impl AppState {
    /// Creates state from a loaded configuration directory.
    pub fn new(config: ConfigLoader) -> Self {
        let (settings, source) = config.into_parts();
        Self::with_source(settings, source)
    }

    /// Creates state from settings and any data source.
    pub fn with_source<S: HrDataSource + 'static>(settings: HrSettings, source: S) -> Self {
        Self {
            settings: Arc::new(settings),
            source: Arc::new(source),
        }
    }

    /// Returns the HR settings.
    pub fn settings(&self) -> &HrSettings {
        &self.settings
    }

    /// Returns the data source.
    pub fn source(&self) -> &dyn HrDataSource {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryDataSource;
    use rust_decimal::Decimal;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_settings() {
        let state =
            AppState::with_source(HrSettings::new(Decimal::new(8, 0)), InMemoryDataSource::new());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.settings, &cloned.settings));
        assert_eq!(cloned.settings().standard_working_hours().unwrap(), Decimal::new(8, 0));
    }
}

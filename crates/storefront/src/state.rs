use crate::{
    abstract_trait::DynNotifier,
    config::Config,
    di::DependenciesInject,
    service::{CatalogLoader, SearchDebouncer, SearchExecutor},
    view::ViewStore,
};
use anyhow::{Context, Result};
use prometheus_client::{encoding::text::encode, registry::Registry};
use std::{fmt, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub view: Arc<ViewStore>,
    pub catalog: Arc<CatalogLoader>,
    pub search: Arc<SearchExecutor>,
    pub debouncer: Arc<SearchDebouncer>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("view", &self.view)
            .field("debouncer", &self.debouncer)
            .finish()
    }
}

impl AppState {
    pub fn new(config: &Config, notifier: DynNotifier) -> Result<Self> {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(config, notifier, &mut registry)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self::with_dependencies(
            di_container,
            registry,
            config.quiet_period(),
        ))
    }

    pub fn with_dependencies(
        di_container: DependenciesInject,
        registry: Registry,
        quiet_period: Duration,
    ) -> Self {
        let view = Arc::new(ViewStore::new());

        let catalog = Arc::new(CatalogLoader::new(
            di_container.product_gateway.clone(),
            di_container.notifier.clone(),
            view.clone(),
        ));

        let search = Arc::new(SearchExecutor::new(
            di_container.product_gateway.clone(),
            di_container.notifier.clone(),
        ));

        let debouncer = Arc::new(SearchDebouncer::new(
            search.clone(),
            view.clone(),
            quiet_period,
        ));

        Self {
            di_container,
            registry: Arc::new(registry),
            view,
            catalog,
            search,
            debouncer,
        }
    }

    pub fn encode_metrics(&self) -> Result<String> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry).context("Failed to encode metrics")?;
        Ok(buffer)
    }
}

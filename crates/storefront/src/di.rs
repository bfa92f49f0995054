use crate::{
    abstract_trait::{DynNotifier, DynProductGateway},
    config::Config,
    service::ProductHttpClientService,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_gateway: DynProductGateway,
    pub notifier: DynNotifier,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_gateway", &"DynProductGateway")
            .field("notifier", &"DynNotifier")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: &Config, notifier: DynNotifier, registry: &mut Registry) -> Result<Self> {
        let product_gateway = Arc::new(
            ProductHttpClientService::new(config, registry)
                .context("Failed to initialize product gateway")?,
        ) as DynProductGateway;

        Ok(Self {
            product_gateway,
            notifier,
        })
    }
}

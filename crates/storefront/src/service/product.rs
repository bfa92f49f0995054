use crate::{
    abstract_trait::ProductGatewayTrait, config::Config, domain::requests::SearchProducts,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use reqwest::Client;
use shared::{
    errors::HttpError,
    model::Product,
    utils::{Endpoint, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct ProductHttpClientService {
    client: Client,
    endpoint: String,
    metrics: Metrics,
}

impl ProductHttpClientService {
    pub fn new(config: &Config, registry: &mut Registry) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        let metrics = Metrics::new();
        metrics.register(registry, "product_gateway");

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            metrics,
        })
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    async fn fetch_products(
        &self,
        path: &str,
        query: Option<&SearchProducts>,
    ) -> Result<Vec<Product>, HttpError> {
        let url = format!("{}{path}", self.endpoint);

        let mut request = self.client.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::from_status(status.as_u16(), &body));
        }

        let body = response.bytes().await?;
        debug!("GET {url} -> {status} ({} bytes)", body.len());

        serde_json::from_slice::<Vec<Product>>(&body)
            .map_err(|err| HttpError::Decode(err.to_string()))
    }

    fn complete_tracing(
        &self,
        endpoint: Endpoint,
        start_time: Instant,
        outcome: &Result<Vec<Product>, HttpError>,
    ) {
        let elapsed = start_time.elapsed().as_secs_f64();

        let status = match outcome {
            Ok(products) => {
                info!("Operation completed successfully: {} products", products.len());
                Status::Success
            }
            // an empty search is an answer, not a failure
            Err(err) if err.is_not_found() && endpoint == Endpoint::Search => {
                info!("Operation completed: no matching products");
                Status::Success
            }
            Err(err) => {
                error!("Operation failed: {err}");
                Status::Error
            }
        };

        self.metrics.record(endpoint, status, elapsed);
    }
}

#[async_trait]
impl ProductGatewayTrait for ProductHttpClientService {
    async fn find_all(&self) -> Result<Vec<Product>, HttpError> {
        info!("Retrieving all products");

        let start_time = Instant::now();
        let outcome = self.fetch_products("/products", None).await;
        self.complete_tracing(Endpoint::Products, start_time, &outcome);

        outcome
    }

    async fn search(&self, req: &SearchProducts) -> Result<Vec<Product>, HttpError> {
        info!("Searching products (value: {:?})", req.value);

        let start_time = Instant::now();
        let outcome = self.fetch_products("/products/search", Some(req)).await;
        self.complete_tracing(Endpoint::Search, start_time, &outcome);

        outcome
    }
}

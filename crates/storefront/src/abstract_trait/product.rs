use crate::domain::requests::SearchProducts;
use async_trait::async_trait;
use shared::{errors::HttpError, model::Product};
use std::sync::Arc;

pub type DynProductGateway = Arc<dyn ProductGatewayTrait + Send + Sync>;

#[async_trait]
pub trait ProductGatewayTrait {
    /// `GET {base}/products`
    async fn find_all(&self) -> Result<Vec<Product>, HttpError>;
    /// `GET {base}/products/search?value=<text>`
    async fn search(&self, req: &SearchProducts) -> Result<Vec<Product>, HttpError>;
}

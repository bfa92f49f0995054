use crate::{
    abstract_trait::{DynNotifier, DynProductGateway},
    domain::{
        requests::SearchProducts,
        response::{Notification, ProductList},
    },
};
use std::fmt;
use tracing::{error, info};

/// Runs one search request right away. 404 is an expected "no matches"
/// answer and stays silent; every other failure notifies the user.
pub struct SearchExecutor {
    gateway: DynProductGateway,
    notifier: DynNotifier,
}

impl fmt::Debug for SearchExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchExecutor")
            .field("gateway", &"Arc<dyn ProductGatewayTrait>")
            .field("notifier", &"Arc<dyn NotifierTrait>")
            .finish()
    }
}

impl SearchExecutor {
    pub fn new(gateway: DynProductGateway, notifier: DynNotifier) -> Self {
        Self { gateway, notifier }
    }

    pub async fn search(&self, text: &str) -> ProductList {
        let req = SearchProducts::from(text);

        match self.gateway.search(&req).await {
            Ok(products) => ProductList::Found(products),
            Err(err) if err.is_not_found() => {
                info!("No products match {text:?}");
                ProductList::NotFound
            }
            Err(err) => {
                error!("Search for {text:?} failed: {err}");
                self.notifier.notify(Notification::backend_failure());
                ProductList::NotFound
            }
        }
    }
}

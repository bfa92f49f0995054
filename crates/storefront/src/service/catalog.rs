use crate::{
    abstract_trait::{DynNotifier, DynProductGateway},
    domain::response::{Notification, ProductList, ViewState},
    view::ViewStore,
};
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};
use tracing::{error, info, warn};

/// Loads the full catalog once per activation.
pub struct CatalogLoader {
    gateway: DynProductGateway,
    notifier: DynNotifier,
    view: Arc<ViewStore>,
    activated: AtomicBool,
}

impl fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("gateway", &"Arc<dyn ProductGatewayTrait>")
            .field("activated", &self.activated)
            .finish()
    }
}

impl CatalogLoader {
    pub fn new(gateway: DynProductGateway, notifier: DynNotifier, view: Arc<ViewStore>) -> Self {
        Self {
            gateway,
            notifier,
            view,
            activated: AtomicBool::new(false),
        }
    }

    /// Fetches `/products` and publishes the result. Failures are reported
    /// through the notifier and resolve to an empty list, never to
    /// `ProductList::NotFound`.
    ///
    /// Only the first call fetches. Later calls return whatever the view
    /// currently shows; while the first fetch is still in flight that is an
    /// empty list, which does not mean the catalog is empty.
    pub async fn load_catalog(&self) -> ProductList {
        if self.activated.swap(true, Ordering::SeqCst) {
            warn!("Catalog already loaded for this activation, not reloading");
            return match self.view.current() {
                ViewState::Loaded(list) => list,
                ViewState::Loading => ProductList::empty(),
            };
        }

        let ticket = self.view.begin_loading();

        let list = match self.gateway.find_all().await {
            Ok(products) => {
                info!("Loaded catalog with {} products", products.len());
                ProductList::Found(products)
            }
            Err(err) => {
                error!("Failed to load catalog: {err}");
                self.notifier.notify(Notification::backend_failure());
                ProductList::empty()
            }
        };

        if !self.view.commit(ticket, ViewState::Loaded(list.clone())) {
            info!("Catalog result superseded by a newer search");
        }

        list
    }
}

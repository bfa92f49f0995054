#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use prometheus_client::registry::Registry;
use shared::{errors::HttpError, model::Product};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use storefront::{
    abstract_trait::{DynNotifier, DynProductGateway, NotifierTrait, ProductGatewayTrait},
    config::Config,
    di::DependenciesInject,
    domain::{requests::SearchProducts, response::Notification},
    service::ProductHttpClientService,
    state::AppState,
};
use tokio::net::TcpListener;

pub fn product(id: &str, name: &str) -> Product {
    Product {
        name: name.to_string(),
        category: "Phones".to_string(),
        cost: 100.0,
        rating: 4,
        image: "https://i.imgur.com/lulqWzW.jpg".to_string(),
        id: id.to_string(),
    }
}

pub fn products_json(products: &[Product]) -> String {
    serde_json::to_string(products).unwrap()
}

#[derive(Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }
}

impl NotifierTrait for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

/// In-process gateway. Search answers `Found([product named after the
/// query])` unless a reply or delay has been scripted for that query.
#[derive(Default)]
pub struct FakeGateway {
    pub catalog: Mutex<Option<Result<Vec<Product>, u16>>>,
    pub catalog_delay: Mutex<Option<Duration>>,
    queries: Mutex<Vec<String>>,
    replies: Mutex<HashMap<String, Result<Vec<Product>, u16>>>,
    delays: Mutex<HashMap<String, Duration>>,
}

impl FakeGateway {
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn reply(&self, query: &str, reply: Result<Vec<Product>, u16>) {
        self.replies.lock().unwrap().insert(query.to_string(), reply);
    }

    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(query.to_string(), delay);
    }
}

#[async_trait]
impl ProductGatewayTrait for FakeGateway {
    async fn find_all(&self) -> Result<Vec<Product>, HttpError> {
        let delay = *self.catalog_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let catalog = self.catalog.lock().unwrap().clone();
        match catalog {
            Some(Ok(products)) => Ok(products),
            Some(Err(status)) => Err(HttpError::from_status(status, "")),
            None => Ok(Vec::new()),
        }
    }

    async fn search(&self, req: &SearchProducts) -> Result<Vec<Product>, HttpError> {
        self.queries.lock().unwrap().push(req.value.clone());

        let delay = self.delays.lock().unwrap().get(&req.value).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().get(&req.value).cloned();
        match reply {
            Some(Ok(products)) => Ok(products),
            Some(Err(status)) => Err(HttpError::from_status(status, "")),
            None => Ok(vec![product(&req.value, &req.value)]),
        }
    }
}

pub struct Harness {
    pub state: AppState,
    pub notifier: Arc<RecordingNotifier>,
}

pub fn harness_with_gateway(gateway: DynProductGateway, quiet_period: Duration) -> Harness {
    let notifier = Arc::new(RecordingNotifier::default());

    let di_container = DependenciesInject {
        product_gateway: gateway,
        notifier: notifier.clone() as DynNotifier,
    };

    Harness {
        state: AppState::with_dependencies(di_container, Registry::default(), quiet_period),
        notifier,
    }
}

pub fn http_harness(endpoint: &str, quiet_period: Duration) -> (Harness, ProductHttpClientService) {
    let mut registry = Registry::default();
    let gateway = ProductHttpClientService::new(&Config::new(endpoint), &mut registry).unwrap();

    let notifier = Arc::new(RecordingNotifier::default());
    let di_container = DependenciesInject {
        product_gateway: Arc::new(gateway.clone()),
        notifier: notifier.clone() as DynNotifier,
    };

    let harness = Harness {
        state: AppState::with_dependencies(di_container, registry, quiet_period),
        notifier,
    };

    (harness, gateway)
}

#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn ok(products: &[Product]) -> Self {
        Self {
            status: StatusCode::OK,
            body: products_json(products),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: r#"{"success":false,"message":"Something went wrong. Check the backend console for more details"}"#.to_string(),
        }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

type SearchFn = Arc<dyn Fn(&str) -> Reply + Send + Sync>;

#[derive(Clone)]
struct BackendState {
    catalog: Reply,
    search: SearchFn,
    queries: Arc<Mutex<Vec<String>>>,
}

/// A throwaway HTTP backend bound to an ephemeral local port.
pub struct MockBackend {
    pub endpoint: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub async fn spawn<F>(catalog: Reply, search: F) -> Self
    where
        F: Fn(&str) -> Reply + Send + Sync + 'static,
    {
        let queries = Arc::new(Mutex::new(Vec::new()));

        let state = BackendState {
            catalog,
            search: Arc::new(search),
            queries: queries.clone(),
        };

        let app = Router::new()
            .route("/products", get(products_handler))
            .route("/products/search", get(search_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            endpoint: format!("http://{addr}"),
            queries,
        }
    }

    pub fn search_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

async fn products_handler(State(state): State<BackendState>) -> (StatusCode, String) {
    (state.catalog.status, state.catalog.body.clone())
}

async fn search_handler(
    State(state): State<BackendState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let value = params.get("value").cloned().unwrap_or_default();
    state.queries.lock().unwrap().push(value.clone());

    let reply = (state.search)(&value);
    (reply.status, reply.body)
}

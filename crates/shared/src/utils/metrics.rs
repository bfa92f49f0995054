use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Endpoint {
    Products,
    Search,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub endpoint: Endpoint,
    pub status: Status,
}

/// Request counters for the backend client. Families are reference counted,
/// so clones share the same underlying series.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry, prefix: &str) {
        registry.register(
            format!("{prefix}_request_counter"),
            "Total number of requests sent to the product backend",
            self.request_counter.clone(),
        );
        registry.register(
            format!("{prefix}_request_duration"),
            "Histogram of request durations against the product backend",
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, endpoint: Endpoint, status: Status, duration_secs: f64) {
        let labels = Labels { endpoint, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    /// Reads a counter without creating the series.
    pub fn count(&self, endpoint: Endpoint, status: Status) -> u64 {
        self.request_counter
            .get(&Labels { endpoint, status })
            .map(|counter| counter.get())
            .unwrap_or(0)
    }
}

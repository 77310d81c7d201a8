use prometheus_client::{
    encoding::{EncodeLabelSet, EncodeLabelValue},
    metrics::{counter::Counter, family::Family, histogram::Histogram},
    registry::Registry,
};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, EncodeLabelSet)]
struct MetricLabels {
    operation: String,
    method: Method,
    status: Status,
}

/// Request counters and latency histograms, shared by every service.
#[derive(Debug, Clone)]
pub struct Metrics {
    requests: Family<MetricLabels, Counter>,
    duration: Family<MetricLabels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            duration: Family::new_with_constructor(|| {
                Histogram::new([0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 2.5, 5.0])
            }),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "subscription_requests",
            "Total service operations by outcome",
            self.requests.clone(),
        );
        registry.register(
            "subscription_request_duration_seconds",
            "Service operation latency in seconds",
            self.duration.clone(),
        );
    }

    pub fn record(&self, operation: &str, method: Method, status: Status, elapsed_secs: f64) {
        let labels = MetricLabels {
            operation: operation.to_string(),
            method,
            status,
        };

        self.requests.get_or_create(&labels).inc();
        self.duration.get_or_create(&labels).observe(elapsed_secs);
    }

    #[cfg(test)]
    pub fn count(&self, operation: &str, method: Method, status: Status) -> u64 {
        let labels = MetricLabels {
            operation: operation.to_string(),
            method,
            status,
        };

        self.requests.get_or_create(&labels).get()
    }
}

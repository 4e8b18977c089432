//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the Gadkot server:
//! - HTTP request metrics (latency, counts, in-flight)
//! - Core metrics (catalog queries, relevance calls) registered from
//!   gadkot-core

use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    gadkot_core::register_core_metrics(&registry);
    registry
});

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "gadkot_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("gadkot_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "gadkot_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    let _ = registry.register(Box::new(HTTP_REQUEST_DURATION.clone()));
    let _ = registry.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = registry.register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()));
}

/// Replace path parameters with placeholders to bound label cardinality.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    // /api/v1/forts/{id} is the only parameterized route.
    if let ["", "api", "v1", "forts", id] = segments.as_slice() {
        if !matches!(*id, "regions" | "stats") {
            return "/api/v1/forts/{id}".to_string();
        }
    }
    path.to_string()
}

/// Render the registry in Prometheus text format.
pub fn render() -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if encoder.encode(&REGISTRY.gather(), &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_replaces_fort_id() {
        assert_eq!(
            normalize_path("/api/v1/forts/sinhagad"),
            "/api/v1/forts/{id}"
        );
    }

    #[test]
    fn test_normalize_path_keeps_static_routes() {
        assert_eq!(normalize_path("/api/v1/forts"), "/api/v1/forts");
        assert_eq!(
            normalize_path("/api/v1/forts/regions"),
            "/api/v1/forts/regions"
        );
        assert_eq!(normalize_path("/api/v1/forts/stats"), "/api/v1/forts/stats");
        assert_eq!(normalize_path("/api/v1/health"), "/api/v1/health");
    }

    #[test]
    fn test_render_includes_http_metrics() {
        HTTP_REQUESTS_TOTAL
            .with_label_values(&["GET", "/api/v1/health", "200"])
            .inc();
        let text = render();
        assert!(text.contains("gadkot_http_requests_total"));
    }
}

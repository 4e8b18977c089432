//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog queries
//! - Relevance service calls

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry};

/// Catalog queries by outcome.
pub static CATALOG_QUERIES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("gadkot_catalog_queries_total", "Total catalog queries"),
        &["outcome"], // "matched", "empty"
    )
    .unwrap()
});

/// Relevance service calls by result.
pub static RELEVANCE_CALLS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "gadkot_relevance_calls_total",
            "Total relevance service calls",
        ),
        &["result"], // "matched", "empty", "malformed", "error"
    )
    .unwrap()
});

/// Relevance call duration in seconds.
pub static RELEVANCE_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "gadkot_relevance_duration_seconds",
            "Duration of successful relevance service calls",
        )
        .buckets(vec![0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
    )
    .unwrap()
});

/// Register core metrics with the given registry.
pub fn register_core_metrics(registry: &Registry) {
    let _ = registry.register(Box::new(CATALOG_QUERIES.clone()));
    let _ = registry.register(Box::new(RELEVANCE_CALLS.clone()));
    let _ = registry.register(Box::new(RELEVANCE_DURATION.clone()));
}

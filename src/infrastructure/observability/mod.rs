//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    create_metrics_router, init_metrics, record_http_request, record_project_update,
    PrometheusMetrics, UpdateOutcome,
};

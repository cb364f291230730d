use crate::config::Config;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "notifications_api=info,tower_http=info,sqlx=warn";

/// Keeps exporters alive for the lifetime of the process.
///
/// Dropping it flushes pending spans, but only when OTLP export was set up.
pub struct ObservabilityGuard {
    otlp_enabled: bool,
}

impl Drop for ObservabilityGuard {
    fn drop(&mut self) {
        if self.otlp_enabled {
            global::shutdown_tracer_provider();
        }
    }
}

pub fn init(config: &Config) -> anyhow::Result<ObservabilityGuard> {
    let otlp_enabled = init_tracing(config)?;

    if let Some(port) = config.metrics_port {
        init_metrics(port)?;
    }

    tracing::info!(
        service = %config.service_name,
        otlp = otlp_enabled,
        metrics_port = ?config.metrics_port,
        "Observability initialized"
    );
    Ok(ObservabilityGuard { otlp_enabled })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber; returns whether spans go to an OTLP collector
fn init_tracing(config: &Config) -> anyhow::Result<bool> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let registry = Registry::default().with(env_filter()).with(fmt_layer);

    let Some(endpoint) = &config.otel_exporter_endpoint else {
        registry.try_init()?;
        return Ok(false);
    };

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint),
        )
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", config.service_name.clone()),
        ])))
        .install_batch(runtime::Tokio)?;

    registry
        .with(tracing_opentelemetry::layer().with_tracer(tracer))
        .try_init()?;
    Ok(true)
}

fn init_metrics(port: u16) -> anyhow::Result<()> {
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()?;

    metrics::describe_counter!("notifications_sent_total", "Notifications created");
    metrics::describe_counter!("notifications_canceled_total", "Notifications cancelled");
    metrics::describe_counter!("notifications_read_total", "Notifications marked as read");
    metrics::describe_counter!("notifications_unread_total", "Notifications marked as unread");
    Ok(())
}

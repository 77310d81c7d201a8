use anyhow::{Context, Result};
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{LogExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, logs::SdkLoggerProvider};
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the file writer and the OTel provider alive for the process lifetime.
pub struct Logger {
    _guard: WorkerGuard,
    provider: Option<SdkLoggerProvider>,
}

impl Logger {
    /// Installs the global subscriber. Logs are also shipped over OTLP/gRPC
    /// when `otel_endpoint` is set; must be called inside a Tokio runtime.
    pub fn new(component: &str, is_dev: bool, otel_endpoint: Option<&str>) -> Result<Self> {
        let log_dir = if is_dev { "./logs" } else { "/var/log/app" };
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = otel_endpoint
            .map(|endpoint| otlp_provider(component, endpoint))
            .transpose()?;

        if let Some(provider) = &provider {
            let otel_filter =
                EnvFilter::new("info,hyper=off,opentelemetry=off,h2=off,tonic=off,tower=off,sqlx=off");

            registry
                .with(OpenTelemetryTracingBridge::new(provider).with_filter(otel_filter))
                .init();
        } else {
            registry.init();
        }

        Ok(Self {
            _guard: guard,
            provider,
        })
    }
}

fn otlp_provider(component: &str, endpoint: &str) -> Result<SdkLoggerProvider> {
    let exporter = LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
        .with_context(|| format!("Failed to build OTLP log exporter for {endpoint}"))?;

    let resource = Resource::builder()
        .with_service_name(component.to_string())
        .build();

    Ok(SdkLoggerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            let _ = provider.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn builds_otlp_provider_without_connecting() {
        let provider = otlp_provider("subscription-service", "http://127.0.0.1:4317").unwrap();
        let _ = provider.shutdown();
    }
}

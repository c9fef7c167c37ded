//! # Telemetry
//!
//! Structured logging is always on: a `tracing_subscriber` registry with an
//! `EnvFilter` (`RUST_LOG`, default `info`) and a human-readable `fmt` layer.
//!
//! ## Feature matrix
//!
//! - `metrics`: Enables OpenTelemetry metrics (counters, histograms).
//! - `stdout`: Exports metrics to stdout every 5 seconds.
//!
//! ## Feature constraints
//!
//! - `stdout` requires `metrics`.
//!
//! ## Metrics
//!
//! - `groupings` / `names_grouped`: successful `/analyze` requests and the
//!   names they contained.
//! - `documents_rendered` / `document_bytes`: PDF downloads and their size.
//! - `rejected_requests`: requests answered with a `4xx`.
//!
//! The recording helpers below compile to no-ops when `metrics` is disabled,
//! so call sites never need their own `cfg`.
//!
//! ## Example usage
//!
//! ```bash
//! cargo run --features metrics,stdout
//! ```

// Disallow using `stdout` without `metrics`
#[cfg(all(feature = "stdout", not(feature = "metrics")))]
compile_error!("The 'stdout' feature requires 'metrics' to be enabled.");

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "metrics")]
use opentelemetry::metrics::{Counter, Histogram, Meter};
#[cfg(feature = "metrics")]
use opentelemetry::{InstrumentationScope, KeyValue};
#[cfg(feature = "metrics")]
use opentelemetry_sdk::{Resource, metrics as sdkmetrics};
#[cfg(feature = "metrics")]
use opentelemetry_semantic_conventions as semvcns;
#[cfg(feature = "metrics")]
use std::sync::OnceLock;

pub struct TelemetryProviders {
    #[cfg(feature = "metrics")]
    pub meter_provider: sdkmetrics::SdkMeterProvider,
}

pub fn init_telemetry() -> anyhow::Result<TelemetryProviders> {
    #[cfg(feature = "metrics")]
    let meter_provider = init_metrics();

    #[cfg(feature = "metrics")]
    {
        let scope = InstrumentationScope::builder("classgroup")
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_schema_url(semvcns::SCHEMA_URL)
            .build();
        opentelemetry::global::set_meter_provider(meter_provider.clone());
        init_metric_handles(opentelemetry::global::meter_with_scope(scope));
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_thread_ids(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true)
                .pretty(),
        )
        .try_init()?;

    Ok(TelemetryProviders {
        #[cfg(feature = "metrics")]
        meter_provider,
    })
}

#[cfg(feature = "metrics")]
fn resource() -> Resource {
    Resource::builder()
        .with_service_name("classgroup")
        .with_schema_url(
            [KeyValue::new(
                semvcns::resource::SERVICE_VERSION,
                env!("CARGO_PKG_VERSION"),
            )],
            semvcns::SCHEMA_URL,
        )
        .build()
}

#[cfg(feature = "metrics")]
fn init_metrics() -> sdkmetrics::SdkMeterProvider {
    let builder = sdkmetrics::SdkMeterProvider::builder().with_resource(resource());

    #[cfg(feature = "stdout")]
    let builder = {
        use opentelemetry_stdout::MetricExporter;
        let exporter = MetricExporter::default();
        let reader = sdkmetrics::PeriodicReader::builder(exporter)
            .with_interval(std::time::Duration::from_secs(5))
            .build();

        builder.with_reader(reader)
    };

    builder.build()
}

#[cfg(feature = "metrics")]
static GROUPINGS: OnceLock<Counter<u64>> = OnceLock::new();
#[cfg(feature = "metrics")]
static NAMES_GROUPED: OnceLock<Counter<u64>> = OnceLock::new();
#[cfg(feature = "metrics")]
static DOCUMENTS_RENDERED: OnceLock<Counter<u64>> = OnceLock::new();
#[cfg(feature = "metrics")]
static DOCUMENT_BYTES: OnceLock<Histogram<u64>> = OnceLock::new();
#[cfg(feature = "metrics")]
static REJECTED_REQUESTS: OnceLock<Counter<u64>> = OnceLock::new();

#[cfg(feature = "metrics")]
fn init_metric_handles(meter: Meter) {
    let _ = GROUPINGS.set(
        meter
            .u64_counter("groupings")
            .with_description("Successful roster groupings")
            .build(),
    );

    let _ = NAMES_GROUPED.set(
        meter
            .u64_counter("names_grouped")
            .with_description("Names placed into groups")
            .build(),
    );

    let _ = DOCUMENTS_RENDERED.set(
        meter
            .u64_counter("documents_rendered")
            .with_description("PDF documents served")
            .build(),
    );

    let _ = DOCUMENT_BYTES.set(
        meter
            .u64_histogram("document_bytes")
            .with_unit("By")
            .with_description("Size of served PDF documents")
            .build(),
    );

    let _ = REJECTED_REQUESTS.set(
        meter
            .u64_counter("rejected_requests")
            .with_description("Requests answered with a client error")
            .build(),
    );
}

#[cfg(feature = "metrics")]
pub fn record_grouping(names: usize) {
    if let Some(counter) = GROUPINGS.get() {
        counter.add(1, &[]);
    }
    if let Some(counter) = NAMES_GROUPED.get() {
        counter.add(names as u64, &[]);
    }
}

#[cfg(not(feature = "metrics"))]
pub fn record_grouping(_names: usize) {}

#[cfg(feature = "metrics")]
pub fn record_document(bytes: usize) {
    if let Some(counter) = DOCUMENTS_RENDERED.get() {
        counter.add(1, &[]);
    }
    if let Some(histogram) = DOCUMENT_BYTES.get() {
        histogram.record(bytes as u64, &[]);
    }
}

#[cfg(not(feature = "metrics"))]
pub fn record_document(_bytes: usize) {}

#[cfg(feature = "metrics")]
pub fn increment_rejected_requests() {
    if let Some(counter) = REJECTED_REQUESTS.get() {
        counter.add(1, &[]);
    }
}

#[cfg(not(feature = "metrics"))]
pub fn increment_rejected_requests() {}

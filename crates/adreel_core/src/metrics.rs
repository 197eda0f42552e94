//! Metrics for the generation pipeline.
//!
//! OpenTelemetry instruments for the text gateway, the planner's storyboard
//! source, clip generation outcomes and remote status polling.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;

static METRICS: OnceLock<PipelineMetrics> = OnceLock::new();

/// Pipeline instruments, labeled by provider and outcome.
#[derive(Clone)]
pub struct PipelineMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Gateway requests answered by the live model
    pub gateway_requests: Counter<u64>,
    /// Gateway requests answered by the canned mock
    pub gateway_fallbacks: Counter<u64>,
    /// Gateway requests that failed
    pub gateway_errors: Counter<u64>,
    /// Gateway call duration in seconds
    pub gateway_duration: Histogram<f64>,
    /// Storyboards produced, by source
    pub storyboards: Counter<u64>,
    /// Clips generated, by provider and outcome
    pub clips: Counter<u64>,
    /// Remote status checks
    pub poll_attempts: Counter<u64>,
}

impl PipelineMetrics {
    fn init() -> Self {
        let meter = global::meter("adreel_pipeline");

        Self {
            _meter: meter.clone(),
            gateway_requests: meter
                .u64_counter("gateway.requests")
                .with_description("Prompt gateway requests served by the live model")
                .build(),
            gateway_fallbacks: meter
                .u64_counter("gateway.fallbacks")
                .with_description("Prompt gateway requests served by the mock")
                .build(),
            gateway_errors: meter
                .u64_counter("gateway.errors")
                .with_description("Failed prompt gateway requests")
                .build(),
            gateway_duration: meter
                .f64_histogram("gateway.duration")
                .with_unit("seconds")
                .with_description("Prompt gateway call duration")
                .build(),
            storyboards: meter
                .u64_counter("planner.storyboards")
                .with_description("Storyboards produced by source")
                .build(),
            clips: meter
                .u64_counter("clips.generated")
                .with_description("Clip generations by provider and outcome")
                .build(),
            poll_attempts: meter
                .u64_counter("clips.poll_attempts")
                .with_description("Remote task status checks")
                .build(),
        }
    }

    /// Get the global pipeline metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a gateway call answered by the model.
    pub fn record_gateway_request(&self, model: &str, duration_secs: f64) {
        let labels = &[KeyValue::new("model", model.to_string())];
        self.gateway_requests.add(1, labels);
        self.gateway_duration.record(duration_secs, labels);
    }

    /// Record a gateway call answered by the mock.
    pub fn record_gateway_fallback(&self, model: &str) {
        self.gateway_fallbacks
            .add(1, &[KeyValue::new("model", model.to_string())]);
    }

    /// Record a failed gateway call.
    pub fn record_gateway_error(&self, model: &str, error_type: &str) {
        let labels = &[
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type.to_string()),
        ];
        self.gateway_errors.add(1, labels);
    }

    /// Record where a storyboard came from.
    pub fn record_storyboard(&self, source: &str, reason: Option<&str>) {
        let labels = &[
            KeyValue::new("source", source.to_string()),
            KeyValue::new("reason", reason.unwrap_or("none").to_string()),
        ];
        self.storyboards.add(1, labels);
    }

    /// Record the outcome of one clip generation.
    pub fn record_clip(&self, provider: &str, outcome: &str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("outcome", outcome.to_string()),
        ];
        self.clips.add(1, labels);
    }

    /// Record one status check against a remote task.
    pub fn record_poll(&self, provider: &str) {
        self.poll_attempts
            .add(1, &[KeyValue::new("provider", provider.to_string())]);
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::get().clone()
    }
}

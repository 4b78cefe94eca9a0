//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::betline::HttpTransport;
use crate::application::pipeline::Pipeline;
use crate::domain::SportCatalog;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Build the HTTP-backed pipeline described by `config`.
///
/// The worker pool is created here, once per process.
pub fn build_pipeline(config: &Config) -> Result<Pipeline> {
    let transport = HttpTransport::from_config(&config.http)?;

    info!(
        locale = %config.catalog.locale,
        workers = config.fan_out.workers,
        order = %config.fan_out.order,
        timeout_ms = config.http.timeout_ms,
        "Pipeline configured"
    );

    Ok(Pipeline::new(
        Arc::new(transport),
        config.endpoints(),
        SportCatalog::new(config.catalog.locale),
        config.fan_out.workers,
        config.fan_out.order,
    ))
}

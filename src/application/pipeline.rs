//! End-to-end run: extract, fan out, render.

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use super::endpoints::Endpoints;
use super::fanout::{FanOut, FanOutReport, ResultOrder};
use super::format::MatchFormatter;
use super::reader::LineReader;
use crate::domain::SportCatalog;
use crate::error::Result;
use crate::port::outbound::Transport;

/// Counts from one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub leagues: usize,
    pub matches: usize,
    pub failures: usize,
}

/// Wires the reader, the coordinator and the formatter together.
pub struct Pipeline {
    reader: LineReader,
    fan_out: FanOut,
    formatter: MatchFormatter,
}

impl Pipeline {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoints: Endpoints,
        catalog: SportCatalog,
        workers: usize,
        order: ResultOrder,
    ) -> Self {
        let reader = LineReader::new(transport, endpoints, catalog);
        let fan_out = FanOut::new(reader.resolver(), workers, order);
        Self {
            reader,
            fan_out,
            formatter: MatchFormatter::new(catalog),
        }
    }

    /// Resolve every top league without rendering.
    ///
    /// # Errors
    ///
    /// Only the bulk sports fetch/decode and extraction can fail the call;
    /// per-league failures are inside the report.
    pub async fn collect(&self) -> Result<FanOutReport> {
        let leagues = self.reader.top_leagues().await?;
        Ok(self.fan_out.resolve_all(leagues).await)
    }

    /// Run once and write one block per resolved match to `out`.
    ///
    /// Nothing is written when the bulk fetch fails.
    pub async fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<RunSummary> {
        let report = self.collect().await?;

        for m in &report.matches {
            out.write_all(self.formatter.format(m).as_bytes())?;
        }
        out.flush()?;

        let summary = RunSummary {
            leagues: report.matches.len() + report.failures.len() + report.aborted.len(),
            matches: report.matches.len(),
            failures: report.failures.len() + report.aborted.len(),
        };
        info!(
            leagues = summary.leagues,
            matches = summary.matches,
            failures = summary.failures,
            "Run complete"
        );

        Ok(summary)
    }
}

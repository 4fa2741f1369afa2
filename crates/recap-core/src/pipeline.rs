//! Two-phase pipeline driver: collect every record, then aggregate once.

use tracing::info;

use crate::aggregate::aggregate;
use crate::models::receipt::{GroupedOutput, ReceiptRecord};
use crate::receipt::{ReceiptParser, RuleBasedParser};

/// Sequential driver over per-document text blobs.
///
/// `ingest` parses one document at a time and appends its record to the
/// accumulator; `finish` consumes the pipeline and runs the single
/// aggregation pass over the complete set. Consuming `self` makes the
/// two-phase contract structural: there is no way to aggregate a partial
/// batch and keep ingesting, and no incremental per-document aggregation.
pub struct ReceiptPipeline<P = RuleBasedParser> {
    parser: P,
    records: Vec<ReceiptRecord>,
}

impl ReceiptPipeline<RuleBasedParser> {
    pub fn new() -> Self {
        Self::with_parser(RuleBasedParser::new())
    }
}

impl Default for ReceiptPipeline<RuleBasedParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ReceiptParser> ReceiptPipeline<P> {
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            records: Vec::new(),
        }
    }

    /// Parse one document's text and accumulate its record.
    pub fn ingest(&mut self, text: &str) {
        self.records.push(self.parser.parse(text));
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records collected so far, in ingestion order.
    pub fn records(&self) -> &[ReceiptRecord] {
        &self.records
    }

    /// Aggregate everything collected into the grouped artifact.
    pub fn finish(self) -> GroupedOutput {
        info!("aggregating {} receipt records", self.records.len());
        aggregate(self.records)
    }
}

/// Run the whole pipeline over an in-memory batch of document texts.
pub fn run_batch<'a, I>(texts: I) -> GroupedOutput
where
    I: IntoIterator<Item = &'a str>,
{
    let mut pipeline = ReceiptPipeline::new();
    for text in texts {
        pipeline.ingest(text);
    }
    pipeline.finish()
}

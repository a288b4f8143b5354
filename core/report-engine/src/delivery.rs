//! FILENAME: core/report-engine/src/delivery.rs
//! Delivery loop - feeds page artifacts to an external sink.
//!
//! The sink is the excluded collaborator boundary: PDF drawing, file
//! writing, object-store upload. A failure on one page is recorded and the
//! remaining pages still go out; partial success is a valid outcome and the
//! report says exactly which pages made it.

use log::warn;

use crate::view::PageArtifact;

/// The external collaborator that turns one page artifact into a finished
/// page (document bytes, an upload, a print job).
pub trait PageSink {
    type Error: std::fmt::Display;

    /// Consumes one page. Called once per page, in page order.
    fn write_page(&mut self, artifact: &PageArtifact) -> Result<(), Self::Error>;
}

/// Which pages succeeded and which failed, by page index.
#[derive(Debug, Clone, Default)]
pub struct DeliveryReport {
    pub delivered: Vec<usize>,
    pub failed: Vec<(usize, String)>,
}

impl DeliveryReport {
    /// True when every page went out.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }
}

/// Drives the sink over all artifacts, never aborting on a per-page
/// failure. The optional progress callback receives the fraction of pages
/// attempted after each one (bookkeeping only; the loop is synchronous).
pub fn deliver_pages<S: PageSink>(
    artifacts: &[PageArtifact],
    sink: &mut S,
    mut progress: Option<&mut dyn FnMut(f64)>,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();
    let total = artifacts.len();

    for (done, artifact) in artifacts.iter().enumerate() {
        let page_no = artifact.page.index;
        match sink.write_page(artifact) {
            Ok(()) => report.delivered.push(page_no),
            Err(e) => {
                warn!("failed to deliver page {}: {}", page_no + 1, e);
                report.failed.push((page_no, e.to_string()));
            }
        }

        if let Some(cb) = progress.as_mut() {
            cb((done + 1) as f64 / total.max(1) as f64);
        }
    }

    report
}

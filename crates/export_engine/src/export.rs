//! Export entry points
//!
//! One blocking async call per export, all-or-nothing: the produced
//! bytes are handed back on success; any failure other than a skipped
//! image aborts with no partial output.

use crate::abnt::AbntExporter;
use crate::plain::PlainExporter;
use crate::{pdf, DocumentPlan, ImageFetcher, Result};
use map_model::{CoverInfo, MindMap};

pub const PLAIN_FILE_NAME: &str = "mapa-mental.pdf";
pub const ABNT_FILE_NAME: &str = "mapa-mental-abnt.pdf";

/// The result of one export run
#[derive(Debug, Clone)]
pub struct ExportOutput {
    /// Suggested download file name
    pub file_name: &'static str,
    /// The finished PDF
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Build the layout plan for the plain variant without painting it.
pub async fn plan_plain(map: &MindMap, fetcher: &ImageFetcher) -> Result<DocumentPlan> {
    PlainExporter::new(fetcher).build(map).await
}

/// Build the layout plan for the ABNT variant without painting it.
pub async fn plan_abnt(
    map: &MindMap,
    cover: &CoverInfo,
    fetcher: &ImageFetcher,
) -> Result<DocumentPlan> {
    AbntExporter::new(fetcher).build(map, cover).await
}

/// Export the map as `mapa-mental.pdf`.
pub async fn export_plain(map: &MindMap) -> Result<ExportOutput> {
    let fetcher = ImageFetcher::new();
    let plan = plan_plain(map, &fetcher).await?;
    let bytes = pdf::paint(&plan, "Mapa Mental")?;
    tracing::info!(
        pages = plan.page_count(),
        nodes = map.node_count(),
        "plain export finished"
    );
    Ok(ExportOutput {
        file_name: PLAIN_FILE_NAME,
        bytes,
        page_count: plan.page_count(),
    })
}

/// Export the map in ABNT format as `mapa-mental-abnt.pdf`.
pub async fn export_abnt(map: &MindMap, cover: &CoverInfo) -> Result<ExportOutput> {
    let fetcher = ImageFetcher::new();
    let plan = plan_abnt(map, cover, &fetcher).await?;
    let bytes = pdf::paint(&plan, &cover.title)?;
    tracing::info!(
        pages = plan.page_count(),
        nodes = map.node_count(),
        sources = map.sources().len(),
        "ABNT export finished"
    );
    Ok(ExportOutput {
        file_name: ABNT_FILE_NAME,
        bytes,
        page_count: plan.page_count(),
    })
}

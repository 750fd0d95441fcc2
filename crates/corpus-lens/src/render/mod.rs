//! Renderers for the visualization data built by `corpus-lens-core`.

pub mod bars;
#[cfg(feature = "sankey")]
pub mod sankey;
pub mod zipf;

#[cfg(not(feature = "sankey"))]
use corpus_lens_core::FlowRenderer;

/// The flow diagram backend compiled into this build.
#[cfg(feature = "sankey")]
pub type FlowBackend = sankey::SankeyRenderer;

/// The flow diagram backend compiled into this build.
#[cfg(not(feature = "sankey"))]
pub type FlowBackend = dyn FlowRenderer<Output = serde_json::Value>;

/// The flow diagram backend, if one was compiled in.
#[cfg(feature = "sankey")]
pub fn flow_backend() -> Option<Box<FlowBackend>> {
    Some(Box::default())
}

/// The flow diagram backend, if one was compiled in.
#[cfg(not(feature = "sankey"))]
pub fn flow_backend() -> Option<Box<FlowBackend>> {
    None
}

/// Wrap a rendered figure for the file it will be written to.
///
/// `.html` files get a standalone page; anything else gets pretty JSON.
#[cfg(feature = "sankey")]
pub fn figure_document(figure: &serde_json::Value, path: &camino::Utf8Path) -> anyhow::Result<String> {
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("html")) {
        return Ok(sankey::to_html(figure, "Text-to-Word Sankey Diagram"));
    }
    Ok(serde_json::to_string_pretty(figure)?)
}

/// Wrap a rendered figure for the file it will be written to.
#[cfg(not(feature = "sankey"))]
pub fn figure_document(figure: &serde_json::Value, _path: &camino::Utf8Path) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(figure)?)
}

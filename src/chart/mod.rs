//! Chart rendering: the flow-band SVG and the panel charts

mod colors;
mod flow;
mod panels;

pub use colors::{MANUSCRIPT, PARCHMENT, THEMES, Theme};
pub use flow::render_flow_svg;
pub use panels::{panel_chart, render_panel};

/// Panel chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Escape text for SVG content and attributes
pub(super) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whether an output path asks for a raster image
pub(super) fn is_png(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

// Carousel rendering: generated slides → one self-contained HTML document,
// used both for live preview and as the rasterization source for export.

pub mod handlers;
pub mod html;
pub mod styles;


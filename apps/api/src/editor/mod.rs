// Slide editor data: the node model behind the canvas editor, the sanitizer
// that keeps nodes inside the canvas, AI-slide → node layout, and the
// in-memory session store.

pub mod handlers;
pub mod layout;
pub mod model;
pub mod sanitize;
pub mod store;

pub use store::SlideStore;

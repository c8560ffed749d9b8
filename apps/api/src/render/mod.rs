// HTML rendering of the CV document.
// Pure functions of (CvData, today); no I/O and no styling.

pub mod escape;
pub mod page;
pub mod sections;

pub use page::render_page;

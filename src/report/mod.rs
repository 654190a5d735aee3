//! Report rendering
//!
//! Turns a finished deployment outcome into terminal text: the full
//! completion report, one-line status summaries, and the text-decoration
//! seam they render through.

pub mod complete;
pub mod format;
pub mod status;
pub mod style;

pub use complete::{substitute_docs_link, CompletionRenderer, DOCS_LINK_PLACEHOLDER};
pub use status::status_line;
pub use style::{AnsiStyle, PlainStyle, TextStyle};

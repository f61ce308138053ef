//! Segmentation of a loosely structured legal document into retrievable units.
//!
//! The input is a best-effort markdown reconstruction of a source PDF, as
//! produced by an upstream extraction step. This crate turns that flat text
//! stream into an ordered sequence of [`Section`] records:
//!
//! - Bold heading lines like `**4.1.** **Trials of the Crown**` update the
//!   current heading context but produce no output of their own.
//! - Numbered lines like `4.1.1. A trial is convened by the Crown.` open a
//!   new section; following plain lines are accumulated into its body until
//!   the next heading or numbered line.
//! - A trailing `Citations:` block, when present, is cut off before scanning.
//!
//! Segmentation is a pure function of the input text: no I/O, no shared
//! state, one forward pass.

mod line;
mod section;
mod segmenter;

pub use line::{LineClassifier, LineKind};
pub use section::Section;
pub use segmenter::segment_document;

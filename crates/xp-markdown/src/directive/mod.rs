//! Generic directive syntax.
//!
//! Directives are recognized line by line before `CommonMark` parsing, so
//! container bodies can hold arbitrary block content. Fenced code is skipped.

mod attrs;
mod fence;
mod syntax;

pub use attrs::parse_attributes;
pub(crate) use fence::FenceState;
pub(crate) use syntax::{
    DirectiveHead, DirectiveLine, InlinePiece, parse_directive_line, split_text_directives,
};

//! Front-end boundary types: source locations and token display names

pub mod span;
pub mod token_kind;

pub use span::{Position, SourceRange};
pub use token_kind::TokenKind;

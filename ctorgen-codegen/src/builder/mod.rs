//! Text assembly for generated units.
//!
//! [`Renderable`] nodes lay themselves out as [`CodeFragment`]s;
//! [`CodeBuilder`] writes those with the configured [`Indent`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};

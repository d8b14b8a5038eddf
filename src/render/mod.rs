//! Presentation adapters.
//!
//! The session only emits effects; adapters here turn them into output.
//! `TextPresenter` draws towers as ASCII and backs the terminal binary.

mod text;

pub use text::TextPresenter;

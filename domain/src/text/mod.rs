//! Plain-text layout helpers

pub mod justify;

pub use justify::{Justify, JustifyError, JustifyLines};

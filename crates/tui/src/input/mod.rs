//! Text input widgets.

pub mod components;

pub use components::{MultiLineInput, SingleLineInput};

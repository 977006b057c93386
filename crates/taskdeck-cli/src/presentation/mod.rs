//! Presentation layer, arranged as presenter → view model → view → renderer:
//!
//! - `presenters` convert domain data into view models (pure, no styling)
//! - `view_models` are serializable raw data; they are the JSON output
//!   contract, so fields stay numbers/strings, never pre-styled text
//! - `views` own layout and color for text output
//! - `formatters` hold the string helpers views share
//! - `renderers` drive the final output, switching between text and JSON

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

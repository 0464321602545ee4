mod components;
mod form;
pub mod theme;
mod widgets;

pub use form::{max_report_scroll, render};

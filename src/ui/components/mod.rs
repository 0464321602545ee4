mod help;
mod popup;

pub use help::render_help_popup;

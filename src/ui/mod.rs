pub mod assistant_panel;
pub mod canvas;
pub mod inspector;
pub mod palette;
pub mod templates;

//! Shape Toy Application
//!
//! Window, input and GPU plumbing around the shape canvas, plus the
//! toolbar and editor panel.

mod app;
mod event_handler;
mod shell;
mod ui;

pub use app::{App, AppConfig};
pub use event_handler::EventHandler;
pub use shell::{EditorState, Shell};
pub use ui::{ShapeEdit, UiAction, apply_edit, render_ui};

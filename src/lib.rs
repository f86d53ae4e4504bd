#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod codec;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod pline;
pub mod renderer;
pub mod selection;
pub mod state;
pub mod tools;
pub mod view;

pub use app::DesignCraftApp;
pub use command::{Command, Editor};
pub use config::EditorConfig;
pub use document::Drawing;
pub use error::{DesignError, DesignResult};
pub use file_handler::{DocManager, PromptChoice, PromptOutcome};
pub use geometry::{Bound, Point};
pub use input::InputEvent;
pub use pline::{Pline, PlineKind};
pub use renderer::{DrawSink, RenderContext};
pub use state::{EditorContext, EditorState};
pub use tools::{Tool, ToolType};
pub use view::ViewTransform;

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod document;
pub mod element;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layer;
pub mod panels;
pub mod persistence;
pub mod renderer;
pub mod tool;

pub use app::PaintApp;
pub use command::{Command, CommandHistory};
pub use document::Document;
pub use error::EditorError;
pub use layer::Layer;
pub use renderer::Renderer;
pub use tool::{Tool, ToolKind};

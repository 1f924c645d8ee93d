#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod clipboard;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod input;
pub mod notification;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod tools;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use clipboard::{ImageClipboard, MemoryClipboard, SystemClipboard};
pub use command::Command;
pub use config::AppConfig;
pub use document::Document;
pub use error::{PaintError, PaintResult};
pub use geometry::{PixelPos, PixelRect};
pub use input::{InputEvent, InputHandler};
pub use notification::{Notification, NotificationKind, Notifications};
pub use renderer::Renderer;
pub use state::{BrushSize, EditorState, Theme, ToolSettings};
pub use stroke::{Shape, StrokeStyle};
pub use tools::{Tool, ToolKind};

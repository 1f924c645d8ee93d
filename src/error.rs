use thiserror::Error;

use crate::clipboard::ClipboardError;
use crate::file_handler::FileError;

/// Errors surfaced by toolbar actions
#[derive(Error, Debug)]
pub enum PaintError {
    /// The canvas is allocated on first paint; nothing exists before that
    #[error("the canvas has not been created yet")]
    CanvasUnavailable,

    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("{0} is not implemented yet")]
    NotImplemented(&'static str),
}

pub type PaintResult<T> = Result<T, PaintError>;

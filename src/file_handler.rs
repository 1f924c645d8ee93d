use std::path::{Path, PathBuf};

use eframe::egui;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::canvas::Canvas;

/// Errors that can occur while reading or writing image files
#[derive(Error, Debug)]
pub enum FileError {
    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        source: image::ImageError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0} has no readable contents")]
    NoData(String),
}

pub type FileResult<T> = Result<T, FileError>;

/// Extensions offered by the insert dialog and accepted from drops without a MIME type
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff"];

/// Encodes the canvas as PNG, whatever extension `path` carries.
pub fn save_png(canvas: &Canvas, path: &Path) -> FileResult<()> {
    canvas
        .buffer()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| FileError::Save {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved {}x{} canvas to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}

/// Decodes any format the `image` crate recognizes.
pub fn load_image(path: &Path) -> FileResult<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_image(&bytes, &path.display().to_string())
}

pub fn decode_image(bytes: &[u8], name: &str) -> FileResult<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|source| FileError::Decode {
        name: name.to_owned(),
        source,
    })?;
    log::debug!("Successfully decoded image: {}x{}", img.width(), img.height());
    Ok(img.to_rgba8())
}

/// Native save dialog. `None` when the user cancels.
pub fn pick_save_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save image")
        .add_filter("PNG Image", &["png"])
        .set_file_name("untitled.png")
        .save_file()
}

/// Native open dialog for images. `None` when the user cancels.
pub fn pick_image_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Insert image")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
}

/// Collects files dropped onto the window and decodes the image ones
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHandler {
    pub fn new() -> Self {
        Self {
            dropped_files: Vec::new(),
        }
    }

    /// Picks up newly dropped files from the UI context.
    /// Returns true if any arrived this frame.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files.extend(i.raw.dropped_files.iter().cloned());
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decodes the queued image files, skipping everything else.
    pub fn process_dropped_files(&mut self) -> Vec<(String, FileResult<RgbaImage>)> {
        std::mem::take(&mut self.dropped_files)
            .into_iter()
            .filter_map(|file| {
                let name = Self::display_name(&file);
                if !Self::is_image_file(&file) {
                    log::warn!("Dropped file is not a supported type: {}", name);
                    return None;
                }
                let result = Self::read_dropped_file(&file, &name);
                Some((name, result))
            })
            .collect()
    }

    fn display_name(file: &egui::DroppedFile) -> String {
        if let Some(path) = &file.path {
            path.display().to_string()
        } else if !file.name.is_empty() {
            file.name.clone()
        } else {
            "unknown".to_owned()
        }
    }

    /// Check if a file is an image based on MIME type or extension
    fn is_image_file(file: &egui::DroppedFile) -> bool {
        if !file.mime.is_empty() {
            return file.mime.starts_with("image/");
        }
        file.path
            .as_ref()
            .and_then(|path| path.extension())
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                IMAGE_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    fn read_dropped_file(file: &egui::DroppedFile, name: &str) -> FileResult<RgbaImage> {
        if let Some(bytes) = &file.bytes {
            log::info!("Processing image from memory: {} ({} bytes)", name, bytes.len());
            decode_image(bytes, name)
        } else if let Some(path) = &file.path {
            log::info!("Processing image from path: {}", path.display());
            load_image(path)
        } else {
            Err(FileError::NoData(name.to_owned()))
        }
    }

    /// Dims the window and lists the files while they hover over it
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop to insert:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

use std::borrow::Cow;

use arboard::ImageData;
use image::RgbaImage;
use log::{debug, info};
use thiserror::Error;

/// Errors that can occur while exchanging images with a clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("the clipboard does not hold an image")]
    Empty,

    #[error("clipboard image is malformed: {width}x{height} with {len} bytes")]
    Malformed { width: usize, height: usize, len: usize },
}

pub type ClipboardResult<T> = Result<T, ClipboardError>;

/// An image-only clipboard. The platform format is tightly packed 8-bit RGBA.
pub trait ImageClipboard {
    fn set_image(&mut self, image: &RgbaImage) -> ClipboardResult<()>;

    fn get_image(&mut self) -> ClipboardResult<RgbaImage>;
}

/// Wraps a buffer in the platform clipboard representation.
pub fn to_image_data(image: &RgbaImage) -> ImageData<'_> {
    ImageData {
        width: image.width() as usize,
        height: image.height() as usize,
        bytes: Cow::Borrowed(image.as_raw()),
    }
}

/// Validates platform image data and copies it into a buffer.
pub fn from_image_data(data: &ImageData<'_>) -> ClipboardResult<RgbaImage> {
    let malformed = || ClipboardError::Malformed {
        width: data.width,
        height: data.height,
        len: data.bytes.len(),
    };
    if data.width == 0 || data.height == 0 {
        return Err(malformed());
    }
    let width = u32::try_from(data.width).map_err(|_| malformed())?;
    let height = u32::try_from(data.height).map_err(|_| malformed())?;
    RgbaImage::from_raw(width, height, data.bytes.to_vec()).ok_or_else(malformed)
}

/// The OS clipboard. A connection is opened per call so a missing clipboard
/// service only fails the action that needed it.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn open() -> ClipboardResult<arboard::Clipboard> {
        arboard::Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
}

impl ImageClipboard for SystemClipboard {
    fn set_image(&mut self, image: &RgbaImage) -> ClipboardResult<()> {
        Self::open()?
            .set_image(to_image_data(image))
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        info!("Copied {}x{} image to clipboard", image.width(), image.height());
        Ok(())
    }

    fn get_image(&mut self) -> ClipboardResult<RgbaImage> {
        let data = Self::open()?.get_image().map_err(|err| match err {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            other => ClipboardError::Unavailable(other.to_string()),
        })?;
        debug!("Read {}x{} image from clipboard", data.width, data.height);
        from_image_data(&data)
    }
}

/// Process-local clipboard holding data in the platform format, used where no
/// OS clipboard exists.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<ImageData<'static>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageClipboard for MemoryClipboard {
    fn set_image(&mut self, image: &RgbaImage) -> ClipboardResult<()> {
        self.contents = Some(to_image_data(image).to_owned_img());
        Ok(())
    }

    fn get_image(&mut self) -> ClipboardResult<RgbaImage> {
        let data = self.contents.as_ref().ok_or(ClipboardError::Empty)?;
        from_image_data(data)
    }
}

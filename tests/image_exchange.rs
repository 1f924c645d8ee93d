use std::borrow::Cow;

use arboard::ImageData;
use egui::Color32;
use image::{ImageFormat, Rgba, RgbaImage};
use modern_paint::clipboard::{ClipboardError, ClipboardResult, ImageClipboard, from_image_data};
use modern_paint::file_handler::FileError;
use modern_paint::geometry::PixelPos;
use modern_paint::{AppConfig, Document, MemoryClipboard, PaintError, ToolKind, ToolSettings};

fn document_with_canvas(config: &AppConfig, width: u32, height: u32) -> Document {
    let mut document = Document::new(config);
    document.ensure_canvas(width, height);
    document
}

/// Raw clipboard contents as another application might have left them
struct ForeignClipboard(ImageData<'static>);

impl ImageClipboard for ForeignClipboard {
    fn set_image(&mut self, _image: &RgbaImage) -> ClipboardResult<()> {
        Ok(())
    }

    fn get_image(&mut self) -> ClipboardResult<RgbaImage> {
        from_image_data(&self.0)
    }
}

fn sketched_document(config: &AppConfig) -> Document {
    let mut document = document_with_canvas(config, 120, 90);
    let mut settings = ToolSettings::default();
    settings.set_color(Color32::from_rgb(200, 30, 60));
    document.pointer_down(PixelPos::new(5, 5), &settings);
    document.pointer_move(PixelPos::new(60, 40));
    document.pointer_up(PixelPos::new(60, 40));

    settings.set_tool(ToolKind::Oval);
    document.pointer_down(PixelPos::new(20, 20), &settings);
    document.pointer_up(PixelPos::new(100, 80));
    document
}

fn snapshot(document: &Document) -> RgbaImage {
    document.canvas().expect("canvas allocated").buffer().clone()
}

fn origin_config() -> AppConfig {
    AppConfig {
        insert_offset: PixelPos::new(0, 0),
        paste_offset: PixelPos::new(0, 0),
        ..AppConfig::default()
    }
}

#[test]
fn test_saved_png_matches_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.png");
    let document = sketched_document(&AppConfig::default());

    document.save(&path).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved, snapshot(&document));
}

#[test]
fn test_cleared_canvas_saves_uniform_background() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");
    let mut document = sketched_document(&AppConfig::default());

    document.clear().unwrap();
    document.save(&path).unwrap();

    let saved = image::open(&path).unwrap().to_rgba8();
    assert_eq!(saved.dimensions(), (120, 90));
    assert!(saved.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
}

#[test]
fn test_save_always_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.jpg");
    let document = sketched_document(&AppConfig::default());

    document.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
}

#[test]
fn test_failed_save_reports_and_keeps_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("drawing.png");
    let document = sketched_document(&AppConfig::default());
    let before = snapshot(&document);

    let result = document.save(&path);

    assert!(matches!(result, Err(PaintError::File(FileError::Save { .. }))));
    assert!(!path.exists());
    assert_eq!(snapshot(&document), before);
}

#[test]
fn test_insert_draws_at_offset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.png");
    RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255])).save(&path).unwrap();
    let mut document = document_with_canvas(&AppConfig::default(), 120, 90);

    document.insert_file(&path).unwrap();

    let canvas = document.canvas().unwrap();
    assert_eq!(canvas.pixel(PixelPos::new(50, 50)), Some(Color32::BLUE));
    assert_eq!(canvas.pixel(PixelPos::new(53, 53)), Some(Color32::BLUE));
    assert_eq!(canvas.pixel(PixelPos::new(54, 54)), Some(Color32::WHITE));
    assert_eq!(canvas.pixel(PixelPos::new(49, 49)), Some(Color32::WHITE));
}

#[test]
fn test_invalid_insert_keeps_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"definitely not a png").unwrap();
    let mut document = sketched_document(&AppConfig::default());
    let before = snapshot(&document);

    assert!(matches!(
        document.insert_file(&garbage),
        Err(PaintError::File(FileError::Decode { .. }))
    ));
    assert!(matches!(
        document.insert_file(&dir.path().join("absent.png")),
        Err(PaintError::File(FileError::Read { .. }))
    ));
    assert_eq!(snapshot(&document), before);
}

#[test]
fn test_copy_then_paste_at_origin_is_identity() {
    let mut document = sketched_document(&origin_config());
    let original = snapshot(&document);
    let mut clipboard = MemoryClipboard::new();

    document.copy_to(&mut clipboard).unwrap();
    document.clear().unwrap();
    document.paste_from(&mut clipboard).unwrap();

    assert_eq!(snapshot(&document), original);
}

#[test]
fn test_paste_lands_at_offset() {
    let source = sketched_document(&AppConfig::default());
    let mut clipboard = MemoryClipboard::new();
    source.copy_to(&mut clipboard).unwrap();

    let mut target = document_with_canvas(&AppConfig::default(), 300, 300);
    target.paste_from(&mut clipboard).unwrap();

    let source_canvas = source.canvas().unwrap();
    let target_canvas = target.canvas().unwrap();
    for (x, y) in [(0, 0), (5, 5), (30, 22), (119, 89)] {
        assert_eq!(
            target_canvas.pixel(PixelPos::new(100 + x, 100 + y)),
            source_canvas.pixel(PixelPos::new(x, y)),
        );
    }
    assert_eq!(target_canvas.pixel(PixelPos::new(99, 99)), Some(Color32::WHITE));
}

#[test]
fn test_empty_clipboard_paste_keeps_canvas() {
    let mut document = sketched_document(&AppConfig::default());
    let before = snapshot(&document);

    let result = document.paste_from(&mut MemoryClipboard::new());

    assert!(matches!(result, Err(PaintError::Clipboard(ClipboardError::Empty))));
    assert_eq!(snapshot(&document), before);
}

#[test]
fn test_malformed_clipboard_paste_keeps_canvas() {
    let mut document = sketched_document(&AppConfig::default());
    let before = snapshot(&document);
    let mut clipboard = ForeignClipboard(ImageData {
        width: 4,
        height: 4,
        bytes: Cow::Owned(vec![0; 10]),
    });

    let result = document.paste_from(&mut clipboard);

    assert!(matches!(
        result,
        Err(PaintError::Clipboard(ClipboardError::Malformed { width: 4, height: 4, len: 10 }))
    ));
    assert_eq!(snapshot(&document), before);
}

use egui::Color32;
use modern_paint::geometry::PixelPos;
use modern_paint::{AppConfig, BrushSize, Canvas, Document, ToolKind, ToolSettings};

fn blank_document() -> Document {
    let mut document = Document::new(&AppConfig::default());
    document.ensure_canvas(80, 60);
    document
}

fn drag(document: &mut Document, settings: &ToolSettings, points: &[(i32, i32)]) {
    let (first, rest) = points.split_first().expect("at least one point");
    document.pointer_down(PixelPos::from(*first), settings);
    for &point in rest {
        document.pointer_move(PixelPos::from(point));
    }
    let last = points.last().copied().unwrap_or(*first);
    document.pointer_up(PixelPos::from(last));
}

// Bounding box of everything that is not background, as (min_x, min_y, max_x, max_y)
fn painted_bounds(canvas: &Canvas) -> Option<(i32, i32, i32, i32)> {
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            if canvas.pixel(PixelPos::new(x, y)) == Some(Color32::WHITE) {
                continue;
            }
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds
}

fn canvas(document: &Document) -> &Canvas {
    document.canvas().expect("canvas allocated")
}

#[test]
fn test_pencil_paints_along_the_drag() {
    let mut document = blank_document();
    let settings = ToolSettings::default();

    drag(&mut document, &settings, &[(10, 10), (20, 10), (30, 10)]);

    let canvas = canvas(&document);
    for x in 9..=30 {
        assert_eq!(canvas.pixel(PixelPos::new(x, 10)), Some(Color32::BLACK), "x = {x}");
    }
    assert_eq!(canvas.pixel(PixelPos::new(20, 12)), Some(Color32::WHITE));
    assert_eq!(painted_bounds(canvas), Some((9, 9, 30, 10)));
}

#[test]
fn test_color_change_only_affects_later_strokes() {
    let mut document = blank_document();
    let mut settings = ToolSettings::default();

    settings.set_color(Color32::RED);
    drag(&mut document, &settings, &[(10, 10), (40, 10)]);

    settings.set_color(Color32::BLUE);
    drag(&mut document, &settings, &[(10, 30), (40, 30)]);

    let canvas = canvas(&document);
    assert_eq!(canvas.pixel(PixelPos::new(25, 10)), Some(Color32::RED));
    assert_eq!(canvas.pixel(PixelPos::new(25, 30)), Some(Color32::BLUE));
}

#[test]
fn test_settings_change_mid_gesture_is_ignored() {
    let mut document = blank_document();
    let mut settings = ToolSettings::default();
    settings.set_color(Color32::RED);

    document.pointer_down(PixelPos::new(10, 10), &settings);
    settings.set_color(Color32::GREEN);
    settings.set_brush_size(BrushSize::Large);
    document.pointer_move(PixelPos::new(40, 10));
    document.pointer_up(PixelPos::new(40, 10));

    let canvas = canvas(&document);
    assert_eq!(canvas.pixel(PixelPos::new(25, 10)), Some(Color32::RED));
    assert_eq!(painted_bounds(canvas), Some((9, 9, 40, 10)));
}

#[test]
fn test_rectangle_commits_only_on_release() {
    let mut document = blank_document();
    let mut settings = ToolSettings::default();
    settings.set_tool(ToolKind::Rectangle);

    document.pointer_down(PixelPos::new(10, 20), &settings);
    document.pointer_move(PixelPos::new(30, 40));
    assert_eq!(painted_bounds(canvas(&document)), None);
    assert!(document.preview().is_some());

    document.pointer_up(PixelPos::new(30, 40));
    assert!(document.preview().is_none());
    // Width 2 stamps lean one pixel towards the min side
    assert_eq!(painted_bounds(canvas(&document)), Some((9, 19, 30, 40)));
    // Hollow
    assert_eq!(canvas(&document).pixel(PixelPos::new(20, 30)), Some(Color32::WHITE));
}

#[test]
fn test_rectangle_ignores_drag_direction() {
    let mut settings = ToolSettings::default();
    settings.set_tool(ToolKind::Rectangle);
    settings.set_brush_size(BrushSize::Medium);

    let mut forward = blank_document();
    drag(&mut forward, &settings, &[(12, 15), (50, 45)]);
    let mut backward = blank_document();
    drag(&mut backward, &settings, &[(50, 45), (12, 15)]);

    assert_eq!(canvas(&forward).buffer(), canvas(&backward).buffer());
    assert_eq!(painted_bounds(canvas(&forward)), Some((10, 13, 52, 47)));
}

#[test]
fn test_line_and_oval_stay_within_their_box() {
    let mut settings = ToolSettings::default();

    settings.set_tool(ToolKind::Line);
    let mut line = blank_document();
    drag(&mut line, &settings, &[(5, 5), (25, 45), (60, 50)]);
    assert_eq!(painted_bounds(canvas(&line)), Some((4, 4, 60, 50)));
    // Intermediate drag points leave no trace
    assert_eq!(canvas(&line).pixel(PixelPos::new(25, 45)), Some(Color32::WHITE));

    settings.set_tool(ToolKind::Oval);
    let mut oval = blank_document();
    drag(&mut oval, &settings, &[(10, 10), (50, 40)]);
    assert_eq!(painted_bounds(canvas(&oval)), Some((9, 9, 50, 40)));
    assert_eq!(canvas(&oval).pixel(PixelPos::new(30, 25)), Some(Color32::WHITE));
}

#[test]
fn test_cancelled_shape_commits_nothing() {
    let mut document = blank_document();
    let mut settings = ToolSettings::default();
    settings.set_tool(ToolKind::Oval);

    document.pointer_down(PixelPos::new(10, 10), &settings);
    document.pointer_move(PixelPos::new(40, 40));
    document.cancel_gesture();
    document.pointer_up(PixelPos::new(40, 40));

    assert_eq!(painted_bounds(canvas(&document)), None);
    assert!(document.preview().is_none());
}

#[test]
fn test_clear_restores_background() {
    let mut document = blank_document();
    drag(&mut document, &ToolSettings::default(), &[(0, 0), (79, 59)]);
    assert!(painted_bounds(canvas(&document)).is_some());

    document.clear().expect("canvas exists");
    assert_eq!(painted_bounds(canvas(&document)), None);
}

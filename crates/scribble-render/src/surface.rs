//! Full-redraw SVG surface.

use crate::color::SerializableColor;
use crate::rough::{RoughDrawable, RoughGenerator, RoughOptions};
use kurbo::{Point, Size};
use peniko::Color;
use scribble_core::{RenderBridge, Shape, ShapeKind};
use std::path::Path;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Paint settings for the surface.
#[derive(Debug, Clone)]
pub struct SurfaceStyle {
    /// Surface size in pixels.
    pub size: Size,
    pub background_color: Color,
    pub stroke_color: Color,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            size: Size::new(1280.0, 800.0),
            background_color: SerializableColor::light_gray().into(),
            stroke_color: SerializableColor::black().into(),
        }
    }
}

impl SurfaceStyle {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the stroke color.
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }
}

/// Render bridge that repaints an SVG document from scratch on every change.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    generator: RoughGenerator,
    style: SurfaceStyle,
    document: String,
    frames: u64,
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(SurfaceStyle::default(), RoughOptions::default())
    }
}

impl SvgSurface {
    /// Create a surface showing only the background.
    pub fn new(style: SurfaceStyle, options: RoughOptions) -> Self {
        let mut surface = Self {
            generator: RoughGenerator::new(options),
            style,
            document: String::new(),
            frames: 0,
        };
        surface.document = surface.paint(&[]);
        surface
    }

    pub fn style(&self) -> &SurfaceStyle {
        &self.style
    }

    pub fn generator(&self) -> &RoughGenerator {
        &self.generator
    }

    /// The current frame as an SVG document.
    pub fn svg(&self) -> &str {
        &self.document
    }

    /// Number of full redraws performed so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Write the current frame to `path`.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        std::fs::write(path.as_ref(), &self.document)?;
        log::info!("Wrote frame {} to {:?}", self.frames, path.as_ref());
        Ok(())
    }

    fn paint(&self, shapes: &[Shape<RoughDrawable>]) -> String {
        let Size { width, height } = self.style.size;
        let (background, background_opacity) =
            SerializableColor::from(self.style.background_color).to_svg_rgb();
        let (stroke, stroke_opacity) = SerializableColor::from(self.style.stroke_color).to_svg_rgb();

        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.3} {:.3}" width="{:.3}" height="{:.3}">"#,
            width, height, width, height
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}" fill-opacity="{:.3}"/>"#,
            background, background_opacity
        ));
        out.push('\n');

        for shape in shapes {
            let drawable = shape.descriptor();
            out.push_str(&format!(
                r#"<g id="shape-{}" data-kind="{}" stroke="{}" stroke-opacity="{:.3}" stroke-width="{:.3}" stroke-linecap="round" fill="none">"#,
                shape.id(),
                drawable.kind.name(),
                stroke,
                stroke_opacity,
                drawable.stroke_width
            ));
            out.push('\n');
            for data in drawable.svg_paths() {
                out.push_str(&format!(r#"<path d="{}"/>"#, data));
                out.push('\n');
            }
            out.push_str("</g>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

impl RenderBridge for SvgSurface {
    type Descriptor = RoughDrawable;

    fn make_descriptor(&self, kind: ShapeKind, start: Point, end: Point) -> RoughDrawable {
        self.generator.drawable(kind, start, end)
    }

    fn render_all(&mut self, shapes: &[Shape<RoughDrawable>]) {
        self.document = self.paint(shapes);
        self.frames += 1;
        log::trace!("Painted frame {} with {} shapes", self.frames, shapes.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scribble_core::{InteractionController, InteractionSession, PointerEvent, ToolKind};

    #[test]
    fn test_empty_surface() {
        let surface = SvgSurface::default();
        assert_eq!(surface.frame_count(), 0);
        assert!(surface.svg().starts_with("<svg"));
        assert!(surface.svg().contains(r#"fill="rgb(211,211,211)" fill-opacity="1.000""#));
        assert!(!surface.svg().contains("<path"));
    }

    #[test]
    fn test_redraw_replaces_whole_document() {
        let mut controller = InteractionController::new(SvgSurface::default());
        let mut session = InteractionSession::new(ToolKind::Rectangle);

        controller.handle_event(&mut session, PointerEvent::down(10.0, 10.0));
        controller.handle_event(&mut session, PointerEvent::moved(60.0, 40.0));
        controller.handle_event(&mut session, PointerEvent::up(60.0, 40.0));

        let svg = controller.bridge().svg();
        assert_eq!(controller.bridge().frame_count(), 2);
        assert_eq!(svg.matches("<g id=").count(), 1);
        assert!(svg.contains(r#"id="shape-0" data-kind="rectangle""#));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_moved_shape_descriptor_matches_fresh_one() {
        let mut controller = InteractionController::new(SvgSurface::default());
        let mut session = InteractionSession::new(ToolKind::Line);
        controller.handle_event(&mut session, PointerEvent::down(0.0, 0.0));
        controller.handle_event(&mut session, PointerEvent::moved(40.0, 0.0));
        controller.handle_event(&mut session, PointerEvent::up(40.0, 0.0));

        session.set_tool(ToolKind::Selection);
        controller.handle_event(&mut session, PointerEvent::down(20.0, 0.0));
        controller.handle_event(&mut session, PointerEvent::moved(20.0, 30.0));
        controller.handle_event(&mut session, PointerEvent::up(20.0, 30.0));

        let shape = &controller.shapes()[0];
        let expected = controller
            .bridge()
            .make_descriptor(ShapeKind::Line, Point::new(0.0, 30.0), Point::new(40.0, 30.0));
        assert_eq!(shape.descriptor(), &expected);
    }

    #[test]
    fn test_custom_colors() {
        let style = SurfaceStyle::new(Size::new(100.0, 50.0))
            .with_background(Color::from_rgba8(255, 255, 255, 255))
            .with_stroke(Color::from_rgba8(255, 0, 0, 255));
        let mut surface = SvgSurface::new(style, RoughOptions::default());
        let shape = scribble_core::create_shape(
            0,
            Point::new(1.0, 1.0),
            Point::new(9.0, 9.0),
            ShapeKind::Circle,
            &surface,
        );
        surface.render_all(&[shape]);

        assert!(surface.svg().contains(r#"width="100.000" height="50.000""#));
        assert!(surface.svg().contains(r#"fill="rgb(255,255,255)""#));
        assert!(surface.svg().contains(r#"stroke="rgb(255,0,0)" stroke-opacity="1.000""#));
    }

    #[test]
    fn test_write_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.svg");
        let surface = SvgSurface::default();

        surface.write_svg(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, surface.svg());
    }

    #[test]
    fn test_write_svg_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.svg");
        let err = SvgSurface::default().write_svg(&path).unwrap_err();
        assert!(matches!(err, RendererError::Io(_)));
    }
}

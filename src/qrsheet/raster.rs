use crate::error::{QrSheetError, Result};
use resvg::{tiny_skia, usvg};
use std::path::Path;

/// SVG to PNG conversion. Holds the usvg options so the system font
/// scan (needed for the label text) happens once per run, not per file.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl Rasterizer {
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }

    /// Render an SVG string into a pixmap of the given dimensions,
    /// scaling the document's viewBox to fill them.
    pub fn render(&self, svg: &str, width: u32, height: u32) -> Result<tiny_skia::Pixmap> {
        let tree = usvg::Tree::from_str(svg, &self.options)?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            QrSheetError::Png(format!("invalid raster dimensions {}x{}", width, height))
        })?;

        let sx = width as f32 / tree.size().width();
        let sy = height as f32 / tree.size().height();
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap)
    }

    pub fn render_to_file(&self, svg: &str, width: u32, height: u32, path: &Path) -> Result<()> {
        let pixmap = self.render(svg, width, height)?;
        pixmap
            .save_png(path)
            .map_err(|e| QrSheetError::Png(e.to_string()))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SQUARE: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         width=\"10\" height=\"10\" viewBox=\"0 0 10 10\">\
         <rect width=\"10\" height=\"10\" fill=\"red\"/></svg>";

    #[test]
    fn test_render_dimensions() {
        let rasterizer = Rasterizer::new();
        let pixmap = rasterizer.render(RED_SQUARE, 40, 40).unwrap();
        assert_eq!(pixmap.width(), 40);
        assert_eq!(pixmap.height(), 40);
    }

    #[test]
    fn test_render_fills_canvas() {
        let rasterizer = Rasterizer::new();
        let pixmap = rasterizer.render(RED_SQUARE, 8, 8).unwrap();
        let pixel = pixmap.pixel(4, 4).unwrap();
        assert_eq!(pixel.red(), 255);
        assert_eq!(pixel.green(), 0);
    }

    #[test]
    fn test_malformed_svg_is_an_error() {
        let rasterizer = Rasterizer::new();
        assert!(rasterizer.render("not an svg at all", 10, 10).is_err());
    }

    #[test]
    fn test_rasterized_symbol_decodes_to_its_label() {
        let rasterizer = Rasterizer::new();

        for label in ["P0001", "P0301", "P0480"] {
            let svg = crate::svg::build_qr_svg(label, 400, 300).unwrap();
            let pixmap = rasterizer.render(&svg, 400, 400).unwrap();

            let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(400, 400, |x, y| {
                pixmap
                    .pixel(x as u32, y as u32)
                    .map(|p| p.red())
                    .unwrap_or(255)
            });
            let grids = prepared.detect_grids();
            assert_eq!(grids.len(), 1, "expected one symbol for {}", label);

            let (_meta, content) = grids[0].decode().unwrap();
            assert_eq!(content, label);
        }
    }

    #[test]
    fn test_qr_svg_renders_dark_and_light() {
        let svg = crate::svg::build_qr_svg("P0007", 400, 300).unwrap();
        let rasterizer = Rasterizer::new();
        let pixmap = rasterizer.render(&svg, 400, 400).unwrap();

        // Background corner stays white; the symbol area has dark modules.
        let corner = pixmap.pixel(2, 2).unwrap();
        assert_eq!(corner.red(), 255);
        assert_eq!(corner.blue(), 255);

        let has_dark = (50..350).any(|x| {
            let p = pixmap.pixel(x, 200).unwrap();
            p.red() < 32
        });
        assert!(has_dark);
    }
}

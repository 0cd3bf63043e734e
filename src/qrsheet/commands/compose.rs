use crate::error::{QrSheetError, Result};
use crate::layout::GridLayout;
use printpdf::image_crate::DynamicImage;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
pub struct PdfSummary {
    pub pages: usize,
    pub images: usize,
}

/// Lay the PNGs out on A4 pages in cell order and write a single PDF.
/// Pages are added as each one fills; images are flattened to RGB
/// before embedding.
pub fn run(pngs: &[PathBuf], layout: &GridLayout, pdf_path: &Path) -> Result<PdfSummary> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "QR Codes",
        Mm(layout.page_width_mm),
        Mm(layout.page_height_mm),
        "Layer 1",
    );
    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    let capacity = layout.capacity();
    let mut pages = 1;

    for (i, png_path) in pngs.iter().enumerate() {
        let cell = i % capacity;
        if i > 0 && cell == 0 {
            let (page, page_layer) = doc.add_page(
                Mm(layout.page_width_mm),
                Mm(layout.page_height_mm),
                "Layer 1",
            );
            layer = doc.get_page(page).get_layer(page_layer);
            pages += 1;
        }

        // Decode through printpdf's bundled image crate so the pixel
        // types match the embedder.
        let decoded = printpdf::image_crate::open(png_path)?;
        let rgb = DynamicImage::ImageRgb8(decoded.to_rgb8());
        let image = Image::from_dynamic_image(&rgb);

        let (x, y) = layout.position(cell);
        image.add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x)),
                translate_y: Some(Mm(y)),
                dpi: Some(layout.dpi),
                ..Default::default()
            },
        );
    }

    let file = File::create(pdf_path).map_err(QrSheetError::Io)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| QrSheetError::Pdf(e.to_string()))?;

    Ok(PdfSummary {
        pages,
        images: pngs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SheetConfig;
    use resvg::tiny_skia::Pixmap;
    use std::fs;

    fn white_png(path: &Path, size: u32) {
        let mut pixmap = Pixmap::new(size, size).unwrap();
        pixmap.fill(resvg::tiny_skia::Color::WHITE);
        pixmap.save_png(path).unwrap();
    }

    fn small_layout() -> GridLayout {
        let mut config = SheetConfig::default();
        config.columns = 2;
        config.rows = 1;
        GridLayout::from_config(&config)
    }

    #[test]
    fn test_single_page() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("P0001.png");
        white_png(&png, 40);

        let pdf_path = dir.path().join("out.pdf");
        let summary = run(&[png], &small_layout(), &pdf_path).unwrap();

        assert_eq!(summary.pages, 1);
        assert_eq!(summary.images, 1);
        let bytes = fs::read(&pdf_path).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_paginates_when_grid_fills() {
        let dir = tempfile::tempdir().unwrap();
        let mut pngs = Vec::new();
        for i in 0..3 {
            let path = dir.path().join(format!("P000{}.png", i));
            white_png(&path, 40);
            pngs.push(path);
        }

        // Capacity two, three images: two pages.
        let pdf_path = dir.path().join("out.pdf");
        let summary = run(&pngs, &small_layout(), &pdf_path).unwrap();

        assert_eq!(summary.pages, 2);
        assert_eq!(summary.images, 3);
    }

    #[test]
    fn test_unreadable_png_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.png");
        fs::write(&bogus, b"not a png").unwrap();

        let pdf_path = dir.path().join("out.pdf");
        assert!(run(&[bogus], &small_layout(), &pdf_path).is_err());
    }
}

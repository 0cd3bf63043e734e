use crate::error::{QrSheetError, Result};
use crate::model::Code;
use crate::raster::Rasterizer;
use std::fs;
use std::path::{Path, PathBuf};

/// Convert each generated SVG to a PNG of `size` x `size` px in
/// `png_dir`, preserving identifier order.
pub fn run(svgs: &[(Code, PathBuf)], png_dir: &Path, size: u32) -> Result<Vec<PathBuf>> {
    if !png_dir.exists() {
        fs::create_dir_all(png_dir).map_err(QrSheetError::Io)?;
    }

    let rasterizer = Rasterizer::new();
    let mut pngs = Vec::with_capacity(svgs.len());
    for (code, svg_path) in svgs {
        let svg = fs::read_to_string(svg_path).map_err(QrSheetError::Io)?;
        let png_path = png_dir.join(format!("{}.png", code));
        rasterizer.render_to_file(&svg, size, size, &png_path)?;
        pngs.push(png_path);
    }
    Ok(pngs)
}

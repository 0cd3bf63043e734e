use crate::error::Result;
use qrcode::{Color, EcLevel, QrCode};

/// Modules of light quiet zone kept inside the symbol's box. The label
/// baseline sits on the box's bottom edge, so the zone also keeps the
/// text clear of the dark modules.
const QUIET_ZONE: usize = 4;

/// Compose the SVG for one label: the QR symbol scaled to `qr_size` px
/// and centered on a white `size` px square, with the label text sitting
/// under the symbol's bottom edge. Symbols are encoded at
/// error-correction level M.
pub fn build_qr_svg(label: &str, size: u32, qr_size: u32) -> Result<String> {
    let code = QrCode::with_error_correction_level(label, EcLevel::M)?;
    let modules = code.width();
    let colors = code.to_colors();

    let offset = (size - qr_size) / 2;
    let scale = qr_size as f64 / (modules + 2 * QUIET_ZONE) as f64;
    let label_font_size = size / 10;
    let label_y = offset + qr_size;

    // One path, one unit square per dark module; the <g> scales it up.
    let mut path = String::new();
    for y in 0..modules {
        for x in 0..modules {
            if colors[y * modules + x] == Color::Dark {
                path.push_str(&format!("M{},{}h1v1h-1z ", x + QUIET_ZONE, y + QUIET_ZONE));
            }
        }
    }

    Ok(format!(
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n",
            "  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n",
            "  <g transform=\"translate({offset},{offset}) scale({scale})\">\n",
            "    <path d=\"{path}\" fill=\"black\"/>\n",
            "  </g>\n",
            "  <text x=\"{center}\" y=\"{label_y}\" font-size=\"{font_size}\" font-family=\"Helvetica, Arial, sans-serif\" text-anchor=\"middle\" fill=\"black\">{label}</text>\n",
            "</svg>\n",
        ),
        size = size,
        offset = offset,
        scale = scale,
        path = path.trim_end(),
        center = size / 2,
        label_y = label_y,
        font_size = label_font_size,
        label = label,
    ))
}

use crate::error::{QrSheetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "qrsheet.json";

/// Run defaults, optionally overridden by a qrsheet.json in the working
/// directory. The built-in values mirror the sheets this tool was first
/// used for: P0301..P0480 at 400px, five columns by six rows on A4.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetConfig {
    /// Grid columns per PDF page
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Grid rows per PDF page
    #[serde(default = "default_rows")]
    pub rows: u32,

    /// Edge of the square SVG/PNG canvas, in pixels
    #[serde(default = "default_image_size")]
    pub image_size: u32,

    /// Edge of the QR symbol inside the canvas, in pixels
    #[serde(default = "default_qr_size")]
    pub qr_size: u32,

    /// Resolution the PNGs are placed at on the page
    #[serde(default = "default_dpi")]
    pub dpi: f32,

    /// Range used when no arguments are given
    #[serde(default = "default_start")]
    pub default_start: u32,

    #[serde(default = "default_end")]
    pub default_end: u32,

    /// Output locations, relative to the working directory
    #[serde(default = "default_svg_dir")]
    pub svg_dir: String,

    #[serde(default = "default_png_dir")]
    pub png_dir: String,

    #[serde(default = "default_pdf_file")]
    pub pdf_file: String,
}

fn default_columns() -> u32 {
    5
}

fn default_rows() -> u32 {
    6
}

fn default_image_size() -> u32 {
    400
}

fn default_qr_size() -> u32 {
    300
}

fn default_dpi() -> f32 {
    300.0
}

fn default_start() -> u32 {
    301
}

fn default_end() -> u32 {
    480
}

fn default_svg_dir() -> String {
    "qr_svgs".to_string()
}

fn default_png_dir() -> String {
    "qr_pngs".to_string()
}

fn default_pdf_file() -> String {
    "qr_codes.pdf".to_string()
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            image_size: default_image_size(),
            qr_size: default_qr_size(),
            dpi: default_dpi(),
            default_start: default_start(),
            default_end: default_end(),
            svg_dir: default_svg_dir(),
            png_dir: default_png_dir(),
            pdf_file: default_pdf_file(),
        }
    }
}

impl SheetConfig {
    /// Load config from the given file, or return defaults if not found.
    /// This is the lookup for the implicit working-directory config; an
    /// explicitly named file goes through [`Self::load_required`].
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_required(config_path)
    }

    /// Load config from the given file; a missing file is an error
    pub fn load_required<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let content = fs::read_to_string(config_path.as_ref()).map_err(QrSheetError::Io)?;
        let config: SheetConfig =
            serde_json::from_str(&content).map_err(QrSheetError::Config)?;
        Ok(config)
    }

    /// Save config to the given file
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(QrSheetError::Config)?;
        fs::write(config_path, content).map_err(QrSheetError::Io)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 || self.rows == 0 {
            return Err(QrSheetError::InvalidConfig(
                "grid must have at least one column and one row".to_string(),
            ));
        }
        if self.qr_size > self.image_size {
            return Err(QrSheetError::InvalidConfig(format!(
                "qr_size ({}) must fit inside image_size ({})",
                self.qr_size, self.image_size
            )));
        }
        if self.dpi <= 0.0 {
            return Err(QrSheetError::InvalidConfig(
                "dpi must be positive".to_string(),
            ));
        }
        let layout = crate::layout::GridLayout::from_config(self);
        if !layout.fits_page() {
            return Err(QrSheetError::InvalidConfig(format!(
                "a {}x{} grid of {:.1} mm cells does not fit on A4",
                self.columns,
                self.rows,
                layout.cell_mm()
            )));
        }
        if self.default_start > self.default_end {
            return Err(QrSheetError::InvalidConfig(format!(
                "default range is inverted ({}..{})",
                self.default_start, self.default_end
            )));
        }
        Ok(())
    }
}

use crate::config::SheetConfig;

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;
const MM_PER_INCH: f32 = 25.4;

/// Geometry of one PDF page: a fixed columns x rows grid of square
/// image cells on A4, with the leftover space split into even gutters
/// (columns + 1 horizontal, rows + 1 vertical).
///
/// Cells are filled row-major from the top-left; positions are reported
/// as the bottom-left corner of the cell in millimetres, because the
/// PDF y-axis grows upward from the bottom of the page.
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub cell_px: u32,
    pub dpi: f32,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
}

impl GridLayout {
    pub fn from_config(config: &SheetConfig) -> Self {
        Self {
            columns: config.columns,
            rows: config.rows,
            cell_px: config.image_size,
            dpi: config.dpi,
            page_width_mm: A4_WIDTH_MM,
            page_height_mm: A4_HEIGHT_MM,
        }
    }

    /// Edge of one cell in millimetres at the configured dpi.
    pub fn cell_mm(&self) -> f32 {
        self.cell_px as f32 * MM_PER_INCH / self.dpi
    }

    pub fn capacity(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Whether the cells physically fit on the page. When they don't,
    /// the gutters go negative and `position` leaves the page.
    pub fn fits_page(&self) -> bool {
        self.columns as f32 * self.cell_mm() <= self.page_width_mm
            && self.rows as f32 * self.cell_mm() <= self.page_height_mm
    }

    pub fn page_count(&self, images: usize) -> usize {
        images.div_ceil(self.capacity())
    }

    fn h_gutter(&self) -> f32 {
        (self.page_width_mm - self.columns as f32 * self.cell_mm()) / (self.columns + 1) as f32
    }

    fn v_gutter(&self) -> f32 {
        (self.page_height_mm - self.rows as f32 * self.cell_mm()) / (self.rows + 1) as f32
    }

    /// Bottom-left corner (x, y) in mm of the cell at `index` on a page.
    /// `index` must be below `capacity()`.
    pub fn position(&self, index: usize) -> (f32, f32) {
        debug_assert!(index < self.capacity());
        let col = (index as u32 % self.columns) as f32;
        let row = (index as u32 / self.columns) as f32;

        let cell = self.cell_mm();
        let x = self.h_gutter() + col * (cell + self.h_gutter());
        let top = self.v_gutter() + row * (cell + self.v_gutter());
        let y = self.page_height_mm - top - cell;
        (x, y)
    }
}

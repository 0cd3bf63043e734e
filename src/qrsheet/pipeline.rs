use crate::commands::compose::PdfSummary;
use crate::commands::{compose, generate, rasterize, CmdMessage};
use crate::config::SheetConfig;
use crate::error::Result;
use crate::layout::GridLayout;
use crate::model::CodeRange;
use std::path::{Path, PathBuf};

/// Outcome of a full generate → rasterize → compose run. The messages
/// are for the caller to display; nothing in here touches the terminal.
#[derive(Debug)]
pub struct RunSummary {
    pub range: CodeRange,
    pub svg_count: usize,
    pub png_count: usize,
    pub pdf: PdfSummary,
    pub pdf_path: PathBuf,
    pub messages: Vec<CmdMessage>,
}

/// Run the whole pipeline for `range`, with all outputs under
/// `base_dir`. Each stage finishes before the next starts; the first
/// failure aborts the run.
pub fn run(range: CodeRange, config: &SheetConfig, base_dir: &Path) -> Result<RunSummary> {
    let svg_dir = base_dir.join(&config.svg_dir);
    let png_dir = base_dir.join(&config.png_dir);
    let pdf_path = base_dir.join(&config.pdf_file);

    let mut messages = Vec::new();

    let svgs = generate::run(&range, config, &svg_dir)?;
    messages.push(CmdMessage::info(format!(
        "Wrote {} SVG files to {}",
        svgs.len(),
        config.svg_dir
    )));

    let pngs = rasterize::run(&svgs, &png_dir, config.image_size)?;
    messages.push(CmdMessage::info(format!(
        "Rasterized {} PNG files to {}",
        pngs.len(),
        config.png_dir
    )));

    let layout = GridLayout::from_config(config);
    let pdf = compose::run(&pngs, &layout, &pdf_path)?;
    messages.push(CmdMessage::success(format!(
        "Created {} with {} page(s), {} QR codes ({})",
        config.pdf_file,
        pdf.pages,
        pdf.images,
        range,
    )));

    Ok(RunSummary {
        range,
        svg_count: svgs.len(),
        png_count: pngs.len(),
        pdf,
        pdf_path,
        messages,
    })
}

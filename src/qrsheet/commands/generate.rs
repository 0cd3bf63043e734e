use crate::config::SheetConfig;
use crate::error::{QrSheetError, Result};
use crate::model::{Code, CodeRange};
use crate::svg::build_qr_svg;
use std::fs;
use std::path::{Path, PathBuf};

/// Write one SVG per code into `svg_dir`, creating the directory first.
/// Returns the (code, path) pairs in identifier order. Existing files
/// for the same codes are overwritten.
pub fn run(
    range: &CodeRange,
    config: &SheetConfig,
    svg_dir: &Path,
) -> Result<Vec<(Code, PathBuf)>> {
    if !svg_dir.exists() {
        fs::create_dir_all(svg_dir).map_err(QrSheetError::Io)?;
    }

    let mut written = Vec::with_capacity(range.len());
    for code in range.codes() {
        let svg = build_qr_svg(&code.label(), config.image_size, config.qr_size)?;
        let path = svg_dir.join(format!("{}.svg", code));
        fs::write(&path, svg).map_err(QrSheetError::Io)?;
        written.push((code, path));
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_file_per_code() {
        let dir = tempfile::tempdir().unwrap();
        let svg_dir = dir.path().join("qr_svgs");
        let range = CodeRange::new(1, 5).unwrap();

        let written = run(&range, &SheetConfig::default(), &svg_dir).unwrap();

        assert_eq!(written.len(), 5);
        assert_eq!(svg_dir.read_dir().unwrap().count(), 5);
        assert!(svg_dir.join("P0001.svg").exists());
        assert!(svg_dir.join("P0005.svg").exists());
    }

    #[test]
    fn test_files_contain_their_label() {
        let dir = tempfile::tempdir().unwrap();
        let svg_dir = dir.path().join("qr_svgs");
        let range = CodeRange::new(42, 42).unwrap();

        run(&range, &SheetConfig::default(), &svg_dir).unwrap();

        let content = fs::read_to_string(svg_dir.join("P0042.svg")).unwrap();
        assert!(content.contains(">P0042</text>"));
    }

    #[test]
    fn test_rerun_overwrites_deterministically() {
        let dir = tempfile::tempdir().unwrap();
        let svg_dir = dir.path().join("qr_svgs");
        let range = CodeRange::new(7, 9).unwrap();
        let config = SheetConfig::default();

        run(&range, &config, &svg_dir).unwrap();
        let first = fs::read(svg_dir.join("P0008.svg")).unwrap();

        run(&range, &config, &svg_dir).unwrap();
        let second = fs::read(svg_dir.join("P0008.svg")).unwrap();

        assert_eq!(first, second);
        assert_eq!(svg_dir.read_dir().unwrap().count(), 3);
    }
}

//! # Qrsheet Architecture
//!
//! Qrsheet turns a range of participant numbers into printable QR code
//! sheets. It is a **linear batch pipeline**: every stage finishes
//! completely before the next one starts, and the first failure aborts
//! the run with a non-zero exit.
//!
//! ```text
//! range ──► generate ──► rasterize ──► compose
//!           (qr_svgs/)   (qr_pngs/)   (qr_codes.pdf)
//! ```
//!
//! ## Layering
//!
//! - The binary (`main.rs` + `args.rs`) owns the terminal: argument
//!   parsing, colored status output, exit codes. Nothing below it
//!   writes to stdout/stderr or calls `std::process::exit`.
//! - [`pipeline`] orchestrates the three stages against a base
//!   directory and returns a structured [`pipeline::RunSummary`] with
//!   display messages, so the same core could back any other frontend.
//! - [`commands`] holds one module per stage. Each takes plain Rust
//!   values, does its file I/O, and returns `Result`.
//! - [`svg`], [`raster`], and [`layout`] are the mechanisms the stages
//!   delegate to: QR/SVG composition, SVG→PNG conversion, and the pure
//!   page-grid geometry.
//!
//! ## Module Overview
//!
//! - [`model`]: `Code` labels ("P0042") and validated `CodeRange`s
//! - [`config`]: run defaults, optionally overridden by `qrsheet.json`
//! - [`svg`]: per-label SVG composition (QR symbol + printed label)
//! - [`raster`]: SVG rasterization via resvg
//! - [`layout`]: A4 grid geometry and pagination math
//! - [`commands`]: the generate / rasterize / compose stages
//! - [`pipeline`]: end-to-end orchestration
//! - [`error`]: error types

pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod raster;
pub mod svg;

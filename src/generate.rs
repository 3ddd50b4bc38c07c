//! Site generation.
//!
//! Renders the portfolio page and writes the deployable output directory.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # The whole page: markup, inline CSS, inline runtime
//! └── Resume.pdf        # ...and anything else from site/assets/, verbatim
//! ```
//!
//! The page is always rendered in the dark theme: that is the state every
//! fresh load starts in, and the in-page runtime handles toggling from there.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::render;
use crate::theme::Theme;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),
}

/// What a build wrote, for reporting.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Written page, relative to the output directory.
    pub page: PathBuf,
    /// Size of the page in bytes.
    pub page_bytes: usize,
    /// Copied assets, relative to the output directory, in walk order.
    pub assets: Vec<PathBuf>,
    /// Assets directory that was looked for, when it does not exist.
    pub missing_assets_dir: Option<PathBuf>,
    /// Assets skipped because the rendered page owns their output path.
    pub shadowed_assets: Vec<PathBuf>,
}

/// Render the page and write it, plus copied assets, into `output_dir`.
///
/// `site_dir` is where `config.assets_dir` is resolved from.
pub fn generate(
    catalog: &Catalog,
    config: &SiteConfig,
    site_dir: &Path,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let html = render::render(Theme::default(), catalog, config).into_string();
    let page = PathBuf::from("index.html");
    fs::write(output_dir.join(&page), &html)?;
    log::debug!("wrote {} ({} bytes)", output_dir.join(&page).display(), html.len());

    let mut report = BuildReport {
        page,
        page_bytes: html.len(),
        ..BuildReport::default()
    };

    let assets_dir = site_dir.join(&config.assets_dir);
    if assets_dir.is_dir() {
        copy_assets(&assets_dir, output_dir, &mut report)?;
    } else {
        report.missing_assets_dir = Some(assets_dir);
    }

    Ok(report)
}

/// Copy everything under `src` into `dst`, preserving relative paths.
///
/// An asset at the page's own path is never copied; it lands in
/// `report.shadowed_assets` instead.
fn copy_assets(src: &Path, dst: &Path, report: &mut BuildReport) -> Result<(), GenerateError> {
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if rel == report.page {
            log::warn!("asset {} would replace the rendered page, skipping", rel.display());
            report.shadowed_assets.push(rel.to_path_buf());
        } else {
            fs::copy(entry.path(), &target)?;
            log::debug!("copied asset {}", rel.display());
            report.assets.push(rel.to_path_buf());
        }
    }
    Ok(())
}

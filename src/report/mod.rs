//! Result writer: serializes accepted results to a CSV report.
//!
//! One file per run, timestamped, fixed column order
//! `product_term, title, price, site, source_url`. An empty run still
//! produces a header-only file so "no matches" is documented on disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{AppError, Result};
use crate::models::AcceptedResult;

/// Column order of the report file.
pub const HEADER: [&str; 5] = ["product_term", "title", "price", "site", "source_url"];

/// Write the accepted results to a timestamped CSV under `output_dir`.
///
/// Creates the directory if needed. Returns the path of the written file.
/// Any failure maps to a fatal write error.
pub fn write_report(output_dir: &Path, results: &[AcceptedResult]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .map_err(|e| AppError::write(output_dir.display().to_string(), e))?;

    let file_name = format!("results_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
    let path = output_dir.join(file_name);
    write_report_to(&path, results)?;
    Ok(path)
}

/// Write the report to an exact path.
pub fn write_report_to(path: &Path, results: &[AcceptedResult]) -> Result<PathBuf> {
    let to_write_error = |e: csv::Error| AppError::write(path.display().to_string(), e);

    let mut writer = csv::Writer::from_path(path).map_err(to_write_error)?;
    writer.write_record(HEADER).map_err(to_write_error)?;

    for result in results {
        writer
            .write_record([
                result.product_term.as_str(),
                result.title.as_str(),
                &format!("{:.2}", result.price),
                result.site.as_str(),
                result.source_url.as_str(),
            ])
            .map_err(to_write_error)?;
    }

    writer
        .flush()
        .map_err(|e| AppError::write(path.display().to_string(), e))?;
    Ok(path.to_path_buf())
}

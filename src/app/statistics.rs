//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
use crate::ScanReport;

/// Logs a one-line run summary followed by non-zero category counts.
///
/// Everything goes through `log::info!`, so nothing reaches standard output
/// and the output stays a clean list of candidate URLs.
pub fn log_run_statistics(report: &ScanReport, stats: &ProcessingStats) {
    info!(
        "Processed {} URL{} ({} fetched, {} failed), {} candidate URL{} in {:.1}s",
        report.total_urls,
        if report.total_urls == 1 { "" } else { "s" },
        report.fetched,
        report.failed,
        report.candidates,
        if report.candidates == 1 { "" } else { "s" },
        report.elapsed_seconds
    );

    let total_errors = stats.total_errors();
    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    let total_info = stats.total_info();
    if total_info > 0 {
        info!("Info Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type.as_str(), count);
            }
        }
    }
}

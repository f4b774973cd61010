use crate::output::CrawlResult;
use crate::RippleError;
use std::io::Write;
use std::path::Path;

/// Writes a crawl result as pretty-printed JSON to any writer
pub fn write_result<W: Write>(result: &CrawlResult, mut writer: W) -> Result<(), RippleError> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes a crawl result to a JSON file, replacing any existing content
///
/// # Arguments
///
/// * `result` - The crawl result to serialize
/// * `path` - Destination file path
///
/// # Returns
///
/// * `Ok(())` - File written
/// * `Err(RippleError)` - Failed to create or write the file
pub fn write_result_to_path(result: &CrawlResult, path: &Path) -> Result<(), RippleError> {
    let file = std::fs::File::create(path)?;
    write_result(result, std::io::BufWriter::new(file))
}

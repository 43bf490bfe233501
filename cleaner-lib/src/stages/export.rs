//! Pipe-delimited text export of the final sheet.

use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use log::info;

use crate::error::PipelineError;
use crate::workbook::Sheet;

/// Write one `|`-joined line per row, header included, in row order. Empty
/// cells render as empty fields; everything else renders through its
/// canonical text form. Quoting is disabled outright: sanitization has
/// already removed pipes, CRs and LFs from text cells, so no field can
/// require it.
pub fn export_pipe_delimited(sheet: &Sheet, dest: &Path) -> Result<(), PipelineError> {
    let export_err = |source| PipelineError::Export {
        path: dest.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .delimiter(b'|')
        .quote_style(QuoteStyle::Never)
        .from_path(dest)
        .map_err(export_err)?;
    for row in sheet.rows() {
        let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        writer.write_record(&record).map_err(export_err)?;
    }
    writer
        .flush()
        .map_err(|source| export_err(csv::Error::from(source)))?;
    info!("wrote pipe-delimited export {}", dest.display());
    Ok(())
}

//! JSON export of the records' serde representation.

use std::io::Write;
use uarsynth::Record;

use crate::error::CliResult;

/// Export records as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[Record], mut writer: W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

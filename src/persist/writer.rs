//! Record export
//!
//! Writes the store as one line per record.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, RosterError};
use crate::record::Record;
use crate::store::RecordStore;

/// Render a record as one line (without the trailing newline)
pub fn format_record(record: &Record) -> String {
    format!(
        "{} {} {} {} {}",
        record.name, record.id, record.department, record.section, record.score
    )
}

/// Write every record in sequence order, returning the number written
pub fn export<W: Write>(store: &RecordStore, mut writer: W) -> Result<usize> {
    let mut written = 0;

    for record in store {
        if !round_trips(record) {
            warn!(
                id = record.id,
                "record has an empty field or a field containing whitespace; it will not load back as written"
            );
        }

        writeln!(writer, "{}", format_record(record))?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Export to a file, replacing its contents
///
/// `sync` forces the data to disk before returning.
pub fn save_to_path(store: &RecordStore, path: &Path, sync: bool) -> Result<usize> {
    let file = File::create(path).map_err(|source| RosterError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let written = export(store, &mut writer)?;

    if sync {
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
    }

    info!(path = %path.display(), records = written, "saved records");
    Ok(written)
}

/// Whether every text field is a single non-empty token
fn round_trips(record: &Record) -> bool {
    [&record.name, &record.department, &record.section]
        .iter()
        .all(|field| !field.is_empty() && !field.contains(char::is_whitespace))
}

//! Record import
//!
//! Reads records back from the whitespace-separated format.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, RosterError};
use crate::record::Record;
use crate::store::RecordStore;

/// Outcome of reading one group of fields
enum Step {
    Record(Record),
    /// Clean end of input
    End,
    /// Missing or unparsable field; import stops here
    Malformed(&'static str),
}

/// Insert every well-formed record from `reader`, returning the count
///
/// Stops quietly at the first incomplete or unparsable record.
pub fn import<R: Read>(store: &mut RecordStore, mut reader: R) -> Result<usize> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let mut imported = 0;

    loop {
        match next_record(&mut tokens) {
            Step::Record(record) => {
                store.insert(record);
                imported += 1;
            }
            Step::End => break,
            Step::Malformed(field) => {
                warn!(imported, field, "stopping import at malformed record");
                break;
            }
        }
    }

    Ok(imported)
}

/// Import from a file into `store`
pub fn load_from_path(store: &mut RecordStore, path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|source| RosterError::ResourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let imported = import(store, BufReader::new(file))?;
    info!(path = %path.display(), records = imported, "loaded records");
    Ok(imported)
}

fn next_record<'a, I>(tokens: &mut I) -> Step
where
    I: Iterator<Item = &'a str>,
{
    let Some(name) = tokens.next() else {
        return Step::End;
    };

    let Some(id) = tokens.next().and_then(|t| t.parse().ok()) else {
        return Step::Malformed("id");
    };
    let Some(department) = tokens.next() else {
        return Step::Malformed("department");
    };
    let Some(section) = tokens.next() else {
        return Step::Malformed("section");
    };
    let Some(score) = tokens.next().and_then(|t| t.parse().ok()) else {
        return Step::Malformed("score");
    };

    Step::Record(Record::new(name, id, department, section, score))
}

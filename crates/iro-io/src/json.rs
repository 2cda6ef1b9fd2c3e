//! JSON helpers.

use iro_core::{ColorRecord, EnrichedColor, Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

const INDENT: &[u8] = b"    ";

/// Reads and deserializes a JSON file.
///
/// A missing file maps to [`Error::MissingFile`], a parse failure to
/// [`Error::MalformedJson`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    trace!(path = %path.display(), "read_json");
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::MissingFile {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `value` to `path`, 4-space indented, overwriting the file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    trace!(path = %path.display(), "write_json");
    let mut writer = BufWriter::new(File::create(path)?);
    write_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

fn write_pretty<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser).map_err(|e| Error::Io(e.into()))
}

/// Reads the raw color list.
pub fn read_records(path: &Path) -> Result<Vec<ColorRecord>> {
    let records: Vec<ColorRecord> = read_json(path)?;
    debug!(path = %path.display(), count = records.len(), "Read raw records");
    Ok(records)
}

/// Reads the enriched color list, in persisted order.
pub fn read_enriched(path: &Path) -> Result<Vec<EnrichedColor>> {
    let colors: Vec<EnrichedColor> = read_json(path)?;
    debug!(path = %path.display(), count = colors.len(), "Read enriched colors");
    Ok(colors)
}

/// Writes the enriched color list.
pub fn write_enriched(path: &Path, colors: &[EnrichedColor]) -> Result<()> {
    write_json(path, colors)?;
    debug!(path = %path.display(), count = colors.len(), "Wrote enriched colors");
    Ok(())
}

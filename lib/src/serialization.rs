//! Model files: fitted lines stored on disk and restored without refitting.
//!
//! A model file is a bincode-encoded record of the format version followed by
//! the line's slope and intercept (20 bytes in total). Files written by a
//! different format version are rejected on load.

use crate::model::LineModel;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Version tag written at the start of every model file.
pub const FORMAT_VERSION: u32 = 1;

/// Failure to write or read a model file.
#[derive(Debug, thiserror::Error)]
pub enum ModelFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("Unsupported model file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

#[derive(serde::Serialize, serde::Deserialize)]
struct ModelRecord {
    version: u32,
    model: LineModel,
}

/// Encodes `model` into `writer`.
pub fn write_model<W: Write>(model: &LineModel, writer: W) -> Result<(), ModelFileError> {
    let record = ModelRecord {
        version: FORMAT_VERSION,
        model: *model,
    };
    bincode::serialize_into(writer, &record)?;
    Ok(())
}

/// Decodes a model previously written by [`write_model`].
///
/// # Errors
/// - [`ModelFileError::Encoding`] on truncated or malformed input
/// - [`ModelFileError::UnsupportedVersion`] if the version tag differs from
///   [`FORMAT_VERSION`]
pub fn read_model<R: Read>(reader: R) -> Result<LineModel, ModelFileError> {
    let record: ModelRecord = bincode::deserialize_from(reader)?;
    if record.version != FORMAT_VERSION {
        return Err(ModelFileError::UnsupportedVersion {
            found: record.version,
            expected: FORMAT_VERSION,
        });
    }
    Ok(record.model)
}

/// Writes `model` to a new file at `path`, replacing any existing file.
pub fn save_model<P: AsRef<Path>>(model: &LineModel, path: P) -> Result<(), ModelFileError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_model(model, &mut writer)?;
    writer.flush()?;
    log::debug!("saved model to {}", path.as_ref().display());
    Ok(())
}

/// Reads the model stored at `path`.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LineModel, ModelFileError> {
    read_model(BufReader::new(File::open(path)?))
}

impl LineModel {
    /// In-memory form of a model file.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ModelFileError> {
        let mut bytes = Vec::new();
        write_model(self, &mut bytes)?;
        Ok(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelFileError> {
        read_model(bytes)
    }
}

//! Reading entry data out of the numbered shard files.

use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use crate::{
    error::{Error, FormatError, Result},
    types::LocationDescriptor,
};

const DIR_SUFFIX: &str = "_dir.vpk";

/// Pulls byte ranges out of the shards belonging to one directory file
///
/// Every call opens its own handle to the shard, so extractions never share a file position.
///
/// ```no_run
/// use cs2_vpk::{LocationDescriptor, ShardExtractor};
///
/// fn read_entry() -> cs2_vpk::error::Result<Vec<u8>> {
///     let shards = ShardExtractor::new("pak01_dir.vpk")?;
///     shards.extract(&LocationDescriptor::new(0, 1000, 2048))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ShardExtractor {
    directory: PathBuf,
    stem: String,
}

impl ShardExtractor {
    /// Prepare to read the shards next to the directory file at `index_path`.
    pub fn new(index_path: impl AsRef<Path>) -> Result<ShardExtractor> {
        let index_path = index_path.as_ref();
        let stem = index_path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(DIR_SUFFIX))
            .ok_or_else(|| FormatError::InvalidIndexName(index_path.to_path_buf()))?;

        Ok(ShardExtractor {
            directory: index_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            stem: stem.to_owned(),
        })
    }

    /// Path of the shard with the given number, `pak01_dir.vpk` becoming `pak01_003.vpk` for shard 3
    pub fn shard_path(&self, shard_index: u16) -> PathBuf {
        self.directory
            .join(format!("{}_{:03}.vpk", self.stem, shard_index))
    }

    /// Read exactly the bytes described by `location`.
    #[instrument(skip(self), err)]
    pub fn extract(&self, location: &LocationDescriptor) -> Result<Vec<u8>> {
        let path = self.shard_path(location.shard_index);
        let file = File::open(&path).map_err(|source| Error::ShardIo {
            shard: location.shard_index,
            path: path.clone(),
            source,
        })?;

        debug!(shard = %path.display(), "reading shard range");
        read_range(file, location)
    }
}

/// Read the bytes described by `location` from the shards of the directory file at `index_path`.
pub fn extract(index_path: impl AsRef<Path>, location: &LocationDescriptor) -> Result<Vec<u8>> {
    ShardExtractor::new(index_path)?.extract(location)
}

/// Read exactly `location.length` bytes at `location.offset` from an already opened shard.
///
/// A range reaching past the end of the shard is an error, the data is never truncated.
pub fn read_range<R: Read + Seek>(mut reader: R, location: &LocationDescriptor) -> Result<Vec<u8>> {
    let available = reader.seek(SeekFrom::End(0))?;
    let end = location.offset as u64 + location.length as u64;
    if end > available {
        return Err(short_read(location, available));
    }

    reader.seek(SeekFrom::Start(location.offset as u64))?;

    let mut buffer = vec![0; location.length as usize];
    reader.read_exact(&mut buffer).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => short_read(location, available),
        _ => e.into(),
    })?;

    Ok(buffer)
}

fn short_read(location: &LocationDescriptor, available: u64) -> Error {
    Error::ShortRead {
        shard: location.shard_index,
        offset: location.offset,
        length: location.length,
        available,
    }
}

//! Types for reading VPK directory files
//!

use binrw::BinRead;
use bon::Builder;
use byteorder::ReadBytesExt;
use indexmap::IndexMap;
use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    path::Path,
};
use tracing::{debug, instrument, trace};

use crate::{
    error::{Error, FormatError, Result},
    types::{join_path, EntryTrailer, IndexEntry, LocationDescriptor, VpkHeader, ENTRY_TERMINATOR},
};

/// Logical paths to look for, mapped to the key they should be reported under
pub type WantedSet = HashMap<String, String>;

/// Keys of a [`WantedSet`] that were found, mapped to where their data lives
pub type FoundSet = IndexMap<String, LocationDescriptor>;

/// Options for how strictly the directory tree is checked while walking it
#[derive(Debug, Clone, Copy, Builder)]
pub struct ScanOptions {
    /// Reject entries whose trailer does not end in `0xFFFF`
    #[builder(default = true)]
    pub validate_terminator: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Keeps track of the stream position without asking the underlying reader
struct Tracked<R> {
    inner: R,
    position: u64,
}

impl<R: Seek> Tracked<R> {
    fn new(mut inner: R) -> io::Result<Self> {
        let position = inner.stream_position()?;
        Ok(Self { inner, position })
    }
}

impl<R: Read> Read for Tracked<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.position += read as u64;
        Ok(read)
    }
}

impl<R: Seek> Seek for Tracked<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.position = self.inner.seek(pos)?;
        Ok(self.position)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.position)
    }
}

/// VPK directory reader
///
/// Holds every entry of the tree in the order it was stored.
///
/// ```no_run
/// fn list_vpk_contents(path: &std::path::Path) -> cs2_vpk::error::Result<()> {
///     let vpk = cs2_vpk::VpkDirectory::open(path)?;
///
///     for entry in vpk.entries() {
///         println!("{}: {:?}", entry.path(), entry.location());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct VpkDirectory {
    header: VpkHeader,
    entries: IndexMap<Box<str>, IndexEntry>,
}

impl VpkDirectory {
    /// Read a whole directory tree with the default [`ScanOptions`].
    pub fn new<R: Read + Seek>(reader: R) -> Result<VpkDirectory> {
        Self::with_options(reader, ScanOptions::default())
    }

    /// Read a whole directory tree.
    #[instrument(skip(reader), err)]
    pub fn with_options<R: Read + Seek>(reader: R, options: ScanOptions) -> Result<VpkDirectory> {
        let mut entries = IndexMap::new();
        let header = Self::walk(reader, options, |entry| {
            entries.insert(entry.path().into_boxed_str(), entry);
            Ok(())
        })?;

        debug!(entries = entries.len(), "read directory tree");
        Ok(VpkDirectory { header, entries })
    }

    /// Open and read the directory file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<VpkDirectory> {
        let file = File::open(path.as_ref())?;
        Self::new(BufReader::new(file))
    }

    /// The header the tree was stored behind
    pub fn header(&self) -> &VpkHeader {
        &self.header
    }

    /// Number of entries contained in this directory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this directory contains no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the logical paths of all entries.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_ref())
    }

    /// Returns an iterator over all entries.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    /// Search for an entry by its logical path
    pub fn by_name(&self, name: &str) -> Option<&IndexEntry> {
        self.entries.get(name)
    }

    /// Walk the tree once, collecting the location of every wanted path.
    ///
    /// Paths missing from the archive are left out of the result.
    #[instrument(skip_all, fields(wanted = wanted.len()), err)]
    pub fn scan_reader<R: Read + Seek>(
        reader: R,
        wanted: &WantedSet,
        options: ScanOptions,
    ) -> Result<FoundSet> {
        let mut found = FoundSet::new();
        Self::walk(reader, options, |entry| {
            let path = entry.path();
            if let Some(key) = wanted.get(&path) {
                debug!(%path, %key, "found wanted entry");
                found.insert(key.clone(), entry.location());
            }
            Ok(())
        })?;

        Ok(found)
    }

    /// Walk the tree in a single forward pass, handing every entry to `visit`.
    ///
    /// Returns the header that preceded the tree.
    pub fn walk<R, F>(reader: R, options: ScanOptions, mut visit: F) -> Result<VpkHeader>
    where
        R: Read + Seek,
        F: FnMut(IndexEntry) -> Result<()>,
    {
        let mut reader = Tracked::new(reader)?;

        let header = VpkHeader::read(&mut reader).map_err(|e| truncated(e, "directory header"))?;
        debug!(
            version = header.version,
            tree_size = header.tree_size,
            "read directory header"
        );

        loop {
            let extension = read_cstring(&mut reader)?;
            if extension.is_empty() {
                break;
            }

            loop {
                let prefix = read_cstring(&mut reader)?;
                if prefix.is_empty() {
                    break;
                }

                loop {
                    let stem = read_cstring(&mut reader)?;
                    if stem.is_empty() {
                        break;
                    }

                    let entry = read_entry(&mut reader, &extension, &prefix, stem, options)?;
                    trace!(path = %entry.path(), "read entry");
                    visit(entry)?;
                }
            }
        }

        Ok(header)
    }
}

/// Scan the directory file at `index_path` for the paths in `wanted`.
#[instrument(skip_all, fields(index = %index_path.as_ref().display()), err)]
pub fn scan(index_path: impl AsRef<Path>, wanted: &WantedSet) -> Result<FoundSet> {
    let file = File::open(index_path.as_ref())?;
    VpkDirectory::scan_reader(BufReader::new(file), wanted, ScanOptions::default())
}

fn read_entry<R: Read + Seek>(
    reader: &mut Tracked<R>,
    extension: &str,
    prefix: &str,
    stem: String,
    options: ScanOptions,
) -> Result<IndexEntry> {
    let trailer = EntryTrailer::read(reader)
        .map_err(|e| truncated(e, &join_path(prefix, &stem, extension)))?;

    if options.validate_terminator && trailer.terminator != ENTRY_TERMINATOR {
        return Err(FormatError::InvalidTerminator {
            path: join_path(prefix, &stem, extension),
            offset: reader.position - 2,
            found: trailer.terminator,
        }
        .into());
    }

    let declared = trailer.preload_bytes;
    let mut preload = Vec::with_capacity(declared as usize);
    let read = reader
        .by_ref()
        .take(declared as u64)
        .read_to_end(&mut preload)?;
    if read < declared as usize {
        return Err(FormatError::PreloadOverrun {
            path: join_path(prefix, &stem, extension),
            declared,
            available: read as u64,
        }
        .into());
    }

    Ok(IndexEntry {
        extension: extension.to_owned(),
        prefix: prefix.to_owned(),
        stem,
        trailer,
        preload,
    })
}

/// Read a null terminated string, an empty string marks the end of a group
fn read_cstring<R: Read>(reader: &mut Tracked<R>) -> Result<String> {
    let start = reader.position;
    let mut raw = Vec::new();
    loop {
        let byte = match reader.read_u8() {
            Ok(byte) => byte,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(FormatError::UnterminatedString(start).into())
            }
            Err(e) => return Err(e.into()),
        };
        if byte == b'\0' {
            break;
        }
        raw.push(byte);
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn truncated(error: binrw::Error, what: &str) -> Error {
    if error.is_eof() {
        Error::IOError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{what} runs past the end of the file"),
        ))
    } else {
        error.into()
    }
}

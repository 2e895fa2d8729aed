//! Base types for structure of VPK directory files.

use binrw::{BinRead, BinWrite};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Size in bytes of the directory file header
pub const HEADER_SIZE: u64 = 28;

/// Value every entry trailer ends with
pub const ENTRY_TERMINATOR: u16 = 0xFFFF;

/// VPK directory header
///
/// Always 28 bytes. The fields are kept for diagnostics only; walking the tree never depends on them.
/// All data is stored in little endian format
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(little)]
pub struct VpkHeader {
    /// Should be 0x55AA1234
    pub signature: u32,

    /// Format version, 2 for Source 2 archives
    pub version: u32,

    /// Size in bytes of the directory tree following this header
    pub tree_size: u32,

    /// Size of entry data stored in the directory file itself
    pub file_data_size: u32,

    /// Size of the per-shard checksum section
    pub archive_md5_size: u32,

    /// Size of the tree checksum section
    pub other_md5_size: u32,

    /// Size of the signature section
    pub signature_size: u32,
}

/// Fixed trailer written after every file name in the tree
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq)]
#[brw(little)]
pub struct EntryTrailer {
    /// CRC-32 of the entry data, never validated
    pub crc: u32,

    /// Number of preload bytes stored inline after this trailer
    pub preload_bytes: u16,

    /// Shard holding the entry data
    pub archive_index: u16,

    /// Offset of the data inside the shard
    pub offset: u32,

    /// Length of the data inside the shard
    pub length: u32,

    /// Should always be [`ENTRY_TERMINATOR`]
    pub terminator: u16,
}

/// Location of a contiguous byte range inside one shard file
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationDescriptor {
    pub shard_index: u16,
    pub offset: u32,
    pub length: u32,
}

impl LocationDescriptor {
    pub const fn new(shard_index: u16, offset: u32, length: u32) -> Self {
        Self {
            shard_index,
            offset,
            length,
        }
    }
}

impl From<&EntryTrailer> for LocationDescriptor {
    fn from(value: &EntryTrailer) -> Self {
        Self::new(value.archive_index, value.offset, value.length)
    }
}

/// A single leaf of the directory tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexEntry {
    /// File extension without the leading dot
    pub extension: String,

    /// Directory path, a single space for the archive root
    pub prefix: String,

    /// File name without extension
    pub stem: String,

    /// Raw trailer as read from the tree
    pub trailer: EntryTrailer,

    /// Inline data that precedes the shard range when the entry is reassembled
    pub preload: Vec<u8>,
}

impl IndexEntry {
    /// Full logical path of the entry, `prefix/stem.extension`
    pub fn path(&self) -> String {
        join_path(&self.prefix, &self.stem, &self.extension)
    }

    /// Where the entry data lives
    pub fn location(&self) -> LocationDescriptor {
        LocationDescriptor::from(&self.trailer)
    }
}

pub(crate) fn join_path(prefix: &str, stem: &str, extension: &str) -> String {
    if prefix.trim().is_empty() {
        format!("{stem}.{extension}")
    } else {
        format!("{prefix}/{stem}.{extension}")
    }
}

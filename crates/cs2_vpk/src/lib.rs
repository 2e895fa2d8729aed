//! This library handles reading **VPK** archives used by *Counter-Strike 2*.
//!
//! # VPK Archive Format Documentation
//!
//! A VPK archive is split into a directory file (`pak01_dir.vpk`) describing every entry, and a set of
//! numbered shard files (`pak01_000.vpk`, `pak01_001.vpk`, ...) holding the actual data. This crate reads
//! the directory tree without touching the shards, and pulls single byte ranges out of a shard on demand.
//!
//! ## File Structure
//!
//! The directory file consists of a fixed header followed by a three level tree of null terminated strings.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Signature              | 4 bytes: 0x55AA1234                                        |
//! | 0x0004         | Version                | 4 bytes: 2 for archives written by Source 2 tools          |
//! | 0x0008         | Tree Size              | 4 bytes: Size of the directory tree in bytes               |
//! | 0x000C         | File Data Size         | 4 bytes: Size of data stored inside the directory file     |
//! | 0x0010         | Archive MD5 Size       | 4 bytes: Size of the archive checksum section              |
//! | 0x0014         | Other MD5 Size         | 4 bytes: Size of the tree checksum section                 |
//! | 0x0018         | Signature Size         | 4 bytes: Size of the signature section                     |
//!
//! ### Header
//!
//! The header is always 28 bytes long. None of its fields are needed to walk the tree, so the reader consumes
//! it as an opaque block and never branches on its contents.
//!
//! ### Directory Tree
//!
//! After the header the tree is stored as nested groups, each group closed by an empty string:
//!
//! - **Extension**: a null terminated string such as `vtex_c`. An empty extension ends the tree.
//! - **Path**: a null terminated directory path such as `panorama/images/overheadmaps`. An empty path ends
//!   the current extension group. A single space stands for the archive root.
//! - **Name**: a null terminated file stem such as `de_dust2_radar_psd`. An empty name ends the current path
//!   group.
//!
//! Every name is followed by a fixed entry trailer and its preload data:
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | CRC32                  | 4 bytes: CRC-32 checksum of the entry data              |
//! | 0x0004         | Preload Bytes          | 2 bytes: Number of preload bytes following the trailer  |
//! | 0x0006         | Archive Index          | 2 bytes: Shard number holding the entry data            |
//! | 0x0008         | Entry Offset           | 4 bytes: Offset of the data inside the shard            |
//! | 0x000C         | Entry Length           | 4 bytes: Length of the data inside the shard            |
//! | 0x0010         | Terminator             | 2 bytes: Fixed value 0xFFFF                             |
//!
//! The full logical path of an entry is `path/name.extension`.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.vpk`
//! - **Endianness**: Little-endian for all multi-byte integers
//! - **Shard Names**: the `_dir` token of the directory file name replaced by a zero padded, three digit
//!   shard number
//!

pub mod error;
pub mod read;
pub mod shard;
pub mod types;

pub use read::{scan, FoundSet, ScanOptions, VpkDirectory, WantedSet};
pub use shard::{extract, ShardExtractor};
pub use types::{IndexEntry, LocationDescriptor};

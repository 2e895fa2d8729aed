use std::io::Cursor;
use std::path::Path;

use binrw::BinWrite;
use cs2_vpk::types::{EntryTrailer, VpkHeader, ENTRY_TERMINATOR};
use indexmap::IndexMap;

/// Lays out a directory tree the way the game tools store it
#[derive(Default)]
pub struct DirectoryBuilder {
    tree: IndexMap<String, IndexMap<String, Vec<(String, EntryTrailer, Vec<u8>)>>>,
}

#[allow(dead_code)]
impl DirectoryBuilder {
    pub fn entry(
        mut self,
        extension: &str,
        prefix: &str,
        stem: &str,
        shard: u16,
        offset: u32,
        length: u32,
    ) -> Self {
        self.push(extension, prefix, stem, shard, offset, length, Vec::new());
        self
    }

    pub fn entry_with_preload(
        mut self,
        extension: &str,
        prefix: &str,
        stem: &str,
        location: (u16, u32, u32),
        preload: &[u8],
    ) -> Self {
        let (shard, offset, length) = location;
        self.push(extension, prefix, stem, shard, offset, length, preload.to_vec());
        self
    }

    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        extension: &str,
        prefix: &str,
        stem: &str,
        shard: u16,
        offset: u32,
        length: u32,
        preload: Vec<u8>,
    ) {
        let trailer = EntryTrailer {
            crc: 0xDEADBEEF,
            preload_bytes: preload.len() as u16,
            archive_index: shard,
            offset,
            length,
            terminator: ENTRY_TERMINATOR,
        };
        self.tree
            .entry(extension.to_owned())
            .or_default()
            .entry(prefix.to_owned())
            .or_default()
            .push((stem.to_owned(), trailer, preload));
    }

    pub fn build(&self) -> Vec<u8> {
        let mut tree = Vec::new();
        for (extension, prefixes) in &self.tree {
            push_cstring(&mut tree, extension);
            for (prefix, stems) in prefixes {
                push_cstring(&mut tree, prefix);
                for (stem, trailer, preload) in stems {
                    push_cstring(&mut tree, stem);
                    let mut raw = Vec::new();
                    trailer
                        .write(&mut Cursor::new(&mut raw))
                        .expect("trailer serializes");
                    tree.extend_from_slice(&raw);
                    tree.extend_from_slice(preload);
                }
                tree.push(0);
            }
            tree.push(0);
        }
        tree.push(0);

        let header = VpkHeader {
            signature: 0x55AA1234,
            version: 2,
            tree_size: tree.len() as u32,
            ..Default::default()
        };

        let mut output = Vec::new();
        header
            .write(&mut Cursor::new(&mut output))
            .expect("header serializes");
        output.extend_from_slice(&tree);
        output
    }

    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.build()).expect("directory file written");
    }
}

fn push_cstring(buffer: &mut Vec<u8>, value: &str) {
    buffer.extend_from_slice(value.as_bytes());
    buffer.push(0);
}

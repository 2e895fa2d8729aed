use clap::Args;
use cs2_vpk::VpkDirectory;
use miette::{Context, IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use std::{fs::File, io::BufReader, path::PathBuf};
use tracing::info;

#[derive(Args)]
pub struct ListArgs {
    /// An input VPK directory file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Only list entries with this extension
    #[arg(short, long, value_name = "EXT")]
    extension: Option<String>,
}

impl ListArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let vpk = VpkDirectory::new(BufReader::new(f))
            .context(format!("reading {}", &self.file.display()))?;

        let header = vpk.header();
        info!(
            "version {} with {} entries in a {} byte tree",
            header.version,
            vpk.len(),
            header.tree_size
        );

        let entries = vpk.entries().filter(|entry| {
            self.extension
                .as_deref()
                .map_or(true, |extension| entry.extension == extension)
        });

        for entry in entries {
            let location = entry.location();
            println!(
                "{}  shard {:03}  offset {:>10}  length {:>10}  preload {:>5}",
                entry
                    .path()
                    .if_supports_color(Stream::Stdout, |path| path.cyan()),
                location.shard_index,
                location.offset,
                location.length,
                entry.preload.len(),
            );
        }

        Ok(())
    }
}

use clap::Args;
use cs2_vpk::{IndexEntry, ShardExtractor, VpkDirectory};
use miette::{Context, IntoDiagnostic, Result};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Component, Path, PathBuf},
};
use tracing::{info, warn};

/// Shard number marking data stored in the directory file itself
const EMBEDDED_ARCHIVE: u16 = 0x7FFF;

#[derive(Args)]
pub struct ExtractArgs {
    /// An input VPK directory file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// Only extract entries whose path starts with this prefix
    #[arg(long, value_name = "PREFIX")]
    filter: Option<String>,

    /// Allow overwriting the target
    #[arg(long, default_value_t = false)]
    overwrite: bool,
}

impl ExtractArgs {
    pub fn handle(&self) -> Result<()> {
        let f = File::open(&self.file)
            .into_diagnostic()
            .context(format!("path: {}", &self.file.display()))?;
        let vpk = VpkDirectory::new(BufReader::new(f))
            .context(format!("reading {}", &self.file.display()))?;
        let shards = ShardExtractor::new(&self.file)?;

        for entry in vpk.entries() {
            let name = entry.path();
            if let Some(filter) = &self.filter {
                if !name.starts_with(filter.as_str()) {
                    continue;
                }
            }

            if !is_relative(Path::new(&name)) {
                warn!("skipping {name}, it would be written outside of the target");
                continue;
            }

            if entry.trailer.archive_index == EMBEDDED_ARCHIVE && entry.trailer.length > 0 {
                warn!("skipping {name}, its data is stored inside the directory file");
                continue;
            }

            let p = self.directory.join(&name);
            info!("writing {}", p.display());
            self.write_entry(&shards, entry, &p)
                .context(format!("extracting {name}"))?;
        }

        Ok(())
    }

    fn write_entry(&self, shards: &ShardExtractor, entry: &IndexEntry, p: &Path) -> Result<()> {
        if let Some(parent) = p.parent() {
            std::fs::create_dir_all(parent)
                .into_diagnostic()
                .context(format!("creating {}", parent.display()))?;
        }

        let mut out = if !self.overwrite {
            File::create_new(p)
                .into_diagnostic()
                .context(format!("creating {}", p.display()))?
        } else {
            File::create(p)
                .into_diagnostic()
                .context(format!("creating {}", p.display()))?
        };

        out.write_all(&entry.preload).into_diagnostic()?;
        if entry.trailer.length > 0 {
            let data = shards.extract(&entry.location())?;
            out.write_all(&data).into_diagnostic()?;
        }

        Ok(())
    }
}

fn is_relative(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

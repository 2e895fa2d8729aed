use std::{collections::BTreeMap, fs::File, path::PathBuf};

use clap::Args;
use cs2_vpk::{FoundSet, LocationDescriptor, ShardExtractor};
use itertools::Itertools;
use miette::{bail, Context, IntoDiagnostic, Result};
use tracing::{error, info, instrument, warn};

use crate::overview::{
    radar_assets, save_radar, wanted_set, OverviewMeta, RadarAsset, DEFAULT_GAME_DIR, DEFAULT_MAPS,
};

#[derive(Args)]
pub struct ExtractArgs {
    /// The game install directory
    #[arg(long, env = "CS2_GAME_DIR", default_value = DEFAULT_GAME_DIR, value_name = "DIR")]
    game_dir: PathBuf,

    /// A target directory for the radar images
    #[arg(short, long, default_value = "overviews", value_name = "DIR")]
    out: PathBuf,

    /// A map to extract, may be repeated; defaults to the competitive pool
    #[arg(long = "map", value_name = "MAP")]
    maps: Vec<String>,

    /// Keep going when a single asset fails to extract
    #[arg(long, default_value_t = false)]
    keep_going: bool,

    /// Also write the overview coordinates of every map as JSON
    #[arg(long, value_name = "FILE")]
    metadata: Option<PathBuf>,
}

impl ExtractArgs {
    pub fn handle(&self) -> Result<()> {
        let maps = if self.maps.is_empty() {
            DEFAULT_MAPS.iter().map(|map| map.to_string()).collect()
        } else {
            self.maps.clone()
        };

        let extraction = RadarExtraction {
            vpk_path: self.game_dir.join("game/csgo/pak01_dir.vpk"),
            out: self.out.clone(),
            maps,
            keep_going: self.keep_going,
        };
        let summary = extraction.run()?;

        if let Some(path) = &self.metadata {
            let f = File::create(path)
                .into_diagnostic()
                .context(format!("creating {}", path.display()))?;
            serde_json::to_writer_pretty(f, &summary.metadata).into_diagnostic()?;
            info!("wrote metadata of {} maps to {}", summary.metadata.len(), path.display());
        }

        if !summary.failed.is_empty() {
            bail!("failed to extract {}", summary.failed.join(", "));
        }

        Ok(())
    }
}

/// Pulls the radar assets of a set of maps out of the game archive
pub struct RadarExtraction {
    /// The archive's `_dir.vpk` index
    pub vpk_path: PathBuf,
    pub out: PathBuf,
    pub maps: Vec<String>,
    /// Log failed assets and carry on instead of stopping at the first one
    pub keep_going: bool,
}

/// What a [`RadarExtraction`] produced
#[derive(Debug, Default)]
pub struct Summary {
    /// Paths of the written images
    pub saved: Vec<PathBuf>,
    /// Overview coordinates by map
    pub metadata: BTreeMap<String, OverviewMeta>,
    /// Keys of assets the archive does not contain
    pub missing: Vec<String>,
    /// Keys of assets that were found but could not be extracted
    pub failed: Vec<String>,
}

impl RadarExtraction {
    #[instrument(skip(self), fields(vpk = %self.vpk_path.display()))]
    pub fn run(&self) -> Result<Summary> {
        std::fs::create_dir_all(&self.out)
            .into_diagnostic()
            .context(format!("creating {}", self.out.display()))?;

        let assets = radar_assets(&self.maps);
        let found = cs2_vpk::scan(&self.vpk_path, &wanted_set(&assets))
            .context(format!("scanning {}", self.vpk_path.display()))?;
        let shards = ShardExtractor::new(&self.vpk_path)?;
        info!("found {} of {} assets", found.len(), assets.len());

        let mut summary = Summary {
            missing: missing_keys(&assets, &found),
            ..Summary::default()
        };
        for key in &summary.missing {
            warn!("{key} is not in the archive");
        }

        let by_key: BTreeMap<String, &RadarAsset> =
            assets.iter().map(|asset| (asset.key(), asset)).collect();

        for (key, location) in found.iter().sorted_by_key(|(key, _)| *key) {
            let Some(asset) = by_key.get(key) else {
                continue;
            };

            match self.extract_asset(&shards, asset, location, &mut summary) {
                Ok(()) => {}
                Err(e) if self.keep_going => {
                    error!("{key}: {e:?}");
                    summary.failed.push(key.clone());
                }
                Err(e) => return Err(e.wrap_err(format!("extracting {key}"))),
            }
        }

        Ok(summary)
    }

    fn extract_asset(
        &self,
        shards: &ShardExtractor,
        asset: &RadarAsset,
        location: &LocationDescriptor,
        summary: &mut Summary,
    ) -> Result<()> {
        let data = shards.extract(location)?;

        if asset.is_image() {
            let pixels = cs2_vtex::decode(&data)?;
            let path = self.out.join(format!("{}.png", asset.key()));
            save_radar(pixels, &path)?;
            info!("saved {}", path.display());
            summary.saved.push(path);
        } else {
            let meta = OverviewMeta::parse(&data);
            info!("{} {meta}", asset.map());
            summary.metadata.insert(asset.map().to_owned(), meta);
        }

        Ok(())
    }
}

fn missing_keys(assets: &[RadarAsset], found: &FoundSet) -> Vec<String> {
    assets
        .iter()
        .map(RadarAsset::key)
        .filter(|key| !found.contains_key(key))
        .collect()
}

//! Naming of the radar assets inside the game archive, and the overview metadata that goes with them.

use std::{fmt, path::Path, sync::OnceLock};

use cs2_vpk::WantedSet;
use cs2_vtex::PixelBuffer;
use miette::{miette, Context, IntoDiagnostic, Result};
use regex::Regex;
use serde::Serialize;

/// Maps in the competitive pool
pub const DEFAULT_MAPS: [&str; 9] = [
    "de_ancient",
    "de_anubis",
    "de_dust2",
    "de_inferno",
    "de_mirage",
    "de_nuke",
    "de_overpass",
    "de_train",
    "de_vertigo",
];

/// Where Steam installs the game under WSL
pub const DEFAULT_GAME_DIR: &str =
    "/mnt/c/Program Files (x86)/Steam/steamapps/common/Counter-Strike Global Offensive";

const RADAR_PREFIX: &str = "panorama/images/overheadmaps";
const OVERVIEW_PREFIX: &str = "resource/overviews";

/// One file belonging to a map's radar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RadarAsset {
    /// The radar image of the upper level
    Radar(String),
    /// The radar image of the lower level, only present on multi-floor maps
    LowerRadar(String),
    /// The text file holding the radar's world coordinates
    Overview(String),
}

impl RadarAsset {
    /// All assets of one map
    pub fn for_map(map: &str) -> [RadarAsset; 3] {
        [
            RadarAsset::Radar(map.to_owned()),
            RadarAsset::LowerRadar(map.to_owned()),
            RadarAsset::Overview(map.to_owned()),
        ]
    }

    pub fn map(&self) -> &str {
        match self {
            RadarAsset::Radar(map) | RadarAsset::LowerRadar(map) | RadarAsset::Overview(map) => map,
        }
    }

    /// Logical path inside the archive
    pub fn vpk_path(&self) -> String {
        match self {
            RadarAsset::Radar(map) => format!("{RADAR_PREFIX}/{map}_radar_psd.vtex_c"),
            RadarAsset::LowerRadar(map) => format!("{RADAR_PREFIX}/{map}_lower_radar_psd.vtex_c"),
            RadarAsset::Overview(map) => format!("{OVERVIEW_PREFIX}/{map}.txt"),
        }
    }

    /// Name the asset is reported and saved under
    pub fn key(&self) -> String {
        match self {
            RadarAsset::Radar(map) => map.clone(),
            RadarAsset::LowerRadar(map) => format!("{map}_lower"),
            RadarAsset::Overview(map) => format!("_txt_{map}"),
        }
    }

    pub fn is_image(&self) -> bool {
        !matches!(self, RadarAsset::Overview(_))
    }
}

/// Every asset of every map in `maps`
pub fn radar_assets<S: AsRef<str>>(maps: &[S]) -> Vec<RadarAsset> {
    maps.iter()
        .flat_map(|map| RadarAsset::for_map(map.as_ref()))
        .collect()
}

/// Archive paths of `assets` mapped to their keys
pub fn wanted_set(assets: &[RadarAsset]) -> WantedSet {
    assets
        .iter()
        .map(|asset| (asset.vpk_path(), asset.key()))
        .collect()
}

/// World coordinates of a radar image
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewMeta {
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub scale: Option<f64>,
}

impl OverviewMeta {
    /// Pull the coordinates out of an overview text file.
    ///
    /// Only the first `"key" "value"` pair of each key counts; keys that are missing or do not hold a
    /// number are left empty.
    pub fn parse(data: &[u8]) -> OverviewMeta {
        static PAIR: OnceLock<Regex> = OnceLock::new();
        let pair = PAIR.get_or_init(|| {
            Regex::new(r#""(pos_x|pos_y|scale)"\s+"([^"]+)""#).expect("pattern is valid")
        });

        let text = String::from_utf8_lossy(data);
        let first = |key: &str| -> Option<f64> {
            pair.captures_iter(&text)
                .find(|captures| &captures[1] == key)
                .and_then(|captures| captures[2].trim().parse().ok())
        };

        OverviewMeta {
            pos_x: first("pos_x"),
            pos_y: first("pos_y"),
            scale: first("scale"),
        }
    }
}

impl fmt::Display for OverviewMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: Option<f64>| value.map_or_else(|| "-".to_owned(), |v| v.to_string());
        write!(
            f,
            "pos_x={} pos_y={} scale={}",
            show(self.pos_x),
            show(self.pos_y),
            show(self.scale)
        )
    }
}

/// Write a decoded radar as PNG.
pub fn save_radar(pixels: PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = (pixels.width(), pixels.height());
    let image = image::RgbaImage::from_raw(width, height, pixels.into_raw())
        .ok_or_else(|| miette!("pixel buffer does not fill {width}x{height}"))?;

    image
        .save_with_format(path, image::ImageFormat::Png)
        .into_diagnostic()
        .context(format!("saving {}", path.display()))
}

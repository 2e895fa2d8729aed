pub mod extract;

#[derive(clap::Subcommand)]
pub enum RadarCommands {
    /// Extract radar images and overview metadata from the game archive
    Extract(extract::ExtractArgs),
}

impl RadarCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            RadarCommands::Extract(extract) => extract.handle(),
        }
    }
}

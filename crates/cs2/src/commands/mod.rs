pub mod radar;
pub mod vpk;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle VPK archives
    Vpk {
        #[command(subcommand)]
        command: vpk::VpkCommands,
    },
    /// Extract map radar overviews
    Radar {
        #[command(subcommand)]
        command: radar::RadarCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Vpk { command } => command.handle(),
            Commands::Radar { command } => command.handle(),
        }
    }
}

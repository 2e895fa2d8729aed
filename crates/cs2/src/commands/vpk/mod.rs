pub mod extract;
pub mod list;

#[derive(clap::Subcommand)]
pub enum VpkCommands {
    /// List the entries of a VPK directory file
    List(list::ListArgs),
    /// Extract a VPK archive into a directory
    Extract(extract::ExtractArgs),
}

impl VpkCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            VpkCommands::List(list) => list.handle(),
            VpkCommands::Extract(extract) => extract.handle(),
        }
    }
}

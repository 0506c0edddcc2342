use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum DatasetCommands {
    /// List upload history
    List {
        /// Include deactivated datasets
        #[arg(long)]
        all: bool,
    },
    /// Get a dataset with its equipment rows
    Get { id: i64 },
    /// Delete a dataset
    Delete { id: i64 },
}

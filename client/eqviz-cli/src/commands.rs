use crate::dataset_commands::DatasetCommands;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        username: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and sign in with it
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Read from stdin when omitted
        #[arg(long)]
        password: Option<String>,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },

    /// End the session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Upload an equipment CSV file
    Upload {
        /// Path to a .csv file (max 10MB)
        path: PathBuf,
    },

    /// Dataset history operations
    Datasets {
        #[command(subcommand)]
        action: DatasetCommands,
    },

    /// Summary statistics for a dataset
    Summary { id: i64 },

    /// Equipment type distribution for a dataset
    Types { id: i64 },

    /// Download the PDF report for a dataset
    Report {
        id: i64,
        /// Defaults to equipment_report_<id>.pdf
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Whether the command needs a signed-in user before it runs.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Commands::Login { .. } | Commands::Register { .. } | Commands::Logout
        )
    }
}

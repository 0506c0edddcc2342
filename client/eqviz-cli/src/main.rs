//! eqviz - Chemical Equipment Parameter Visualizer CLI
//!
//! Signs in against the dashboard API, keeps the session on disk and prints
//! every response as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (password read from stdin when omitted)
//! eqviz login --username bob
//!
//! # Upload a CSV and look at the result
//! eqviz upload equipment.csv
//! eqviz summary 1 --pretty
//!
//! # Save the PDF report
//! eqviz report 1 --output plant.pdf
//! ```

use eqviz_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

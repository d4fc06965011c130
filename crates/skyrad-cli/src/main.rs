//! Skyrad command-line interface.
//!
//! Render engine geometry blocks from TOML job files:
//! ```sh
//! skyrad-cli render job.toml
//! skyrad-cli validate job.toml
//! skyrad-cli variants
//! ```

mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skyrad-cli")]
#[command(about = "Skyrad: geometry blocks for radiative-transfer input files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the geometry block from a TOML job file.
    Render {
        /// Path to the job configuration file.
        job: PathBuf,
        /// Output file (overrides the job file's output setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a job file without rendering anything.
    Validate {
        /// Path to the job configuration file.
        job: PathBuf,
    },
    /// Display the supported geometry variants.
    Variants,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { job, output } => {
            let job_config = config::load_config(&job)?;
            let block = job_config.geometry.to_string();

            let target = output.or_else(|| job_config.output.file.map(PathBuf::from));
            match target {
                Some(path) => {
                    std::fs::write(&path, &block)?;
                    eprintln!("Wrote {}", path.display());
                }
                None => print!("{block}"),
            }
            Ok(())
        }
        Commands::Validate { job } => {
            let _job_config = config::load_config(&job)?;
            println!("Job file is valid: {}", job.display());
            Ok(())
        }
        Commands::Variants => {
            println!("Supported geometry variants:");
            println!();
            println!("  0  User       — explicit solar/view angles, month, day");
            println!("  1  Meteosat   — month day gmt_decimal_hour column line");
            println!("  2  GoesEast   — month day gmt_decimal_hour column line");
            println!("  3  GoesWest   — month day gmt_decimal_hour column line");
            println!("  4  AvhrrPm    — month day gmt_decimal_hour column node_longitude node_hour");
            println!("  5  AvhrrAm    — month day gmt_decimal_hour column node_longitude node_hour");
            println!("  6  SpotHrv    — month day gmt_decimal_hour longitude latitude");
            println!("  7  LandsatTm  — month day gmt_decimal_hour longitude latitude");
            Ok(())
        }
    }
}

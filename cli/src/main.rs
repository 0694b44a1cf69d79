//! campus-paths command-line entrypoint.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use campus_paths_cli::{describe_route, list_buildings, ScriptDriver};
use campus_paths_core::{records, CampusMap};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campus-paths")]
#[command(author, version, about = "Shortest walking routes across campus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run graph command scripts; reads stdin when no file is given
    Script {
        files: Vec<PathBuf>,
    },

    /// Print walking directions between two buildings
    Route {
        #[command(flatten)]
        data: DataArgs,

        /// Short name of the starting building
        start: String,

        /// Short name of the destination building
        end: String,
    },

    /// List every building as SHORT: Long Name
    Buildings {
        #[command(flatten)]
        data: DataArgs,
    },
}

#[derive(Args)]
struct DataArgs {
    /// Building records (shortName,longName,x,y)
    #[arg(long, env = "CAMPUS_PATHS_BUILDINGS", default_value = "campus_buildings.csv")]
    buildings: PathBuf,

    /// Path segment records (x1,y1,x2,y2,distance)
    #[arg(long, env = "CAMPUS_PATHS_PATHS", default_value = "campus_paths.csv")]
    paths: PathBuf,
}

impl DataArgs {
    fn load(&self) -> anyhow::Result<CampusMap> {
        let buildings = records::load_buildings(&self.buildings)
            .with_context(|| format!("reading {}", self.buildings.display()))?;
        let paths = records::load_paths(&self.paths)
            .with_context(|| format!("reading {}", self.paths.display()))?;
        Ok(CampusMap::new(buildings, paths))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();

    match cli.command {
        Commands::Script { files } => {
            let mut driver = ScriptDriver::new(stdout.lock());
            if files.is_empty() {
                driver.run(io::stdin().lock())?;
            }
            for file in &files {
                let reader = File::open(file)
                    .with_context(|| format!("opening script {}", file.display()))?;
                driver.run(BufReader::new(reader))?;
            }
        }
        Commands::Route { data, start, end } => {
            let map = data.load()?;
            let text = describe_route(&map, &start, &end)?;
            writeln!(stdout.lock(), "{text}")?;
        }
        Commands::Buildings { data } => {
            let map = data.load()?;
            writeln!(stdout.lock(), "{}", list_buildings(&map))?;
        }
    }

    Ok(())
}

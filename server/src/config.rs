use std::path::PathBuf;

use clap::Parser;

use crate::state::DataSource;

/// Campus paths server: shortest walking routes between campus buildings.
#[derive(Parser, Debug, Clone)]
#[command(name = "campus-paths-server")]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Building records (shortName,longName,x,y)
    #[arg(long, default_value = "campus_buildings.csv", env = "CAMPUS_PATHS_BUILDINGS")]
    pub buildings: PathBuf,

    /// Path segment records (x1,y1,x2,y2,distance)
    #[arg(long, default_value = "campus_paths.csv", env = "CAMPUS_PATHS_PATHS")]
    pub paths: PathBuf,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "CAMPUS_PATHS_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 4567, env = "CAMPUS_PATHS_PORT")]
    pub port: u16,
}

impl Settings {
    pub fn data_source(&self) -> DataSource {
        DataSource {
            buildings: self.buildings.clone(),
            paths: self.paths.clone(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

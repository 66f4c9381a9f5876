use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable that overrides the default dataset directory.
pub const DATA_DIR_ENV: &str = "FLIGHTNET_DATA_DIR";

const AIRPORTS_FILENAME: &str = "airports.csv";
const AIRLINES_FILENAME: &str = "airlines.csv";
const FLIGHTS_FILENAME: &str = "flights.csv";

/// Paths to the dataset files.
///
/// Returned by [`resolve_dataset`] once every file has been confirmed to
/// exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Directory holding the CSV files.
    pub root: PathBuf,
    pub airports: PathBuf,
    pub airlines: PathBuf,
    pub flights: PathBuf,
}

impl DatasetPaths {
    /// Expected file layout inside a dataset directory.
    pub fn for_dir(dir: &Path) -> Self {
        Self {
            root: dir.to_path_buf(),
            airports: dir.join(AIRPORTS_FILENAME),
            airlines: dir.join(AIRLINES_FILENAME),
            flights: dir.join(FLIGHTS_FILENAME),
        }
    }

    fn ensure_present(self) -> Result<Self> {
        for path in [&self.airports, &self.airlines, &self.flights] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(self)
    }
}

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "flightnet", "flightnet")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Locate the dataset files.
///
/// Resolution order: the explicit `target` (CLI `--data-dir`), then the
/// `FLIGHTNET_DATA_DIR` environment variable, then the platform data
/// directory.
pub fn resolve_dataset(target: Option<&Path>) -> Result<DatasetPaths> {
    let dir = match target {
        Some(path) => path.to_path_buf(),
        None => match env::var_os(DATA_DIR_ENV) {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => default_dataset_dir()?,
        },
    };

    debug!(dir = %dir.display(), "resolved dataset directory");
    DatasetPaths::for_dir(&dir).ensure_present()
}

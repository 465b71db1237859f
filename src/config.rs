//! Application-level configuration loading, including the song catalog.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{info, warn};

use crate::state::catalog::{Catalog, Song};

/// Default location on disk where the server looks for the song catalog.
const DEFAULT_CATALOG_PATH: &str = "config/songs.json";
/// Environment variable that overrides [`DEFAULT_CATALOG_PATH`].
const CATALOG_PATH_ENV: &str = "LYRIC_MATCH_CATALOG_PATH";
/// Environment variable naming the single origin allowed to call the API.
const ALLOWED_ORIGIN_ENV: &str = "LYRIC_MATCH_ALLOWED_ORIGIN";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
/// Immutable server settings read from the environment.
pub struct ServerConfig {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Single origin allowed by CORS (`*` for any).
    pub allowed_origin: String,
    /// Location of the song catalog file.
    pub catalog_path: PathBuf,
}

impl ServerConfig {
    /// Read the server settings, falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let allowed_origin = env::var(ALLOWED_ORIGIN_ENV)
            .ok()
            .filter(|origin| !origin.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into());

        Self {
            port,
            allowed_origin,
            catalog_path: resolve_catalog_path(),
        }
    }
}

/// Load the song catalog from disk, falling back to the built-in catalog.
pub fn load_catalog(path: &Path) -> Catalog {
    match fs::read_to_string(path) {
        Ok(contents) => match parse_catalog(&contents) {
            Ok(catalog) => {
                info!(
                    path = %path.display(),
                    count = catalog.len(),
                    "loaded song catalog"
                );
                catalog
            }
            Err(reason) => {
                warn!(
                    path = %path.display(),
                    error = %reason,
                    "failed to parse song catalog; falling back to defaults"
                );
                Catalog::default()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                path = %path.display(),
                "song catalog not found; using built-in catalog"
            );
            Catalog::default()
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "failed to read song catalog; falling back to defaults"
            );
            Catalog::default()
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the catalog file located at [`DEFAULT_CATALOG_PATH`].
struct RawCatalog {
    songs: Vec<Song>,
}

/// Parse a catalog document, dropping entries with a blank title or artist.
fn parse_catalog(contents: &str) -> Result<Catalog, String> {
    let raw = serde_json::from_str::<RawCatalog>(contents).map_err(|err| err.to_string())?;

    let songs = raw
        .songs
        .into_iter()
        .filter(|song| {
            let usable = !song.title.trim().is_empty() && !song.artist.trim().is_empty();
            if !usable {
                warn!(title = %song.title, artist = %song.artist, "skipping incomplete catalog entry");
            }
            usable
        })
        .collect();

    Catalog::new(songs).map_err(|err| err.to_string())
}

/// Resolve the catalog path taking the environment override into account.
fn resolve_catalog_path() -> PathBuf {
    env::var_os(CATALOG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}

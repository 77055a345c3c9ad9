use crate::date::MissionDate;
use crate::error::{AppError, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub const NO_FLY_ZONES_PATH: &str = "buildings/no-fly-zones.geojson";

/// Anything that can serve the map server's documents by relative path.
pub trait MapSource {
    fn fetch(&self, path: &str) -> Result<String>;
}

pub fn sensors_path(date: &MissionDate) -> String {
    format!("maps/{}/air-quality-data.json", date.path_segment())
}

/// `words/w1/w2/w3/details.json` for a `w1.w2.w3` location.
pub fn details_path(location: &str) -> Result<String> {
    let words: Vec<&str> = location.split('.').collect();
    if words.len() != 3 || words.iter().any(|word| word.is_empty()) {
        return Err(AppError::InvalidLocation(location.to_string()));
    }
    Ok(format!("words/{}/details.json", words.join("/")))
}

/// Fetches documents from the map web server.
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(host: &str, port: u16, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: format!("http://{}:{}", host, port),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl MapSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "fetching");
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(url));
        }
        if !status.is_success() {
            return Err(AppError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

/// Reads the same paths from a local copy of the server's files.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl MapSource for DirectorySource {
    fn fetch(&self, path: &str) -> Result<String> {
        let file = self.root.join(path);
        debug!(file = %file.display(), "reading");
        std::fs::read_to_string(&file).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound(file.display().to_string()),
            _ => AppError::Io(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_server_layout() {
        let date = MissionDate::new(5, 4, 2021).unwrap();
        assert_eq!(sensors_path(&date), "maps/2021/04/05/air-quality-data.json");
        assert_eq!(
            details_path("slips.mass.baking").unwrap(),
            "words/slips/mass/baking/details.json"
        );
    }

    #[test]
    fn malformed_locations_are_rejected() {
        for location in ["two.words", "a..c", "a.b.c.d", ""] {
            assert!(matches!(
                details_path(location),
                Err(AppError::InvalidLocation(_))
            ));
        }
    }

    #[test]
    fn directory_source_reads_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("buildings")).unwrap();
        std::fs::write(dir.path().join(NO_FLY_ZONES_PATH), "{}").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.fetch(NO_FLY_ZONES_PATH).unwrap(), "{}");
        assert!(matches!(
            source.fetch("maps/2020/01/01/air-quality-data.json"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn http_source_builds_base_url() {
        let source = HttpSource::new("localhost", 9898, Duration::from_secs(1)).unwrap();
        assert_eq!(source.base_url(), "http://localhost:9898");
    }
}

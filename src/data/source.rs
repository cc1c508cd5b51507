use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::CatalogError;

// Embed the gzipped star catalog
pub const STARS_TXT_GZ: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/stars.txt.gz"));

// Embed the star name overrides
pub const STARNAMES_TXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/starnames.txt"));

/// Where a catalog resource is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    Bundled,
    Path(PathBuf),
}

impl Source {
    pub fn from_option(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::Path(PathBuf::from(p)),
            None => Self::Bundled,
        }
    }

    /// Name used in log lines and load issues.
    pub fn describe(&self, bundled_name: &str) -> String {
        match self {
            Self::Bundled => bundled_name.to_string(),
            Self::Path(p) => p.display().to_string(),
        }
    }

    pub(crate) fn open_stars(&self) -> Result<Box<dyn BufRead>, CatalogError> {
        match self {
            Self::Bundled => Ok(Box::new(BufReader::new(GzDecoder::new(STARS_TXT_GZ)))),
            Self::Path(p) => open_file(p),
        }
    }

    pub(crate) fn open_names(&self) -> Result<Box<dyn BufRead>, CatalogError> {
        match self {
            Self::Bundled => Ok(Box::new(STARNAMES_TXT.as_bytes())),
            Self::Path(p) => open_file(p),
        }
    }
}

fn open_file(path: &Path) -> Result<Box<dyn BufRead>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Unavailable {
        resource: path.display().to_string(),
        source,
    })?;
    // Transparently accept gzipped overrides, like the bundled catalog
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

//! Locator parsing
//!
//! A locator is the string handed to the collection view. `http://` and
//! `https://` URLs are fetched over the network, `file://` URLs and bare
//! paths are read from disk.

use std::fmt;
use std::path::PathBuf;

use rdeck_core::prelude::*;
use url::Url;

/// A parsed recipe source locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocator {
    Http(Url),
    File(PathBuf),
}

impl SourceLocator {
    pub fn parse(locator: &str) -> Result<Self> {
        let trimmed = locator.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_locator(locator));
        }

        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Http(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Self::File)
                .map_err(|_| Error::invalid_locator(locator)),
            // Single-letter schemes are Windows drive prefixes, not URLs
            Ok(url) if url.scheme().len() > 1 => Err(Error::invalid_locator(locator)),
            _ => Ok(Self::File(PathBuf::from(trimmed))),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

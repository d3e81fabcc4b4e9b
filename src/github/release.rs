use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// A release as returned by `GET /repos/:owner/:repo/releases/latest`.
///
/// Every field is optional on the wire: absent keys and `null` values both
/// decode to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tarball_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub zipball_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
}

impl Release {
    pub fn archive_url(&self, format: ArchiveFormat) -> &str {
        match format {
            ArchiveFormat::TarGz => &self.tarball_url,
            ArchiveFormat::Zip => &self.zipball_url,
        }
    }
}

pub fn parse(bytes: &[u8]) -> Result<Release> {
    serde_json::from_slice::<Release>(bytes).map_err(|cause| Error::DecodeError { cause })
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArchiveFormat {
    #[default]
    TarGz,
    Zip,
}

impl ArchiveFormat {
    pub fn archive_name(&self) -> &'static str {
        match self {
            ArchiveFormat::TarGz => "tarball",
            ArchiveFormat::Zip => "zipball",
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tar" | "tar.gz" | "tarball" => Ok(ArchiveFormat::TarGz),
            "zip" | "zipball" => Ok(ArchiveFormat::Zip),
            other => Err(format!("unknown archive format: {}", other)),
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.archive_name())
    }
}

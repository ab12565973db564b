//! Project metadata from `pubspec.yaml`

use crate::bundler::PackageSettings;
use crate::error::{CliError, Result};
use serde::{Deserialize, Deserializer, de::Error as _};
use std::path::Path;

/// File name of the project manifest.
pub const PUBSPEC_FILE: &str = "pubspec.yaml";

/// Metadata read from the project's `pubspec.yaml`.
///
/// Only `name` is required; the other fields default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectMetadata {
    /// Project name, also the executable name
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: String,

    /// Project version (e.g., "1.2.3")
    #[serde(default, deserialize_with = "scalar_string")]
    pub version: String,

    /// Project author
    #[serde(default, deserialize_with = "scalar_string")]
    pub author: String,

    /// Project description
    #[serde(default, deserialize_with = "scalar_string")]
    pub description: String,
}

impl ProjectMetadata {
    /// Loads `<project_dir>/pubspec.yaml`.
    ///
    /// Fails if the file cannot be read or parsed, or `name` is empty.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(PUBSPEC_FILE);
        let contents =
            std::fs::read_to_string(&path).map_err(|e| CliError::MetadataUnreadable {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        let metadata = Self::parse(&contents).map_err(|e| match e {
            ParseError::Yaml(source) => CliError::MetadataInvalid { path, source },
            ParseError::Missing(field) => CliError::MissingMetadata { field },
        })?;
        Ok(metadata)
    }

    fn parse(contents: &str) -> std::result::Result<Self, ParseError> {
        let metadata: Self = serde_yaml_ng::from_str(contents).map_err(ParseError::Yaml)?;
        if metadata.name.trim().is_empty() {
            return Err(ParseError::Missing("name"));
        }
        Ok(metadata)
    }
}

#[derive(Debug)]
enum ParseError {
    Yaml(serde_yaml_ng::Error),
    Missing(&'static str),
}

/// Accepts any YAML scalar, so `version: 2` and an empty `author:` load as strings.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    match serde_yaml_ng::Value::deserialize(deserializer)? {
        serde_yaml_ng::Value::Null => Ok(String::new()),
        serde_yaml_ng::Value::String(s) => Ok(s),
        serde_yaml_ng::Value::Number(n) => Ok(n.to_string()),
        serde_yaml_ng::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected a scalar, found {other:?}"))),
    }
}

impl From<ProjectMetadata> for PackageSettings {
    fn from(metadata: ProjectMetadata) -> Self {
        PackageSettings {
            name: metadata.name,
            version: metadata.version,
            description: metadata.description,
            author: Some(metadata.author).filter(|a| !a.is_empty()),
        }
    }
}

use serde::Serialize;

use super::document::MirrorSpec;

/// A download mirror, optionally named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mirror {
    pub name: Option<String>,
    pub location: String,
}

/// Configured data mirrors in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MirrorSet(Vec<Mirror>);

impl MirrorSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mirror> {
        self.0.iter()
    }
}

impl From<MirrorSpec> for MirrorSet {
    fn from(spec: MirrorSpec) -> Self {
        let mirrors = match spec {
            MirrorSpec::List(locations) => {
                locations.into_iter().map(|location| Mirror { name: None, location }).collect()
            }
            MirrorSpec::Named(entries) => entries
                .into_iter()
                .map(|(name, location)| Mirror { name: Some(name), location })
                .collect(),
        };
        MirrorSet(mirrors)
    }
}

/// Named download command templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DownloadCommandTable(Vec<(String, String)>);

impl DownloadCommandTable {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, command)| command.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, command)| (name.as_str(), command.as_str()))
    }
}

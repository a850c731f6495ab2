//! Raw registry document (`config.yml`) as parsed from YAML.
//!
//! Every top-level section is optional here. Presence rules are enforced by
//! validation, not by parsing.

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use super::directories::DirectoriesSection;
use super::name_list::NameList;
use super::scalar::{self, ScalarString};
use crate::domain::AppError;

/// Top-level registry document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistryDocument {
    #[serde(default)]
    pub data_mirrors: Option<MirrorSpec>,
    #[serde(default, deserialize_with = "optional_ordered")]
    pub download_commands: Option<Vec<(String, String)>>,
    #[serde(default)]
    pub directories: Option<DirectoriesSection>,
    #[serde(default, deserialize_with = "optional_ordered")]
    pub datasets: Option<Vec<(String, DatasetEntry)>>,
    #[serde(default, deserialize_with = "optional_ordered")]
    pub benchmarks: Option<Vec<(String, BenchmarkEntry)>>,
}

impl RegistryDocument {
    /// Parse registry YAML. `origin` names the source in error messages.
    ///
    /// An empty or `null` document is an empty mapping. Anything other than a
    /// mapping at the top level is a parse error. Merge keys (`<<: *anchor`)
    /// are applied before the sections are read.
    pub fn parse(content: &str, origin: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::parse_error(origin, e))?;
        value.apply_merge().map_err(|e| AppError::parse_error(origin, e))?;

        match value {
            serde_yaml::Value::Null => Ok(Self::default()),
            serde_yaml::Value::Mapping(_) => {
                serde_yaml::from_value(value).map_err(|e| AppError::parse_error(origin, e))
            }
            other => Err(AppError::parse_error(
                origin,
                format!("top-level document must be a mapping, found {}", describe(&other)),
            )),
        }
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

/// `data_mirrors` section: a list of locations, or a mapping of name to location.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MirrorSpec {
    List(Vec<String>),
    Named(#[serde(deserialize_with = "ordered")] Vec<(String, String)>),
}

/// One entry of the `datasets` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatasetEntry {
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub end_point: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional_string")]
    pub download_command: Option<String>,
}

/// One entry of the `benchmarks` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BenchmarkEntry {
    #[serde(default)]
    pub datasets: Option<NameList>,
    #[serde(default)]
    pub dependencies: Option<NameList>,
    #[serde(default, deserialize_with = "scalar::optional_flag")]
    pub is_example: Option<bool>,
    #[serde(default)]
    pub types: Option<NameList>,
}

/// Mapping deserialized into `(key, value)` pairs in document order.
///
/// Scalar keys are read as text. Null values become `T::default()`;
/// duplicate keys are rejected.
struct OrderedEntries<T>(Vec<(String, T)>);

impl<'de, T> Deserialize<'de> for OrderedEntries<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for EntriesVisitor<T>
        where
            T: Deserialize<'de> + Default,
        {
            type Value = OrderedEntries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping with scalar keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut seen = HashSet::new();
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(ScalarString(key)) = map.next_key()? {
                    if !seen.insert(key.clone()) {
                        return Err(de::Error::custom(format!("duplicate key '{}'", key)));
                    }
                    let value = map.next_value::<Option<T>>()?.unwrap_or_default();
                    entries.push((key, value));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

fn ordered<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    OrderedEntries::deserialize(deserializer).map(|entries| entries.0)
}

fn optional_ordered<'de, D, T>(deserializer: D) -> Result<Option<Vec<(String, T)>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<OrderedEntries<T>>::deserialize(deserializer)
        .map(|entries| entries.map(|entries| entries.0))
}

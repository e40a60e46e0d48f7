// ABOUTME: Custom serde deserializers for app config fields.
// ABOUTME: Accepts string-or-list commands and list-or-map environments.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(untagged)]
enum CommandEntry {
    Line(String),
    Tokens(Vec<String>),
}

/// A command given as a token list is joined with single spaces.
pub fn deserialize_command<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entry: Option<CommandEntry> = Option::deserialize(deserializer)?;
    Ok(match entry {
        None => None,
        Some(CommandEntry::Line(line)) => Some(line),
        Some(CommandEntry::Tokens(tokens)) => Some(tokens.join(" ")),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EnvEntries {
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

/// Environment is kept in `KEY=VALUE` form; a map is flattened in key order.
pub fn deserialize_env<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries: Option<EnvEntries> = Option::deserialize(deserializer)?;
    Ok(match entries {
        None => Vec::new(),
        Some(EnvEntries::List(list)) => list,
        Some(EnvEntries::Map(map)) => map.into_iter().map(|(k, v)| format!("{k}={v}")).collect(),
    })
}

//! The lab definitions document: command size table and documented commands.
//!
//! The file is relaxed JSON (comments and trailing commas are tolerated). It is
//! parsed in two steps so that syntax errors and structural errors surface as
//! different failures.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::GenerateError;
use crate::core::paths::ACTION_SLOTS;

/// Known command for one slot: display name and ordered argument type tags.
///
/// Tags are kept as raw JSON values; anything other than the string
/// `"single"` (including `null` or a number) is an int parameter.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandDescriptor {
    pub name: String,
    pub arguments: Vec<serde_json::Value>,
}

/// Document as written on disk. Descriptors stay untyped until their key is
/// known to name a slot.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DefsFile {
    command_sizes: Vec<String>,
    command_map: BTreeMap<String, serde_json::Value>,
}

/// Parsed definitions.
#[derive(Clone, Debug, Default)]
pub struct LabDefs {
    /// Hex strings, one per slot: parameter block size plus header.
    pub command_sizes: Vec<String>,
    /// Keyed by the decimal slot index.
    pub command_map: BTreeMap<String, CommandDescriptor>,
    /// CommandMap keys that name no slot. Their values are never decoded.
    pub ignored_keys: Vec<String>,
}

impl LabDefs {
    /// Descriptor documented for the slot, if any.
    pub fn descriptor(&self, index: usize) -> Option<&CommandDescriptor> {
        self.command_map.get(&index.to_string())
    }

    /// CommandMap keys that can never match a slot.
    pub fn unmatched_keys(&self) -> Vec<&str> {
        self.ignored_keys
            .iter()
            .chain(self.command_map.keys())
            .filter(|k| !is_slot_key(k))
            .map(String::as_str)
            .collect()
    }
}

/// True when `key` is the canonical decimal form of a slot index.
pub fn is_slot_key(key: &str) -> bool {
    match key.parse::<usize>() {
        Ok(i) => i < ACTION_SLOTS && i.to_string() == key,
        Err(_) => false,
    }
}

/// Parse a definitions document from text.
pub fn parse_defs(content: &str) -> Result<LabDefs, GenerateError> {
    let value: serde_json::Value = json5::from_str(content)?;
    let file: DefsFile = serde_json::from_value(value)
        .map_err(|e| GenerateError::ConfigShape(e.to_string()))?;

    if file.command_sizes.len() < ACTION_SLOTS {
        return Err(GenerateError::ConfigShape(format!(
            "CommandSizes has {} entries, expected at least {}",
            file.command_sizes.len(),
            ACTION_SLOTS
        )));
    }

    let mut command_map = BTreeMap::new();
    let mut ignored_keys = Vec::new();
    for (key, raw) in file.command_map {
        if !is_slot_key(&key) {
            ignored_keys.push(key);
            continue;
        }
        let descriptor: CommandDescriptor = serde_json::from_value(raw)
            .map_err(|e| GenerateError::ConfigShape(format!("CommandMap[{:?}]: {}", key, e)))?;
        command_map.insert(key, descriptor);
    }

    Ok(LabDefs {
        command_sizes: file.command_sizes,
        command_map,
        ignored_keys,
    })
}

/// Read and parse the definitions file. The file is fully read before parsing.
pub fn load_defs(path: &Path) -> Result<LabDefs, GenerateError> {
    let content = fs::read_to_string(path).map_err(|source| GenerateError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let defs = parse_defs(&content)?;
    log::info!(
        "Read {} command sizes and {} documented commands from {}",
        defs.command_sizes.len(),
        defs.command_map.len(),
        path.display()
    );
    Ok(defs)
}

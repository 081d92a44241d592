//! JSON override files.
//!
//! ```json
//! {
//!   "extend_defaults": true,
//!   "overrides": [
//!     { "virtual_key": "UP", "scan_code": "DIK_NUMPAD8" },
//!     { "virtual_key": 65, "scan_code": 30 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::key_codes::{ScanCode, VirtualKeyCode};
use crate::key_mapping::OverrideTable;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Code {
    Number(u16),
    Name(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverrideEntry {
    pub virtual_key: Code,
    pub scan_code: Code,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverrideConfig {
    /// Put the file's entries in front of the built-in pairs instead of replacing them.
    #[serde(default = "default_extend")]
    pub extend_defaults: bool,
    #[serde(default)]
    pub overrides: Vec<OverrideEntry>,
}

fn default_extend() -> bool {
    true
}

impl OverrideConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        log::debug!("loaded {} overrides from {}", config.overrides.len(), path.display());
        Ok(config)
    }

    /// Builds the table. File entries replace built-in pairs for the same key.
    pub fn into_table(self) -> Result<OverrideTable> {
        let mut pairs = Vec::with_capacity(self.overrides.len());
        for entry in self.overrides {
            let vk = match entry.virtual_key {
                Code::Number(n) => VirtualKeyCode(n),
                Code::Name(name) => name.parse::<VirtualKeyCode>()?,
            };
            let scan = match entry.scan_code {
                Code::Number(n) => ScanCode(n),
                Code::Name(name) => name.parse::<ScanCode>()?,
            };
            pairs.push((vk, scan));
        }
        if self.extend_defaults {
            let shadowed: HashSet<VirtualKeyCode> = pairs.iter().map(|(vk, _)| *vk).collect();
            pairs.extend(
                OverrideTable::builtin()
                    .pairs()
                    .iter()
                    .filter(|(vk, _)| !shadowed.contains(vk)),
            );
        }
        Ok(OverrideTable::new(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::key_mapping::KEY_CODE_PAIRS;

    #[test]
    fn file_entries_shadow_builtin() {
        let table = OverrideConfig::from_json(
            r#"{ "overrides": [
                { "virtual_key": "VK_UP", "scan_code": "DIK_NUMPAD8" },
                { "virtual_key": 65, "scan_code": 30 }
            ] }"#,
        )
        .unwrap()
        .into_table()
        .unwrap();

        assert_eq!(table.get(VirtualKeyCode::UP), Some(ScanCode::DIK_NUMPAD8));
        assert_eq!(table.get(VirtualKeyCode::A), Some(ScanCode::DIK_A));
        assert_eq!(table.get(VirtualKeyCode::DIVIDE), Some(ScanCode::DIK_DIVIDE));
        assert_eq!(table.len(), KEY_CODE_PAIRS.len() + 1);
    }

    #[test]
    fn shadowed_builtin_pairs_are_dropped() {
        let table = OverrideConfig::from_json(
            r#"{ "overrides": [{ "virtual_key": "UP", "scan_code": "DIK_NUMPAD8" }] }"#,
        )
        .unwrap()
        .into_table()
        .unwrap();

        let mut seen = HashSet::new();
        assert!(table.pairs().iter().all(|(vk, _)| seen.insert(*vk)));
        assert_eq!(table.pairs()[0], (VirtualKeyCode::UP, ScanCode::DIK_NUMPAD8));
        assert!(!table.pairs().contains(&(VirtualKeyCode::UP, ScanCode::DIK_UP)));
        assert_eq!(table.len(), KEY_CODE_PAIRS.len());
    }

    #[test]
    fn replace_builtin() {
        let table = OverrideConfig::from_json(
            r#"{ "extend_defaults": false,
                 "overrides": [{ "virtual_key": "A", "scan_code": "0x1E" }] }"#,
        )
        .unwrap()
        .into_table()
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(VirtualKeyCode::UP), None);
        assert_eq!(table.get(VirtualKeyCode::A), Some(ScanCode::DIK_A));
    }

    #[test]
    fn empty_object_is_builtin() {
        let table = OverrideConfig::from_json("{}").unwrap().into_table().unwrap();
        assert_eq!(table.pairs(), OverrideTable::builtin().pairs());
    }

    #[test]
    fn unknown_name() {
        let err = OverrideConfig::from_json(
            r#"{ "overrides": [{ "virtual_key": "VK_BOGUS", "scan_code": 1 }] }"#,
        )
        .unwrap()
        .into_table()
        .unwrap_err();
        assert!(matches!(err, Error::UnknownKey(name) if name == "VK_BOGUS"));
    }

    #[test]
    fn bad_json() {
        assert!(matches!(OverrideConfig::from_json("{"), Err(Error::Json(_))));
        assert!(matches!(
            OverrideConfig::load("/nonexistent/vk2dik.json"),
            Err(Error::Io(_))
        ));
    }
}

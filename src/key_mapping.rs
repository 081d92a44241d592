//! Virtual keys whose scan code is fixed instead of asking the keyboard layout.
//!
//! The OS translation loses the extended bit for navigation keys and does not
//! tell left from right modifiers, so these are pinned to their `DIK_*` values.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::key_codes::{ScanCode, VirtualKeyCode};

pub const KEY_CODE_PAIRS: [(VirtualKeyCode, ScanCode); 15] = [
    (VirtualKeyCode::UP, ScanCode::DIK_UP),
    (VirtualKeyCode::DOWN, ScanCode::DIK_DOWN),
    (VirtualKeyCode::LEFT, ScanCode::DIK_LEFT),
    (VirtualKeyCode::RIGHT, ScanCode::DIK_RIGHT),
    (VirtualKeyCode::INSERT, ScanCode::DIK_INSERT),
    (VirtualKeyCode::HOME, ScanCode::DIK_HOME),
    (VirtualKeyCode::PRIOR, ScanCode::DIK_PRIOR),
    (VirtualKeyCode::DELETE, ScanCode::DIK_DELETE),
    (VirtualKeyCode::END, ScanCode::DIK_END),
    (VirtualKeyCode::NEXT, ScanCode::DIK_NEXT),
    (VirtualKeyCode::LMENU, ScanCode::DIK_LMENU),
    (VirtualKeyCode::RMENU, ScanCode::DIK_RMENU),
    (VirtualKeyCode::LCONTROL, ScanCode::DIK_LCONTROL),
    (VirtualKeyCode::RCONTROL, ScanCode::DIK_RCONTROL),
    (VirtualKeyCode::DIVIDE, ScanCode::DIK_DIVIDE),
];

static BUILTIN: Lazy<OverrideTable> = Lazy::new(|| OverrideTable::new(KEY_CODE_PAIRS));

/// Ordered list of `(virtual key, scan code)` pairs.
///
/// Lookups are indexed, but when a virtual key appears more than once the
/// first pair in table order is the one returned.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    pairs: Vec<(VirtualKeyCode, ScanCode)>,
    index: HashMap<VirtualKeyCode, ScanCode>,
}

impl OverrideTable {
    pub fn new(pairs: impl IntoIterator<Item = (VirtualKeyCode, ScanCode)>) -> Self {
        let mut table = OverrideTable::default();
        for (vk, scan) in pairs {
            match table.index.entry(vk) {
                Entry::Vacant(slot) => {
                    slot.insert(scan);
                }
                Entry::Occupied(first) => {
                    log::warn!("duplicate override for {vk}: keeping {}, ignoring {scan}", first.get());
                }
            }
            table.pairs.push((vk, scan));
        }
        table
    }

    /// The built-in table ([`KEY_CODE_PAIRS`]).
    pub fn builtin() -> &'static OverrideTable {
        Lazy::force(&BUILTIN)
    }

    pub fn get(&self, vk: VirtualKeyCode) -> Option<ScanCode> {
        self.index.get(&vk).copied()
    }

    /// Pairs in table order, duplicates included.
    pub fn pairs(&self) -> &[(VirtualKeyCode, ScanCode)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

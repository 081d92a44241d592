//! Translate Windows virtual key codes into DirectInput scan codes.
//!
//! A fixed override table is consulted first; everything else goes through
//! the keyboard layout of the calling thread (`MapVirtualKeyEx` on Windows).
//! A result of `ScanCode(0)` means no mapping is known.

pub mod config;
pub mod error;
pub mod key_codes;
pub mod key_mapping;
pub mod set1;
#[cfg(windows)]
pub mod system;
pub mod translator;

pub use error::{Error, Result};
pub use key_codes::{ScanCode, VirtualKeyCode};
pub use key_mapping::{OverrideTable, KEY_CODE_PAIRS};
#[cfg(windows)]
pub use system::{to_dik, SystemLayout};
pub use translator::{KeyboardLayout, LocaleId, Translator, Unmapped};

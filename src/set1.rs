//! DirectInput scan codes are set 1 make codes with the `0xE0` prefix folded
//! into bit 7, so `pc-keyboard`'s set 1 decoder can name them.

use pc_keyboard::{KeyCode, KeyState, ScancodeSet, ScancodeSet1};

use crate::key_codes::ScanCode;

/// Physical key `scan` refers to, if set 1 defines one.
pub fn describe(scan: ScanCode) -> Option<KeyCode> {
    let mut decoder = ScancodeSet1::new();
    let mut event = None;
    for byte in scan.set1_bytes() {
        event = decoder.advance_state(byte).ok()?;
    }
    event.filter(|ev| ev.state == KeyState::Down).map(|ev| ev.code)
}

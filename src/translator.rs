//! Virtual key to scan code translation.

use std::borrow::Cow;

use crate::key_codes::{ScanCode, VirtualKeyCode};
use crate::key_mapping::OverrideTable;

/// `uMapType` asking `MapVirtualKeyEx` for a scan code.
pub const MAPVK_VK_TO_VSC: u32 = 0;

/// Thread id meaning "the calling thread" for `GetKeyboardLayout`.
pub const CURRENT_THREAD: u32 = 0;

/// Opaque input locale identifier (an `HKL` on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LocaleId(pub usize);

/// Source of keyboard layout state, normally the OS.
pub trait KeyboardLayout {
    /// Active input locale of `thread_id`, or of the calling thread for [`CURRENT_THREAD`].
    fn active_layout(&self, thread_id: u32) -> LocaleId;

    /// Translates `code` under `layout`. Zero when there is no translation.
    fn map_virtual_key(&self, code: u32, map_type: u32, layout: LocaleId) -> u32;
}

impl<T: KeyboardLayout + ?Sized> KeyboardLayout for &T {
    fn active_layout(&self, thread_id: u32) -> LocaleId {
        (**self).active_layout(thread_id)
    }

    fn map_virtual_key(&self, code: u32, map_type: u32, layout: LocaleId) -> u32 {
        (**self).map_virtual_key(code, map_type, layout)
    }
}

/// A layout with no translations at all. Only the override table applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmapped;

impl KeyboardLayout for Unmapped {
    fn active_layout(&self, _thread_id: u32) -> LocaleId {
        LocaleId::default()
    }

    fn map_virtual_key(&self, _code: u32, _map_type: u32, _layout: LocaleId) -> u32 {
        0
    }
}

#[derive(Debug, Clone)]
pub struct Translator<L> {
    layout: L,
    overrides: Cow<'static, OverrideTable>,
}

impl<L: KeyboardLayout> Translator<L> {
    /// Translator using the built-in override table.
    pub fn new(layout: L) -> Self {
        Self {
            layout,
            overrides: Cow::Borrowed(OverrideTable::builtin()),
        }
    }

    pub fn with_overrides(layout: L, overrides: OverrideTable) -> Self {
        Self {
            layout,
            overrides: Cow::Owned(overrides),
        }
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Scan code for `vk`.
    ///
    /// Returns [`ScanCode::NONE`] when neither the override table nor the
    /// active keyboard layout knows the key.
    pub fn translate(&self, vk: VirtualKeyCode) -> ScanCode {
        if let Some(scan) = self.overrides.get(vk) {
            return scan;
        }

        let locale = self.layout.active_layout(CURRENT_THREAD);
        let raw = self.layout.map_virtual_key(u32::from(vk.0), MAPVK_VK_TO_VSC, locale);
        log::trace!("{vk} not overridden, layout {:#x} maps it to {raw:#x}", locale.0);

        ScanCode(raw as u16)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    struct FakeLayout {
        locale: LocaleId,
        scan_codes: HashMap<u32, u32>,
        calls: RefCell<Vec<(u32, u32, LocaleId)>>,
        threads: RefCell<Vec<u32>>,
    }

    impl FakeLayout {
        fn new(scan_codes: &[(u32, u32)]) -> Self {
            Self {
                locale: LocaleId(0x0411_0411),
                scan_codes: scan_codes.iter().copied().collect(),
                calls: RefCell::default(),
                threads: RefCell::default(),
            }
        }
    }

    impl KeyboardLayout for FakeLayout {
        fn active_layout(&self, thread_id: u32) -> LocaleId {
            self.threads.borrow_mut().push(thread_id);
            self.locale
        }

        fn map_virtual_key(&self, code: u32, map_type: u32, layout: LocaleId) -> u32 {
            self.calls.borrow_mut().push((code, map_type, layout));
            self.scan_codes.get(&code).copied().unwrap_or(0)
        }
    }

    #[test]
    fn overrides_skip_the_layout() {
        let layout = FakeLayout::new(&[(0x26, 0x48), (0x6F, 0x35), (0xA4, 0x99)]);
        let translator = Translator::new(&layout);

        assert_eq!(translator.translate(VirtualKeyCode::UP), ScanCode::DIK_UP);
        assert_eq!(translator.translate(VirtualKeyCode::DIVIDE), ScanCode::DIK_DIVIDE);
        assert_eq!(translator.translate(VirtualKeyCode::LMENU), ScanCode::DIK_LMENU);
        assert!(layout.calls.borrow().is_empty());
        assert!(layout.threads.borrow().is_empty());
    }

    #[test]
    fn fallback_asks_current_thread_layout() {
        let layout = FakeLayout::new(&[(0x41, 0x1E)]);
        let translator = Translator::new(&layout);

        assert_eq!(translator.translate(VirtualKeyCode::A), ScanCode::DIK_A);
        assert_eq!(*layout.threads.borrow(), vec![CURRENT_THREAD]);
        assert_eq!(*layout.calls.borrow(), vec![(0x41, MAPVK_VK_TO_VSC, layout.locale)]);
    }

    #[test]
    fn untranslatable_is_zero() {
        let translator = Translator::new(FakeLayout::new(&[]));
        assert_eq!(translator.translate(VirtualKeyCode(0xFF)), ScanCode::NONE);
        assert_eq!(translator.translate(VirtualKeyCode(0xFFFF)), ScanCode::NONE);
    }

    #[test]
    fn out_of_range_code_passes_through() {
        let layout = FakeLayout::new(&[(0x1234, 0x42)]);
        let translator = Translator::new(&layout);
        assert_eq!(translator.translate(VirtualKeyCode(0x1234)), ScanCode(0x42));
        assert_eq!(layout.calls.borrow()[0].0, 0x1234);
    }

    #[test]
    fn repeated_calls_agree() {
        let translator = Translator::new(FakeLayout::new(&[(0x41, 0x1E)]));
        let first = translator.translate(VirtualKeyCode::A);
        for _ in 0..3 {
            assert_eq!(translator.translate(VirtualKeyCode::A), first);
        }
    }

    #[test]
    fn custom_table_first_match_wins() {
        let table = OverrideTable::new([
            (VirtualKeyCode::A, ScanCode::DIK_Z),
            (VirtualKeyCode::A, ScanCode::DIK_A),
        ]);
        let translator = Translator::with_overrides(Unmapped, table);
        assert_eq!(translator.translate(VirtualKeyCode::A), ScanCode::DIK_Z);
        assert_eq!(translator.translate(VirtualKeyCode::UP), ScanCode::NONE);
    }
}

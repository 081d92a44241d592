use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetKeyboardLayout, MapVirtualKeyExW, HKL, MAP_VIRTUAL_KEY_TYPE,
};

use crate::key_codes::{ScanCode, VirtualKeyCode};
use crate::translator::{KeyboardLayout, LocaleId, Translator};

/// The calling thread's keyboard layout, as seen by user32.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLayout;

impl KeyboardLayout for SystemLayout {
    fn active_layout(&self, thread_id: u32) -> LocaleId {
        let hkl = unsafe { GetKeyboardLayout(thread_id) };
        LocaleId(hkl.0 as usize)
    }

    fn map_virtual_key(&self, code: u32, map_type: u32, layout: LocaleId) -> u32 {
        unsafe {
            MapVirtualKeyExW(
                code,
                MAP_VIRTUAL_KEY_TYPE(map_type),
                HKL(layout.0 as *mut core::ffi::c_void),
            )
        }
    }
}

/// Convert a virtual key code to a DirectInput scan code using the built-in
/// overrides and the current thread's keyboard layout.
pub fn to_dik(vk: VirtualKeyCode) -> ScanCode {
    Translator::new(SystemLayout).translate(vk)
}

impl VirtualKeyCode {
    pub fn to_dik(self) -> ScanCode {
        to_dik(self)
    }
}

//! Static key code table
//!
//! Pairs every supported virtual key code with a human-readable label, for
//! key selection in UIs and on the command line. The table is an immutable
//! compile-time constant; codes are macOS virtual key codes (kVK_*).

use crate::backend::KeyCode;

/// All supported keys, in presentation order.
pub const KEY_TABLE: &[(KeyCode, &str)] = &[
    (0x00, "a"),
    (0x0B, "b"),
    (0x08, "c"),
    (0x02, "d"),
    (0x0E, "e"),
    (0x03, "f"),
    (0x05, "g"),
    (0x04, "h"),
    (0x22, "i"),
    (0x26, "j"),
    (0x28, "k"),
    (0x25, "l"),
    (0x2E, "m"),
    (0x2D, "n"),
    (0x1F, "o"),
    (0x23, "p"),
    (0x0C, "q"),
    (0x0F, "r"),
    (0x01, "s"),
    (0x11, "t"),
    (0x20, "u"),
    (0x09, "v"),
    (0x0D, "w"),
    (0x07, "x"),
    (0x10, "y"),
    (0x06, "z"),
    (0x32, "`"),
    (0x1D, "0"),
    (0x12, "1"),
    (0x13, "2"),
    (0x14, "3"),
    (0x15, "4"),
    (0x17, "5"),
    (0x16, "6"),
    (0x1A, "7"),
    (0x1C, "8"),
    (0x19, "9"),
    (0x1B, "-"),
    (0x18, "="),
    (0x33, "backspace"),
    (0x30, "tab"),
    (0x4C, "enter"),
    (0x24, "return"),
    (0x21, "["),
    (0x1E, "]"),
    (0x2A, "\\"),
    (0x29, ";"),
    (0x27, "'"),
    (0x2B, ","),
    (0x2F, "."),
    (0x2C, "/"),
    (0x31, "space"),
    (0x35, "esc"),
    (0x7E, "up"),
    (0x7C, "right"),
    (0x7D, "down"),
    (0x7B, "left"),
    (0x74, "page up"),
    (0x79, "page down"),
    (0x75, "delete"),
    (0x77, "end"),
    (0x73, "home"),
    (0x72, "insert"),
    (0x7A, "F1"),
    (0x78, "F2"),
    (0x63, "F3"),
    (0x76, "F4"),
    (0x60, "F5"),
    (0x61, "F6"),
    (0x62, "F7"),
    (0x64, "F8"),
    (0x65, "F9"),
    (0x6D, "F10"),
    (0x67, "F11"),
    (0x6F, "F12"),
    (0x69, "F13"),
    (0x6B, "F14"),
    (0x71, "F15"),
    (0x39, "capslock"),
    (0x38, "shift"),
    (0x3B, "ctrl"),
    (0x3A, "alt"),
    (0x37, "cmd"),
];

/// Look up the code for a label (case-insensitive).
pub fn code_for_label(label: &str) -> Option<KeyCode> {
    KEY_TABLE
        .iter()
        .find(|(_, l)| l.eq_ignore_ascii_case(label))
        .map(|(code, _)| *code)
}

/// Look up the label for a code.
pub fn label_for_code(code: KeyCode) -> Option<&'static str> {
    KEY_TABLE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

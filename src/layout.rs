//! The Planck 4x12 five-layer keymap.
//!
//! Layer contents follow the classic lower/raise Planck arrangement: a qwerty
//! base layer, a symbol/numpad lower layer, a shifted-symbol/function raise
//! layer, a Ctrl overlay on the home-row control position, and an adjust
//! layer that is only reachable while lower and raise are both held.

use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::keycode::{ALT, CTRL, GUI, ModifierCombination};
use crate::{a, k, layer, lc, lt, shifted, wm};

pub const ROW: usize = 4;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 5;

pub const QWERTY: u8 = 0;
pub const LOWER: u8 = 1;
pub const RAISE: u8 = 2;
pub const CTL: u8 = 3;
pub const ADJUST: u8 = 4;

// macOS screenshot chord: Gui + Shift + 5
const SHIFT_GUI: ModifierCombination = GUI.with_shift(true);

/// Behavior for this keymap: adjust is the tri-layer of lower and raise.
pub const fn default_behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        tri_layer: Some([LOWER, RAISE, ADJUST]),
    }
}

#[rustfmt::skip]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [
        // Qwerty
        layer!([
            [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Escape)],
            [lc!(CtlOverlay), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Enter)],
            [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
            [k!(Grave), k!(LCtrl), a!(No), k!(LAlt), k!(LGui), lc!(Lower), lc!(Raise), lt!(RAISE, Space), k!(RAlt), a!(No), k!(Bootloader), a!(No)]
        ]),
        // Lower: symbols on the left, numpad block on the right
        layer!([
            [shifted!(Grave), a!(No), k!(Quote), shifted!(LeftBracket), shifted!(RightBracket), a!(No), a!(No), k!(Kc7), k!(Kc8), k!(Kc9), k!(Minus), shifted!(Equal)],
            [k!(LCtrl), k!(Backslash), shifted!(Quote), shifted!(Kc9), shifted!(Kc0), shifted!(Kc6), shifted!(Kc7), k!(Kc4), k!(Kc5), k!(Kc6), shifted!(Minus), k!(Equal)],
            [a!(No), shifted!(Backslash), k!(Grave), k!(LeftBracket), k!(RightBracket), a!(No), a!(No), k!(Kc1), k!(Kc2), k!(Kc3), shifted!(Kc8), k!(Slash)],
            [a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), k!(Kc0), a!(No), k!(AudioVolDown), k!(AudioVolUp), a!(No)]
        ]),
        // Raise: shifted number row, function keys, arrow cluster
        layer!([
            [shifted!(Grave), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0), wm!(Kc5, SHIFT_GUI)],
            [a!(Transparent), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(Left), k!(Down), k!(Up), k!(Right), a!(Transparent), a!(Transparent)],
            [a!(Transparent), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(AudioVolDown), k!(AudioVolUp), a!(Transparent)]
        ]),
        // Ctrl overlay: Ctrl chords across the board, Ctrl+Space kept on three
        // consecutive bottom-row positions for physical redundancy
        layer!([
            [a!(Transparent), wm!(Q, CTRL), wm!(Backspace, ALT), wm!(E, CTRL), wm!(R, CTRL), wm!(T, CTRL), wm!(Y, CTRL), wm!(U, CTRL), wm!(I, CTRL), wm!(O, CTRL), wm!(P, CTRL), wm!(RightBracket, CTRL)],
            [a!(Transparent), wm!(A, CTRL), wm!(S, CTRL), wm!(D, CTRL), wm!(F, CTRL), wm!(G, CTRL), k!(Backspace), wm!(J, CTRL), wm!(K, CTRL), wm!(L, CTRL), wm!(Semicolon, CTRL), wm!(Enter, CTRL)],
            [a!(Transparent), wm!(Z, CTRL), wm!(X, CTRL), wm!(C, CTRL), wm!(V, CTRL), wm!(B, CTRL), wm!(N, CTRL), wm!(M, CTRL), wm!(Comma, CTRL), wm!(Dot, CTRL), wm!(Slash, CTRL), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), wm!(LGui, CTRL), wm!(Space, CTRL), wm!(Space, CTRL), wm!(Space, CTRL), wm!(RAlt, CTRL), a!(No), a!(No), a!(No)]
        ]),
        // Adjust (Lower + Raise)
        layer!([
            [a!(Transparent), k!(Bootloader), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(Delete)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(No), a!(No), a!(No), a!(No), lc!(DefaultBase), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(No), a!(No), a!(No), a!(No), a!(No), a!(No), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
    ]
}

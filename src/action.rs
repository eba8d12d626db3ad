use crate::keycode::{KeyCode, ModifierCombination};

/// Layer control pseudo-keycodes, recognized only by the layer command
/// handler and never sent to the host.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerCommand {
    /// Persist the base layer as the default layer and switch to it.
    DefaultBase,
    /// Momentary lower layer, participates in the tri-layer rule.
    Lower,
    /// Momentary raise layer, participates in the tri-layer rule.
    Raise,
    /// Momentary control overlay layer.
    CtlOverlay,
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer
    LayerOn(u8),
    /// A layer control pseudo-keycode, absorbed by the handler.
    LayerCommand(LayerCommand),
}

/// A KeyAction is the action at a keyboard position, stored in keymap.
/// It can be a single action like triggering a key, or a composite keyboard action like tap/hold
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action. The position absorbs the event.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action). The tap-vs-hold
    /// timing decision is made by the dispatcher, not here.
    TapHold(Action, Action),
}

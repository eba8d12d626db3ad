//! Interfaces of the platform collaborators that layer commands mutate.
//!
//! The keymap artifact never owns persistent storage or the HID report
//! state; it issues commands against these traits and the platform wires
//! them to its storage engine and report builder.

/// Persistent store for the default layer, EEPROM-backed on real hardware.
pub trait DefaultLayerStore {
    /// Persist the default layer set, one bit per layer index.
    fn persist_default_layer(&mut self, layer_mask: u32);
}

/// Held-modifier state of the platform's HID report builder.
pub trait ModifierClear {
    /// Drop every currently held modifier. Used when a momentary layer is
    /// released mid-chord, so no modifier is left stuck.
    fn clear_held_modifiers(&mut self);
}

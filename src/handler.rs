//! Layer command handling.
//!
//! The platform dispatcher resolves a key transition against the keymap and
//! feeds the resolved action through [`process_record`]. Layer command
//! pseudo-keys are absorbed here; everything else is reported back as
//! "forward to HID" and leaves no trace in the layer state.

use crate::action::{Action, KeyAction, LayerCommand};
use crate::host::{DefaultLayerStore, ModifierClear};
use crate::keymap::LayerStack;
use crate::layout::{CTL, LOWER, QWERTY, RAISE};

/// Process one resolved key action.
///
/// Returns `true` if the action should still be forwarded to the HID report
/// builder, `false` if it was fully absorbed.
pub fn process_record<L, H>(keymap: &mut L, host: &mut H, action: KeyAction, pressed: bool) -> bool
where
    L: LayerStack,
    H: DefaultLayerStore + ModifierClear,
{
    match action {
        KeyAction::Single(Action::LayerCommand(command)) => {
            process_layer_command(keymap, host, command, pressed);
            false
        }
        _ => true,
    }
}

/// Execute a layer command on both edges of the key transition.
pub fn process_layer_command<L, H>(keymap: &mut L, host: &mut H, command: LayerCommand, pressed: bool)
where
    L: LayerStack,
    H: DefaultLayerStore + ModifierClear,
{
    debug!("Layer command {:?}, pressed: {}", command, pressed);
    match command {
        LayerCommand::DefaultBase => {
            // Edge-triggered on press only
            if pressed {
                host.persist_default_layer(1u32 << QWERTY);
                keymap.set_default_layer(QWERTY);
            }
        }
        LayerCommand::Lower => process_momentary(keymap, host, LOWER, pressed),
        LayerCommand::Raise => process_momentary(keymap, host, RAISE, pressed),
        LayerCommand::CtlOverlay => process_momentary(keymap, host, CTL, pressed),
    }
}

fn process_momentary<L, H>(keymap: &mut L, host: &mut H, layer: u8, pressed: bool)
where
    L: LayerStack,
    H: ModifierClear,
{
    if pressed {
        keymap.activate_layer(layer);
    } else {
        // Clear held modifiers before dropping the layer, otherwise a
        // modifier chorded on the layer can stay stuck after release.
        host.clear_held_modifiers();
        keymap.deactivate_layer(layer);
    }
}

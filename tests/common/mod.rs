use std::cell::RefCell;
use std::rc::Rc;

use heapless::Vec;
use planck_keymap::hid_state::HidModifiers;
use planck_keymap::host::{DefaultLayerStore, ModifierClear};
use planck_keymap::keymap::{KeyMap, LayerStack};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A command issued against the platform collaborators, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    PersistDefaultLayer(u32),
    ClearHeldModifiers,
    ActivateLayer(u8),
    DeactivateLayer(u8),
    SetDefaultLayer(u8),
}

/// A log shared between the host mock and the layer-stack recorder, so the
/// relative order of host commands and layer transitions is observable.
pub type SharedLog = Rc<RefCell<std::vec::Vec<HostCommand>>>;

/// Host collaborator that records into a [`SharedLog`].
pub struct SharedHost {
    pub log: SharedLog,
    pub held_modifiers: HidModifiers,
}

impl SharedHost {
    pub fn new(log: SharedLog) -> Self {
        Self {
            log,
            held_modifiers: HidModifiers::new(),
        }
    }
}

impl DefaultLayerStore for SharedHost {
    fn persist_default_layer(&mut self, layer_mask: u32) {
        self.log
            .borrow_mut()
            .push(HostCommand::PersistDefaultLayer(layer_mask));
    }
}

impl ModifierClear for SharedHost {
    fn clear_held_modifiers(&mut self) {
        self.held_modifiers = HidModifiers::new();
        self.log.borrow_mut().push(HostCommand::ClearHeldModifiers);
    }
}

/// Layer stack that records every transition into the [`SharedLog`] before
/// delegating to the wrapped keymap.
pub struct TrackedLayers<'a, 'm, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    pub keymap: &'a mut KeyMap<'m, ROW, COL, NUM_LAYER>,
    pub log: SharedLog,
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> LayerStack
    for TrackedLayers<'_, '_, ROW, COL, NUM_LAYER>
{
    fn activate_layer(&mut self, layer_num: u8) {
        self.log.borrow_mut().push(HostCommand::ActivateLayer(layer_num));
        self.keymap.activate_layer(layer_num);
    }

    fn deactivate_layer(&mut self, layer_num: u8) {
        self.log.borrow_mut().push(HostCommand::DeactivateLayer(layer_num));
        self.keymap.deactivate_layer(layer_num);
    }

    fn set_default_layer(&mut self, layer_num: u8) {
        self.log.borrow_mut().push(HostCommand::SetDefaultLayer(layer_num));
        self.keymap.set_default_layer(layer_num);
    }
}

/// Records every command the handler issues and mirrors the held-modifier
/// state of the platform's report builder.
pub struct MockHost {
    pub commands: Vec<HostCommand, 16>,
    pub held_modifiers: HidModifiers,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            held_modifiers: HidModifiers::new(),
        }
    }

    pub fn persist_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, HostCommand::PersistDefaultLayer(_)))
            .count()
    }
}

impl DefaultLayerStore for MockHost {
    fn persist_default_layer(&mut self, layer_mask: u32) {
        self.commands
            .push(HostCommand::PersistDefaultLayer(layer_mask))
            .unwrap();
    }
}

impl ModifierClear for MockHost {
    fn clear_held_modifiers(&mut self) {
        self.held_modifiers = HidModifiers::new();
        self.commands.push(HostCommand::ClearHeldModifiers).unwrap();
    }
}

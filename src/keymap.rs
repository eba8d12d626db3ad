use crate::action::KeyAction;
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;

/// Commands the layer command handler issues against the layer stack.
///
/// [`KeyMap`] is the canonical implementation; the indirection keeps the
/// handler decoupled from the concrete stack, so a caller can interpose on
/// layer transitions.
pub trait LayerStack {
    /// Activate given layer
    fn activate_layer(&mut self, layer_num: u8);
    /// Deactivate given layer
    fn deactivate_layer(&mut self, layer_num: u8);
    /// Set the default layer number
    fn set_default_layer(&mut self, layer_num: u8);
}

/// KeyMap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Keymap should be binded to the actual pcb matrix definition. The platform
/// detects hardware key strokes and uses tuple `(row, col, layer)` to
/// retrieve the action from Keymap.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    pub(crate) layers: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number, max: 32
    default_layer: u8,
    /// Layer cache
    layer_cache: [[u8; COL]; ROW],
    /// Options for configurable action behavior
    behavior: BehaviorConfig,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a mut [[[KeyAction; COL]; ROW]; NUM_LAYER], behavior: BehaviorConfig) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
            behavior,
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.default_layer = layer_num;
    }

    pub fn set_action_at(&mut self, row: usize, col: usize, layer_num: usize, action: KeyAction) {
        self.layers[layer_num][row][col] = action;
    }

    /// Fetch the action at a fixed position, without layer resolution
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    /// Fetch the action in keymap, with layer cache.
    ///
    /// On press, scan from the highest active layer downwards and return the
    /// first non-transparent action, remembering which layer supplied it. On
    /// release, replay the cached layer so a key released after a layer
    /// change still resolves to the action it was pressed as.
    pub fn get_action_with_layer_cache(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if !key_event.pressed {
            // Releasing a pressed key, use cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer over the active layers,
        // the default layer always counts as active
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                // This layer is activated
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx as u8);

                return action;
            }
        }

        KeyAction::No
    }

    /// Highest currently active layer index.
    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        if layer_num as usize >= NUM_LAYER {
            return false;
        }
        self.layer_state[layer_num as usize]
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }

    /// Update Tri Layer state
    fn update_tri_layer(&mut self) {
        if let Some(ref tri_layer) = self.behavior.tri_layer {
            self.layer_state[tri_layer[2] as usize] =
                self.layer_state[tri_layer[0] as usize] && self.layer_state[tri_layer[1] as usize];
        }
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = true;
        self.update_tri_layer();
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = false;
        self.update_tri_layer();
    }
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> LayerStack for KeyMap<'_, ROW, COL, NUM_LAYER> {
    fn activate_layer(&mut self, layer_num: u8) {
        KeyMap::activate_layer(self, layer_num);
    }

    fn deactivate_layer(&mut self, layer_num: u8) {
        KeyMap::deactivate_layer(self, layer_num);
    }

    fn set_default_layer(&mut self, layer_num: u8) {
        KeyMap::set_default_layer(self, layer_num);
    }
}

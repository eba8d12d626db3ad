/// Options for configurable keymap behavior.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BehaviorConfig {
    /// Tri-layer triple `[lower, raise, adjust]`: the adjust layer is active
    /// exactly while both constituent layers are active.
    pub tri_layer: Option<[u8; 3]>,
}

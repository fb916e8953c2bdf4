use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::camera::CameraMovement;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings mapping movement directions to key codes.
pub struct KeyBindings {
    /// Maps direction → key string (e.g. `Forward` → `"KeyW"`).
    ///
    /// A preset only needs to list the directions it rebinds; the rest keep
    /// their default keys.
    #[serde(deserialize_with = "merge_over_defaults")]
    pub bindings: HashMap<CameraMovement, String>,
    /// Reverse lookup cache (key string → direction). Rebuilt on load.
    #[serde(skip)]
    key_to_movement: HashMap<String, CameraMovement>,
}

fn default_bindings() -> HashMap<CameraMovement, String> {
    HashMap::from([
        (CameraMovement::Forward, "KeyW".into()),
        (CameraMovement::Backward, "KeyS".into()),
        (CameraMovement::Left, "KeyA".into()),
        (CameraMovement::Right, "KeyD".into()),
    ])
}

/// Serde's `default` fills missing struct fields, not missing map entries.
fn merge_over_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<CameraMovement, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides =
        HashMap::<CameraMovement, String>::deserialize(deserializer)?;
    let mut bindings = default_bindings();
    bindings.extend(overrides);
    Ok(bindings)
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: default_bindings(),
            key_to_movement: HashMap::new(),
        };
        keys.rebuild_reverse_map();
        keys
    }
}

impl KeyBindings {
    /// Rebuild the reverse lookup map (key string → direction).
    ///
    /// When one key is bound to several directions, the first in
    /// [`CameraMovement::ALL`] order keeps it.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_movement.clear();
        for movement in CameraMovement::ALL {
            let Some(key) = self.bindings.get(&movement) else {
                log::warn!("no key bound to {movement:?}");
                continue;
            };
            match self.key_to_movement.entry(key.clone()) {
                Entry::Occupied(kept) => log::warn!(
                    "key {key} already bound to {:?}; {movement:?} unbound",
                    kept.get()
                ),
                Entry::Vacant(slot) => {
                    let _ = slot.insert(movement);
                }
            }
        }
    }

    /// Bind `key` to `movement`, replacing its previous key.
    pub fn bind(&mut self, movement: CameraMovement, key: impl Into<String>) {
        let _ = self.bindings.insert(movement, key.into());
        self.rebuild_reverse_map();
    }

    /// Look up the direction for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraMovement> {
        self.key_to_movement.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_wasd() {
        let keys = KeyBindings::default();
        assert_eq!(keys.lookup("KeyW"), Some(CameraMovement::Forward));
        assert_eq!(keys.lookup("KeyS"), Some(CameraMovement::Backward));
        assert_eq!(keys.lookup("KeyA"), Some(CameraMovement::Left));
        assert_eq!(keys.lookup("KeyD"), Some(CameraMovement::Right));
        assert_eq!(keys.lookup("KeyQ"), None);
    }

    #[test]
    fn shared_key_goes_to_first_direction() {
        let mut keys = KeyBindings::default();
        keys.bind(CameraMovement::Right, "KeyW");
        assert_eq!(keys.lookup("KeyW"), Some(CameraMovement::Forward));
        assert_eq!(keys.lookup("KeyD"), None);

        keys.bind(CameraMovement::Forward, "ArrowUp");
        assert_eq!(keys.lookup("KeyW"), Some(CameraMovement::Right));
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let mut keys: KeyBindings =
            toml::from_str("[bindings]\nleft = \"ArrowLeft\"\n").unwrap();
        keys.rebuild_reverse_map();
        assert_eq!(keys.lookup("ArrowLeft"), Some(CameraMovement::Left));
        assert_eq!(keys.lookup("KeyA"), None);
        assert_eq!(keys.lookup("KeyW"), Some(CameraMovement::Forward));
        assert_eq!(keys.lookup("KeyS"), Some(CameraMovement::Backward));
        assert_eq!(keys.lookup("KeyD"), Some(CameraMovement::Right));
    }

    #[test]
    fn rebinding_drops_old_key() {
        let mut keys = KeyBindings::default();
        keys.bind(CameraMovement::Forward, "ArrowUp");
        assert_eq!(keys.lookup("ArrowUp"), Some(CameraMovement::Forward));
        assert_eq!(keys.lookup("KeyW"), None);
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::MoveAction;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// When several actions share a key, [`lookup`](Self::lookup) returns the
/// one listed first in [`MoveAction::ALL`].
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    bindings: HashMap<MoveAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on every change.
    #[serde(skip)]
    key_to_action: HashMap<String, MoveAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::from_bindings(HashMap::from([
            (MoveAction::MoveForward, "KeyW".into()),
            (MoveAction::MoveBack, "KeyS".into()),
            (MoveAction::StrafeLeft, "KeyA".into()),
            (MoveAction::StrafeRight, "KeyD".into()),
            (MoveAction::Boost, "ShiftLeft".into()),
        ]))
    }
}

impl<'de> Deserialize<'de> for KeybindingOptions {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Table {
            bindings: Option<HashMap<MoveAction, String>>,
        }

        let table = Table::deserialize(deserializer)?;
        Ok(table
            .bindings
            .map_or_else(Self::default, Self::from_bindings))
    }
}

impl KeybindingOptions {
    /// Build from an action → key map.
    #[must_use]
    pub fn from_bindings(bindings: HashMap<MoveAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Rebuild the reverse lookup map (key string → action).
    fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for action in MoveAction::ALL {
            if let Some(key) = self.bindings.get(&action) {
                let _ = self.key_to_action.entry(key.clone()).or_insert(action);
            }
        }
    }

    /// The action → key map.
    #[must_use]
    pub fn bindings(&self) -> &HashMap<MoveAction, String> {
        &self.bindings
    }

    /// Key string bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: MoveAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveAction> {
        self.key_to_action.get(key).copied()
    }

    /// Bind `action` to `key`, replacing any previous key for that action.
    pub fn bind(&mut self, action: MoveAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Remove the binding for `action`.
    pub fn unbind(&mut self, action: MoveAction) {
        let _ = self.bindings.remove(&action);
        self.rebuild_reverse_map();
    }

    /// Actions with no key bound.
    #[must_use]
    pub fn unbound(&self) -> Vec<MoveAction> {
        MoveAction::ALL
            .into_iter()
            .filter(|action| !self.bindings.contains_key(action))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_key_resolves_to_first_action() {
        let mut opts = KeybindingOptions::default();
        opts.bind(MoveAction::Boost, "KeyW");
        for _ in 0..8 {
            assert_eq!(opts.lookup("KeyW"), Some(MoveAction::MoveForward));
        }

        opts.unbind(MoveAction::MoveForward);
        assert_eq!(opts.lookup("KeyW"), Some(MoveAction::Boost));
        assert_eq!(opts.lookup("ShiftLeft"), None);
    }

    #[test]
    fn rebinding_drops_the_old_key() {
        let mut opts = KeybindingOptions::default();
        opts.bind(MoveAction::StrafeLeft, "ArrowLeft");
        assert_eq!(opts.lookup("KeyA"), None);
        assert_eq!(opts.lookup("ArrowLeft"), Some(MoveAction::StrafeLeft));
        assert_eq!(opts.key_for(MoveAction::StrafeLeft), Some("ArrowLeft"));
    }

    #[test]
    fn deserialization_rebuilds_reverse_map() {
        let opts: KeybindingOptions = toml::from_str(
            r#"
[bindings]
strafe_right = "KeyL"
move_back = "KeyL"
"#,
        )
        .unwrap();
        assert_eq!(opts.lookup("KeyL"), Some(MoveAction::MoveBack));
        assert_eq!(opts.bindings().len(), 2);

        let empty: KeybindingOptions = toml::from_str("").unwrap();
        assert_eq!(empty, KeybindingOptions::default());
        assert_eq!(empty.lookup("KeyW"), Some(MoveAction::MoveForward));
    }
}

//! Camera and input options with TOML preset support.
//!
//! Options serialize to/from TOML so fly-camera presets (speed, sensitivity,
//! projection, key layout) can live next to an application's assets.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        let unbound = options.keybindings.unbound();
        if !unbound.is_empty() {
            log::warn!(
                "{}: no key bound for {unbound:?}",
                path.display()
            );
        }
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MoveAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
move_speed = 25.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.move_speed, 25.0);
        // Everything else should be default
        assert_eq!(opts.camera.fovy, 70.0);
        assert_eq!(opts.camera.boost_multiplier, 10.0);
        assert_eq!(opts.keybindings, KeybindingOptions::default());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(MoveAction::MoveForward)
        );
        assert_eq!(
            opts.keybindings.lookup("ShiftLeft"),
            Some(MoveAction::Boost)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
        assert_eq!(opts.keybindings.key_for(MoveAction::StrafeRight), Some("KeyD"));
        assert!(opts.keybindings.unbound().is_empty());
    }

    #[test]
    fn keybindings_parse_from_snake_case_table() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
boost = "ControlLeft"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(MoveAction::MoveForward)
        );
        // A table replaces the whole map, so unlisted actions are unbound.
        assert_eq!(
            opts.keybindings.unbound(),
            vec![
                MoveAction::MoveBack,
                MoveAction::StrafeLeft,
                MoveAction::StrafeRight
            ]
        );
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.mouse_sensitivity = 0.25;
        opts.keybindings.bind(MoveAction::Boost, "Space");

        opts.save(&dir.join("slow.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();
        let loaded = Options::load(&dir.join("slow.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["slow".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("vantage-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera]\nfovy = \"wide\"\n").unwrap();

        assert!(matches!(
            Options::load(&path),
            Err(CameraError::OptionsParse(_))
        ));
        assert!(matches!(
            Options::load(&dir.join("missing.toml")),
            Err(CameraError::Io(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("move_speed").is_some());
        assert!(camera.get("znear").is_none());
    }
}

//! Control registry for typed control management with URL sync

use super::panel::MockPage;
use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use dioxus::prelude::*;
use std::collections::HashMap;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
    Int(i32),
}

impl ControlValue {
    /// The value as it appears in URL state and `visible_when` conditions
    pub fn to_state_string(&self) -> String {
        match self {
            ControlValue::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            ControlValue::String(s) => s.clone(),
            ControlValue::Int(i) => i.to_string(),
        }
    }

    /// Parse a URL state value into the same variant as `self`.
    fn parse_like(&self, raw: &str) -> Option<ControlValue> {
        match self {
            ControlValue::Bool(_) => Some(ControlValue::Bool(raw == "1" || raw == "true")),
            ControlValue::String(_) => Some(ControlValue::String(raw.to_string())),
            ControlValue::Int(_) => raw.parse().ok().map(ControlValue::Int),
        }
    }
}

/// Definition of a control with metadata
#[derive(Clone, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
    pub enum_options: Option<Vec<(&'static str, &'static str)>>, // (value, label) for enums
    pub int_range: Option<(i32, Option<i32>)>,                   // (min, max) for int controls
    /// Conditions that must all be true for this control to be visible.
    /// Each tuple is (control_key, required_value) - the referenced control must have that value.
    pub visible_when: Vec<(&'static str, &'static str)>,
    /// If true, enum controls render as dropdowns inline with bool controls
    pub inline: bool,
}

impl ControlDef {
    fn new(key: &'static str, label: &'static str, default: ControlValue) -> Self {
        Self {
            key,
            label,
            default,
            doc: None,
            enum_options: None,
            int_range: None,
            visible_when: Vec::new(),
            inline: false,
        }
    }

    /// Check if this control should be visible given the current registry state.
    /// Returns true if all `visible_when` conditions are met.
    pub fn is_visible(&self, registry: &ControlRegistry) -> bool {
        self.visible_when
            .iter()
            .all(|(key, value)| registry.get_state_string(key) == *value)
    }

    /// Initial value: the URL state entry for this key if it parses, else the default.
    fn initial_value(&self, state_pairs: &[(String, String)]) -> ControlValue {
        state_pairs
            .iter()
            .find(|(k, _)| k == self.key)
            .and_then(|(_, v)| self.default.parse_like(v))
            .map(|value| self.clamp(value))
            .unwrap_or_else(|| self.default.clone())
    }

    fn clamp(&self, value: ControlValue) -> ControlValue {
        match (value, self.int_range) {
            (ControlValue::Int(i), Some((min, max))) => {
                let i = i.max(min);
                ControlValue::Int(max.map_or(i, |max| i.min(max)))
            }
            (value, _) => value,
        }
    }
}

/// Check that every `visible_when` condition names an existing control and,
/// for enum and bool controls, a value that control can take.
pub fn validate_visibility(controls: &[ControlDef]) -> Result<(), String> {
    for control in controls {
        for (ref_key, ref_value) in &control.visible_when {
            let Some(ref_control) = controls.iter().find(|c| c.key == *ref_key) else {
                return Err(format!(
                    "visible_when on '{}' references unknown control '{}'",
                    control.key, ref_key
                ));
            };
            if let Some(options) = &ref_control.enum_options {
                if !options.iter().any(|(v, _)| v == ref_value) {
                    return Err(format!(
                        "visible_when on '{}' references invalid value '{}' for control '{}'. Valid values: {:?}",
                        control.key,
                        ref_value,
                        ref_key,
                        options.iter().map(|(v, _)| *v).collect::<Vec<_>>()
                    ));
                }
            }
            if matches!(ref_control.default, ControlValue::Bool(_))
                && !matches!(*ref_value, "0" | "1")
            {
                return Err(format!(
                    "visible_when on '{}' must compare bool control '{}' against \"0\" or \"1\", got '{}'",
                    control.key, ref_key, ref_value
                ));
            }
        }
    }
    Ok(())
}

/// Definition of an action button (not stored in URL params)
#[derive(Clone)]
pub struct ActionDef {
    pub label: &'static str,
    pub callback: Callback<()>,
}

/// Builder for creating a ControlRegistry
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    actions: Vec<ActionDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            actions: Vec::new(),
            presets: Vec::new(),
        }
    }

    /// Add a boolean control
    pub fn bool_control(mut self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.controls
            .push(ControlDef::new(key, label, ControlValue::Bool(default)));
        self
    }

    /// Add an enum control (represented as string internally)
    pub fn enum_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: &'static str,
        options: Vec<(&'static str, &'static str)>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::String(default.to_string()));
        def.enum_options = Some(options);
        self.controls.push(def);
        self
    }

    /// Add an integer control
    pub fn int_control(
        mut self,
        key: &'static str,
        label: &'static str,
        default: i32,
        min: i32,
        max: Option<i32>,
    ) -> Self {
        let mut def = ControlDef::new(key, label, ControlValue::Int(default));
        def.int_range = Some((min, max));
        self.controls.push(def);
        self
    }

    /// Add a free-form string control
    pub fn string_control(mut self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.controls.push(ControlDef::new(
            key,
            label,
            ControlValue::String(default.to_string()),
        ));
        self
    }

    /// Mark the last control as inline (enum controls render as dropdowns with bool controls)
    pub fn inline(mut self) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.inline = true;
        }
        self
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    /// Add a visibility condition to the last control.
    /// The control will only be visible when the referenced control has the specified value.
    /// Multiple calls create an AND condition (all must match).
    pub fn visible_when(mut self, key: &'static str, value: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.visible_when.push((key, value));
        }
        self
    }

    /// Add an action button (not stored in URL params)
    pub fn action(mut self, label: &'static str, callback: Callback<()>) -> Self {
        self.actions.push(ActionDef { label, callback });
        self
    }

    /// Add state presets
    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Build the registry - must be called inside a component (uses hooks)
    ///
    /// Panics if a `visible_when` condition is invalid.
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        if let Err(message) = validate_visibility(&self.controls) {
            panic!("{message}");
        }

        let state_pairs = initial_state
            .as_deref()
            .map(parse_state)
            .unwrap_or_default();

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for def in &self.controls {
            let initial = def.initial_value(&state_pairs);
            // Hook order is stable: controls are declared unconditionally
            let signal = use_signal(|| initial);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            actions: self.actions,
            values,
            presets: self.presets,
        }
    }
}

impl Default for ControlRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry holding all controls and their current values
#[derive(Clone)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub actions: Vec<ActionDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl PartialEq for ControlRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.controls == other.controls
            && self.values == other.values
            && self.presets == other.presets
            && self.actions.len() == other.actions.len()
    }
}

impl ControlRegistry {
    /// Read a control through `f`, subscribing the caller to it.
    /// Unknown keys read as `None`.
    fn read<T>(&self, key: &str, f: impl FnOnce(&ControlValue) -> Option<T>) -> Option<T> {
        self.values.get(key).and_then(|signal| f(&signal.read()))
    }

    fn write(&self, key: &str, value: ControlValue) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(value);
        }
    }

    pub fn get_bool(&self, key: &'static str) -> bool {
        self.read(key, |v| match v {
            ControlValue::Bool(b) => Some(*b),
            _ => None,
        })
        .unwrap_or(false)
    }

    pub fn get_string(&self, key: &'static str) -> String {
        self.read(key, |v| match v {
            ControlValue::String(s) => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_default()
    }

    pub fn get_int(&self, key: &'static str) -> i32 {
        self.read(key, |v| match v {
            ControlValue::Int(i) => Some(*i),
            _ => None,
        })
        .unwrap_or(0)
    }

    /// Parse an enum control into a typed value, falling back to the type's default.
    pub fn get_parsed<T>(&self, key: &'static str) -> T
    where
        T: std::str::FromStr + Default,
    {
        self.get_string(key).parse().unwrap_or_default()
    }

    fn get_state_string(&self, key: &str) -> String {
        self.read(key, |v| Some(v.to_state_string()))
            .unwrap_or_default()
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        self.write(key, ControlValue::Bool(value));
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        self.write(key, ControlValue::String(value));
    }

    /// Set an integer value, clamped to the control's range
    pub fn set_int(&self, key: &'static str, value: i32) {
        if let Some(def) = self.controls.iter().find(|c| c.key == key) {
            self.write(key, def.clamp(ControlValue::Int(value)));
        }
    }

    /// Apply a preset: every control the preset doesn't name goes back to its default
    pub fn apply_preset(&self, preset: &Preset) {
        for control in &self.controls {
            let value = preset
                .values
                .get(control.key)
                .unwrap_or(&control.default)
                .clone();
            self.write(control.key, value);
        }
    }

    /// Build URL state string from current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            if let Some(signal) = self.values.get(def.key) {
                let value = signal.read();
                match (&*value, &def.default) {
                    (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                        builder.set_bool(def.key, *v, *default);
                    }
                    (value, default) if value != default => {
                        builder.set_string(def.key, &value.to_state_string());
                    }
                    _ => {}
                }
            }
        }

        builder.build_option()
    }

    /// Keep `page`'s URL in step with the controls.
    ///
    /// Skips the first run so opening a page doesn't push a redundant
    /// history entry.
    pub fn use_url_sync(&self, page: MockPage) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(page.to_route(registry.build_state()));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enum_def() -> ControlDef {
        let mut def = ControlDef::new(
            "collapsible",
            "Collapsible",
            ControlValue::String("offcanvas".to_string()),
        );
        def.enum_options = Some(vec![("offcanvas", "Offcanvas"), ("icon", "Icon")]);
        def
    }

    fn state(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_initial_value_from_state() {
        let def = ControlDef::new("mobile", "Mobile", ControlValue::Bool(false));
        assert_eq!(
            def.initial_value(&state(&[("mobile", "1")])),
            ControlValue::Bool(true)
        );
        assert_eq!(def.initial_value(&[]), ControlValue::Bool(false));

        assert_eq!(
            enum_def().initial_value(&state(&[("collapsible", "icon")])),
            ControlValue::String("icon".to_string())
        );
    }

    #[test]
    fn test_initial_int_is_clamped_or_defaulted() {
        let mut def = ControlDef::new("current", "Current", ControlValue::Int(1));
        def.int_range = Some((1, Some(5)));

        assert_eq!(def.initial_value(&state(&[("current", "9")])), ControlValue::Int(5));
        assert_eq!(def.initial_value(&state(&[("current", "-2")])), ControlValue::Int(1));
        assert_eq!(def.initial_value(&state(&[("current", "abc")])), ControlValue::Int(1));
    }

    #[test]
    fn test_validate_visibility() {
        let mut dependent = ControlDef::new("rail", "Rail", ControlValue::Bool(true));
        dependent.visible_when.push(("collapsible", "icon"));
        assert!(validate_visibility(&[enum_def(), dependent.clone()]).is_ok());

        dependent.visible_when = vec![("collapsible", "floating")];
        let err = validate_visibility(&[enum_def(), dependent.clone()]).unwrap_err();
        assert!(err.contains("invalid value 'floating'"));

        dependent.visible_when = vec![("missing", "x")];
        let err = validate_visibility(&[enum_def(), dependent]).unwrap_err();
        assert!(err.contains("unknown control 'missing'"));
    }

    #[test]
    fn test_validate_visibility_on_bool_control() {
        let toggle = ControlDef::new("dismissible", "Dismissible", ControlValue::Bool(false));
        let mut dependent = ControlDef::new("label", "Label", ControlValue::String(String::new()));

        dependent.visible_when.push(("dismissible", "1"));
        assert!(validate_visibility(&[toggle.clone(), dependent.clone()]).is_ok());

        dependent.visible_when = vec![("dismissible", "true")];
        assert!(validate_visibility(&[toggle, dependent]).is_err());
    }

    #[test]
    fn test_state_strings() {
        assert_eq!(ControlValue::Bool(true).to_state_string(), "1");
        assert_eq!(ControlValue::Int(-3).to_state_string(), "-3");
        assert_eq!(
            ControlValue::String("docs".to_string()).to_state_string(),
            "docs"
        );
    }
}

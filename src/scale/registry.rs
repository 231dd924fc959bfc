// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named custom scales alongside the built-in kinds

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Scale, ScaleFormula, ScaleKind};
use crate::error::TheoryResult;
use crate::pitch::PitchClass;

/// Custom scale definitions that can be loaded from config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomScaleDefinition {
    /// Name of the scale
    pub name: String,
    /// Formula in any of the three encodings, written as a single-key map
    /// such as `numerics: ["1", "b3", "5"]`
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub formula: ScaleFormula,
}

impl CustomScaleDefinition {
    /// Create a scale from this definition
    pub fn to_scale(&self, root: PitchClass) -> TheoryResult<Scale> {
        Scale::custom(root, self.name.clone(), self.formula.clone())
    }
}

/// Registry for custom scale definitions
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    custom_scales: HashMap<String, CustomScaleDefinition>,
}

impl ScaleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom scale, replacing any with the same name
    pub fn register(&mut self, def: CustomScaleDefinition) {
        self.custom_scales.insert(def.name.clone(), def);
    }

    /// Look up a custom definition
    pub fn get(&self, name: &str) -> Option<&CustomScaleDefinition> {
        self.custom_scales.get(name)
    }

    /// Number of custom definitions
    pub fn len(&self) -> usize {
        self.custom_scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.custom_scales.is_empty()
    }

    /// Get a scale by name (checks custom first, then built-in)
    pub fn get_scale(&self, root: PitchClass, name: &str) -> TheoryResult<Scale> {
        if let Some(def) = self.custom_scales.get(name) {
            return def.to_scale(root);
        }

        let kind: ScaleKind = name.parse()?;
        Scale::new(root, kind)
    }

    /// List all available scale names, sorted
    pub fn available_scales(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_scales.keys().cloned().collect();
        names.extend(ScaleKind::ALL.iter().map(|kind| kind.name().to_string()));
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TheoryError;

    fn super_locrian() -> CustomScaleDefinition {
        CustomScaleDefinition {
            name: "super_locrian".to_string(),
            formula: ScaleFormula::Numerics(
                ["1", "b2", "b3", "3", "b5", "b6", "b7"].iter().map(|s| s.to_string()).collect(),
            ),
        }
    }

    #[test]
    fn test_scale_registry() {
        let mut registry = ScaleRegistry::new();
        registry.register(super_locrian());
        assert_eq!(registry.len(), 1);

        let custom = registry.get_scale(PitchClass::C, "super_locrian").unwrap();
        assert_eq!(custom.len(), 7);
        assert_eq!(custom.kind(), ScaleKind::Custom);

        let major = registry.get_scale(PitchClass::C, "major").unwrap();
        assert_eq!(major.kind(), ScaleKind::Major);
    }

    #[test]
    fn test_custom_shadows_builtin() {
        let mut registry = ScaleRegistry::new();
        registry.register(CustomScaleDefinition {
            name: "major".to_string(),
            formula: ScaleFormula::Intervals(vec![
                crate::pitch::Interval::Unison,
                crate::pitch::Interval::PerfectFifth,
            ]),
        });

        let scale = registry.get_scale(PitchClass::C, "major").unwrap();
        assert_eq!(scale.len(), 2);
    }

    #[test]
    fn test_unknown_name() {
        let registry = ScaleRegistry::new();
        assert_eq!(
            registry.get_scale(PitchClass::C, "enigmatic"),
            Err(TheoryError::UnknownScaleKind("enigmatic".to_string()))
        );
    }

    #[test]
    fn test_available_scales() {
        let mut registry = ScaleRegistry::new();
        registry.register(super_locrian());
        let names = registry.available_scales();
        assert_eq!(names.len(), ScaleKind::ALL.len() + 1);
        assert!(names.contains(&"super_locrian".to_string()));
        assert!(names.contains(&"Harmonic Minor".to_string()));
    }
}

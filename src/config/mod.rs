// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Theory files.
//!
//! A theory file names a working key, a placeholder for unresolved
//! numerals, custom scales and named progressions. Files are YAML by
//! default; TOML is also supported.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::key::{Key, KeyKind};
use crate::pitch::PitchClass;
use crate::progression::{presets, Progression, DEFAULT_PLACEHOLDER};
use crate::scale::{CustomScaleDefinition, ScaleRegistry};

/// Root of a theory file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TheoryFile {
    /// Shown in place of numerals that are not in the key
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Working key
    #[serde(default)]
    pub key: KeyConfig,
    /// Custom scale definitions
    #[serde(default)]
    pub scales: Vec<CustomScaleDefinition>,
    /// Named progressions
    #[serde(default)]
    pub progressions: BTreeMap<String, ProgressionSource>,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for TheoryFile {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            key: KeyConfig::default(),
            scales: Vec::new(),
            progressions: BTreeMap::new(),
        }
    }
}

/// Key section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyConfig {
    /// Root note (e.g., "C", "F#", "Bb")
    #[serde(default = "default_root")]
    pub root: String,
    /// "major" or "minor"
    #[serde(default = "default_kind")]
    pub kind: String,
}

fn default_root() -> String {
    "C".to_string()
}
fn default_kind() -> String {
    "major".to_string()
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            kind: default_kind(),
        }
    }
}

/// A progression given inline or by preset name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ProgressionSource {
    /// Roman numerals, e.g. ["i", "VII", "VI", "V"]
    Numerals(Vec<String>),
    /// Name of a built-in preset, e.g. "andalusian_cadence"
    Preset(String),
}

impl ProgressionSource {
    /// The numerals this source stands for
    pub fn numerals(&self) -> Result<Vec<String>> {
        match self {
            ProgressionSource::Numerals(numerals) => Ok(numerals.clone()),
            ProgressionSource::Preset(name) => presets::by_name(name)
                .map(|numerals| numerals.iter().map(|n| n.to_string()).collect())
                .ok_or_else(|| anyhow!("Unknown progression preset: '{}'", name)),
        }
    }
}

impl TheoryFile {
    /// Load a theory file from YAML
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read theory file: {:?}", path.as_ref()))?;
        let file = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid theory file: {:?}", path.as_ref()))?;
        tracing::info!(path = ?path.as_ref(), key = %file.key.root, "loaded theory file");
        Ok(file)
    }

    /// Parse a theory file from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML theory file")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize theory file to YAML")
    }

    /// Save as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write theory file: {:?}", path.as_ref()))?;
        tracing::info!(path = ?path.as_ref(), "saved theory file");
        Ok(())
    }

    /// Load a theory file from TOML
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read theory file: {:?}", path.as_ref()))?;
        let file = Self::from_toml(&contents)
            .with_context(|| format!("Invalid theory file: {:?}", path.as_ref()))?;
        tracing::info!(path = ?path.as_ref(), key = %file.key.root, "loaded theory file");
        Ok(file)
    }

    /// Parse a theory file from a TOML string
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse TOML theory file")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize theory file to TOML")
    }

    /// Save as TOML
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let source = self.to_toml()?;
        fs::write(path.as_ref(), source)
            .with_context(|| format!("Failed to write theory file: {:?}", path.as_ref()))?;
        tracing::info!(path = ?path.as_ref(), "saved theory file");
        Ok(())
    }

    /// Load by extension: ".toml" as TOML, anything else as YAML
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let is_toml = path
            .as_ref()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::load_toml(path)
        } else {
            Self::load(path)
        }
    }

    /// The working key
    pub fn key(&self) -> Result<Key> {
        let root: PitchClass = self
            .key
            .root
            .parse()
            .with_context(|| format!("Invalid key root: '{}'", self.key.root))?;
        let kind: KeyKind = self
            .key
            .kind
            .parse()
            .with_context(|| format!("Invalid key kind: '{}'", self.key.kind))?;
        Ok(Key::new(root, kind))
    }

    /// A registry holding the file's custom scales
    pub fn registry(&self) -> ScaleRegistry {
        let mut registry = ScaleRegistry::new();
        for def in &self.scales {
            registry.register(def.clone());
        }
        registry
    }

    /// Resolve a named progression in the working key. Names not defined
    /// in the file fall back to the built-in presets.
    pub fn progression(&self, name: &str) -> Result<Progression> {
        let numerals = match self.progressions.get(name) {
            Some(source) => source
                .numerals()
                .with_context(|| format!("Invalid progression '{}'", name))?,
            None => ProgressionSource::Preset(name.to_string())
                .numerals()
                .with_context(|| format!("No progression named '{}'", name))?,
        };

        let key = self.key()?;
        tracing::debug!(name, %key, count = numerals.len(), "resolving progression");
        Ok(Progression::with_placeholder(key, numerals, self.placeholder.clone())?)
    }

    /// Every progression defined in the file, by name
    pub fn progressions(&self) -> Result<Vec<(String, Progression)>> {
        self.progressions
            .keys()
            .map(|name| -> Result<(String, Progression)> { Ok((name.clone(), self.progression(name)?)) })
            .collect()
    }

    /// Load a file and check its key, scales and progressions
    pub fn validate<P: AsRef<Path>>(path: P) -> Result<()> {
        let file = Self::open(path.as_ref())?;
        let key = file.key()?;

        for def in &file.scales {
            def.to_scale(key.root)
                .with_context(|| format!("Invalid scale '{}'", def.name))?;
        }
        file.progressions()?;

        tracing::debug!(path = ?path.as_ref(), "theory file is valid");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{Chord, ChordKind};
    use crate::progression::ProgressionChord;
    use crate::scale::{ScaleFormula, ScaleKind, Step};
    use tempfile::tempdir;

    const YAML: &str = r#"
key:
  root: "D"
  kind: "minor"
placeholder: "-"
scales:
  - name: super_locrian
    formula:
      numerics: ["1", "b2", "b3", "3", "b5", "b6", "b7"]
  - name: pentatonic_steps
    formula:
      steps: [w, w, "whole", h, w]
progressions:
  verse: ["i", "VII", "VI", "Q"]
  outro: andalusian_cadence
"#;

    #[test]
    fn test_parse_theory_file() {
        let file = TheoryFile::from_yaml(YAML).unwrap();
        assert_eq!(file.key().unwrap(), Key::new(PitchClass::D, KeyKind::Minor));
        assert_eq!(file.placeholder, "-");
        assert_eq!(file.scales.len(), 2);
        assert_eq!(
            file.scales[1].formula,
            ScaleFormula::Steps(vec![Step::Whole, Step::Whole, Step::Whole, Step::Half, Step::Whole])
        );
        assert_eq!(
            file.progressions.get("outro"),
            Some(&ProgressionSource::Preset("andalusian_cadence".to_string()))
        );
    }

    #[test]
    fn test_default_values() {
        let file = TheoryFile::from_yaml("scales: []").unwrap();
        assert_eq!(file.key().unwrap(), Key::new(PitchClass::C, KeyKind::Major));
        assert_eq!(file.placeholder, "X");
        assert!(file.progressions.is_empty());
        assert_eq!(file, TheoryFile::default());
    }

    #[test]
    fn test_registry() {
        let file = TheoryFile::from_yaml(YAML).unwrap();
        let registry = file.registry();

        let scale = registry.get_scale(PitchClass::C, "super_locrian").unwrap();
        assert_eq!(scale.kind(), ScaleKind::Custom);
        assert_eq!(scale.len(), 7);

        let steps = registry.get_scale(PitchClass::C, "pentatonic_steps").unwrap();
        assert_eq!(
            steps.notes(),
            &[PitchClass::C, PitchClass::D, PitchClass::E, PitchClass::Gb, PitchClass::G]
        );
    }

    #[test]
    fn test_progressions() {
        let file = TheoryFile::from_yaml(YAML).unwrap();

        let verse = file.progression("verse").unwrap();
        assert_eq!(verse.chords()[0].chord(), Some(&Chord::new(PitchClass::D, ChordKind::Minor)));
        assert_eq!(verse.chords()[3], ProgressionChord::Placeholder("-".to_string()));

        let outro = file.progression("outro").unwrap();
        assert_eq!(outro.numerals(), &["i", "VII", "VI", "V"]);
        assert_eq!(outro.unresolved_count(), 0);

        // Not in the file, but a preset
        let axis = file.progression("axis").unwrap();
        assert_eq!(axis.len(), 4);

        assert!(file.progression("bridge").is_err());

        let all = file.progressions().unwrap();
        let names: Vec<&str> = all.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["outro", "verse"]);
    }

    #[test]
    fn test_bad_key() {
        let file = TheoryFile::from_yaml("key:\n  root: H\n").unwrap();
        let err = file.key().unwrap_err();
        assert!(err.to_string().contains("Invalid key root"));

        let file = TheoryFile::from_yaml("key:\n  kind: lydian\n").unwrap();
        assert!(file.key().is_err());
    }

    #[test]
    fn test_unknown_preset() {
        let file = TheoryFile::from_yaml("progressions:\n  intro: pachelbel\n").unwrap();
        assert!(file.progression("intro").is_err());
        assert!(file.progressions().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let original = TheoryFile::from_yaml(YAML).unwrap();
        let yaml = original.to_yaml().unwrap();
        let parsed = TheoryFile::from_yaml(&yaml).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_toml_round_trip() {
        let original = TheoryFile::from_yaml(YAML).unwrap();
        let source = original.to_toml().unwrap();
        let parsed = TheoryFile::from_toml(&source).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_save_and_validate() {
        let dir = tempdir().unwrap();
        let original = TheoryFile::from_yaml(YAML).unwrap();

        let yaml_path = dir.path().join("theory.yaml");
        original.save(&yaml_path).unwrap();
        assert_eq!(TheoryFile::load(&yaml_path).unwrap(), original);

        let toml_path = dir.path().join("theory.toml");
        original.save_toml(&toml_path).unwrap();
        assert_eq!(TheoryFile::open(&toml_path).unwrap(), original);

        TheoryFile::validate(&yaml_path).unwrap();
        TheoryFile::validate(&toml_path).unwrap();
    }

    #[test]
    fn test_validate_invalid_file() {
        let dir = tempdir().unwrap();

        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "this is not valid yaml: [").unwrap();
        assert!(TheoryFile::validate(&broken).is_err());

        let bad_scale = dir.path().join("bad_scale.yaml");
        fs::write(
            &bad_scale,
            "scales:\n  - name: odd\n    formula:\n      numerics: [\"1\", \"#4\"]\n",
        )
        .unwrap();
        let err = TheoryFile::validate(&bad_scale).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid scale 'odd'"));

        assert!(TheoryFile::validate(dir.path().join("missing.yaml")).is_err());
    }
}

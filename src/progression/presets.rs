// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Named Roman-numeral progressions and cadences

/// Kind of preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetGroup {
    /// Common harmonic progressions
    Progression,
    /// Progressions from well-known songs
    Song,
    /// Phrase endings
    Cadence,
}

/// "Four chord song" pop progression
pub const AXIS: &[&str] = &["I", "V", "vi", "IV"];
/// Axis starting on the relative minor
pub const AXIS_ALT: &[&str] = &["vi", "IV", "I", "V"];
/// Common in Japanese pop
pub const ROYAL_ROAD: &[&str] = &["IV", "V", "iii", "vi"];
pub const TWELVE_BAR_BLUES: &[&str] = &["I", "IV", "V"];
pub const ANDALUSIAN_CADENCE: &[&str] = &["i", "VII", "VI", "V"];
/// Andalusian ending on VII instead of V
pub const ANDALUSIAN_ALT: &[&str] = &["i", "VII", "VI", "VII"];
/// The '50s progression
pub const DOO_WOP: &[&str] = &["I", "vi", "IV", "V"];
/// ii-V turnaround variant
pub const DOO_WOP_ALT: &[&str] = &["I", "vi", "ii", "V"];

pub const KISS_FROM_A_ROSE: &[&str] = &["VI", "VII", "I"];
pub const HEY_JUDE: &[&str] = &["I", "vii", "VI", "I"];

/// Amen cadence
pub const PLAGAL: &[&str] = &["IV", "I"];
pub const MINOR_PLAGAL: &[&str] = &["iv", "I"];
/// Perfect cadence
pub const AUTHENTIC: &[&str] = &["V", "I"];
/// Interrupted cadence
pub const DECEPTIVE: &[&str] = &["V", "VI"];
/// Half cadence; hangs on V
pub const IMPERFECT: &[&str] = &["V"];
/// End-of-level fanfare
pub const SUPER_MARIO: &[&str] = &["VI", "VII", "i"];

/// Every preset by name
pub const PRESETS: &[(&str, PresetGroup, &[&str])] = &[
    ("axis", PresetGroup::Progression, AXIS),
    ("axis_alt", PresetGroup::Progression, AXIS_ALT),
    ("royal_road", PresetGroup::Progression, ROYAL_ROAD),
    ("twelve_bar_blues", PresetGroup::Progression, TWELVE_BAR_BLUES),
    ("andalusian_cadence", PresetGroup::Progression, ANDALUSIAN_CADENCE),
    ("andalusian_alt", PresetGroup::Progression, ANDALUSIAN_ALT),
    ("doo_wop", PresetGroup::Progression, DOO_WOP),
    ("doo_wop_alt", PresetGroup::Progression, DOO_WOP_ALT),
    ("kiss_from_a_rose", PresetGroup::Song, KISS_FROM_A_ROSE),
    ("hey_jude", PresetGroup::Song, HEY_JUDE),
    ("plagal", PresetGroup::Cadence, PLAGAL),
    ("minor_plagal", PresetGroup::Cadence, MINOR_PLAGAL),
    ("authentic", PresetGroup::Cadence, AUTHENTIC),
    ("deceptive", PresetGroup::Cadence, DECEPTIVE),
    ("imperfect", PresetGroup::Cadence, IMPERFECT),
    ("super_mario", PresetGroup::Cadence, SUPER_MARIO),
];

/// Look up a preset by name (case-insensitive, spaces and dashes as underscores)
pub fn by_name(name: &str) -> Option<&'static [&'static str]> {
    let normalized = name.trim().to_lowercase().replace([' ', '-'], "_");
    PRESETS
        .iter()
        .find(|(preset, _, _)| *preset == normalized)
        .map(|&(_, _, numerals)| numerals)
}

/// Names of the presets in `group`
pub fn names_in(group: PresetGroup) -> Vec<&'static str> {
    PRESETS
        .iter()
        .filter(|(_, g, _)| *g == group)
        .map(|&(name, _, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("axis"), Some(AXIS));
        assert_eq!(by_name("Royal Road"), Some(ROYAL_ROAD));
        assert_eq!(by_name("super-mario"), Some(SUPER_MARIO));
        assert_eq!(by_name("pachelbel"), None);
    }

    #[test]
    fn test_groups() {
        assert_eq!(names_in(PresetGroup::Progression).len(), 8);
        assert_eq!(names_in(PresetGroup::Song), vec!["kiss_from_a_rose", "hey_jude"]);
        assert_eq!(names_in(PresetGroup::Cadence).len(), 6);
    }

    #[test]
    fn test_no_empty_presets() {
        for (name, _, numerals) in PRESETS {
            assert!(!numerals.is_empty(), "{}", name);
        }
    }
}

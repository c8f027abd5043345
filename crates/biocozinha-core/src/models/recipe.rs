// ABOUTME: Recipe record and difficulty label used across the catalog
// ABOUTME: Wire format matches the camelCase JSON produced by the generation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Preparation difficulty of a recipe.
///
/// Labels are Portuguese on the wire. Generated recipes may carry any label,
/// so unknown values are kept verbatim in [`Difficulty::Other`] instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    /// "Fácil"
    Easy,
    /// "Médio"
    Medium,
    /// "Difícil"
    Hard,
    /// Any label outside the three known ones
    Other(String),
}

impl Difficulty {
    /// Wire label for this difficulty
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Easy => "Fácil",
            Self::Medium => "Médio",
            Self::Hard => "Difícil",
            Self::Other(label) => label,
        }
    }

    /// Whether the label is one of the three known levels
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Fácil" => Self::Easy,
            "Médio" => Self::Medium,
            "Difícil" => Self::Hard,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Self::from(label.to_owned())
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

/// A single functional recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier, unique across the whole catalog
    pub id: String,
    /// Display name
    pub name: String,
    /// Preparation time in minutes, kept as text
    pub time: String,
    /// Difficulty label
    pub difficulty: Difficulty,
    /// One-line description of the functional benefit
    pub functional_action: String,
    /// Ordered ingredient lines
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    pub steps: Vec<String>,
    /// Optional expert tip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chef_tip: Option<String>,
    /// Identifier of the owning subcategory
    pub category: String,
    /// Highlighted on the dashboard; never affects filtering
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_featured: bool,
}

impl Recipe {
    /// Preparation time parsed as minutes, when the text is numeric
    #[must_use]
    pub fn minutes(&self) -> Option<u32> {
        self.time.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_known_labels() {
        assert_eq!(Difficulty::from("Fácil"), Difficulty::Easy);
        assert_eq!(Difficulty::from("Médio"), Difficulty::Medium);
        assert_eq!(Difficulty::from("Difícil"), Difficulty::Hard);
        assert!(Difficulty::Hard.is_known());
    }

    #[test]
    fn test_difficulty_unknown_label_is_preserved() {
        let difficulty = Difficulty::from("Fácil/Médio");
        assert_eq!(difficulty, Difficulty::Other("Fácil/Médio".to_owned()));
        assert!(!difficulty.is_known());
        assert_eq!(String::from(difficulty), "Fácil/Médio");
    }

    #[test]
    fn test_recipe_deserializes_camel_case_without_optionals() {
        let json = r#"{
            "id": "x1",
            "name": "Chá",
            "time": "5",
            "difficulty": "Médio",
            "functionalAction": "Acalma",
            "ingredients": ["água"],
            "steps": ["ferva"],
            "category": "dor"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.chef_tip, None);
        assert!(!recipe.is_featured);
        assert_eq!(recipe.minutes(), Some(5));
    }

    #[test]
    fn test_recipe_serializes_labels_and_skips_empty_optionals() {
        let recipe = Recipe {
            id: "x1".to_owned(),
            name: "Chá".to_owned(),
            time: "cinco".to_owned(),
            difficulty: Difficulty::Easy,
            functional_action: "Acalma".to_owned(),
            ingredients: vec![],
            steps: vec![],
            chef_tip: None,
            category: "dor".to_owned(),
            is_featured: false,
        };
        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains("\"difficulty\":\"Fácil\""));
        assert!(json.contains("\"functionalAction\""));
        assert!(!json.contains("chefTip"));
        assert!(!json.contains("isFeatured"));
        assert_eq!(recipe.minutes(), None);
    }
}

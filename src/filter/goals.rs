// ABOUTME: Health goals offered on the dashboard and their matching keywords
// ABOUTME: A goal narrows the catalog to recipes mentioning any of its keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioCozinha

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Named symptom or outcome used as a filter.
///
/// Keywords are stored lowercase so matching only lowercases the recipe side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Emagrecimento
    Weight,
    /// Alívio de Dor
    Pain,
    /// Desinflamar
    Bloat,
    /// Foco & Energia
    Energy,
    /// Saúde Intestinal
    Gut,
}

impl Goal {
    /// All goals in dashboard order
    pub const ALL: [Self; 5] = [
        Self::Weight,
        Self::Pain,
        Self::Bloat,
        Self::Energy,
        Self::Gut,
    ];

    /// Stable identifier
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Pain => "pain",
            Self::Bloat => "bloat",
            Self::Energy => "energy",
            Self::Gut => "gut",
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Weight => "Emagrecimento",
            Self::Pain => "Alívio de Dor",
            Self::Bloat => "Desinflamar",
            Self::Energy => "Foco & Energia",
            Self::Gut => "Saúde Intestinal",
        }
    }

    /// Lowercase keywords matched against name, functional action and category
    #[must_use]
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Weight => &[
                "saciedade",
                "emagrecimento",
                "queima",
                "metabolismo",
                "magra",
                "fome",
            ],
            Self::Pain => &["dor", "analgésico", "inflamação", "articulações", "cabeça"],
            Self::Bloat => &["inchaço", "retenção", "diurético", "desinflamar", "detox"],
            Self::Energy => &["energia", "foco", "disposição", "cafeína", "ânimo"],
            Self::Gut => &["intestinal", "digestão", "fibras", "estômago", "flora"],
        }
    }

    /// Resolve a goal from its identifier (case-insensitive)
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.id().eq_ignore_ascii_case(id.trim()))
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_round_trips() {
        for goal in Goal::ALL {
            assert_eq!(Goal::from_id(goal.id()), Some(goal));
        }
        assert_eq!(Goal::from_id(" BLOAT "), Some(Goal::Bloat));
        assert_eq!(Goal::from_id("sleep"), None);
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for goal in Goal::ALL {
            for keyword in goal.keywords() {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}

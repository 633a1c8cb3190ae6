//! Relationship compatibility report: eight named component scores folded
//! into one overall score with a verdict band.

use super::{aggregate, classify, AggregationMode, ScoreError, COMPATIBILITY_BANDS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fixed component list of the compatibility calculator. Each component
/// carries equal weight in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityComponent {
    Zodiac,
    Personality,
    LoveLanguage,
    Lifestyle,
    Communication,
    Interests,
    Values,
    Goals,
}

impl CompatibilityComponent {
    pub const fn ordered() -> [CompatibilityComponent; 8] {
        [
            CompatibilityComponent::Zodiac,
            CompatibilityComponent::Personality,
            CompatibilityComponent::LoveLanguage,
            CompatibilityComponent::Lifestyle,
            CompatibilityComponent::Communication,
            CompatibilityComponent::Interests,
            CompatibilityComponent::Values,
            CompatibilityComponent::Goals,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            CompatibilityComponent::Zodiac => "zodiac",
            CompatibilityComponent::Personality => "personality",
            CompatibilityComponent::LoveLanguage => "love_language",
            CompatibilityComponent::Lifestyle => "lifestyle",
            CompatibilityComponent::Communication => "communication",
            CompatibilityComponent::Interests => "interests",
            CompatibilityComponent::Values => "values",
            CompatibilityComponent::Goals => "goals",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CompatibilityComponent::Zodiac => "Zodiac",
            CompatibilityComponent::Personality => "Personality",
            CompatibilityComponent::LoveLanguage => "Love Language",
            CompatibilityComponent::Lifestyle => "Lifestyle",
            CompatibilityComponent::Communication => "Communication",
            CompatibilityComponent::Interests => "Shared Interests",
            CompatibilityComponent::Values => "Values",
            CompatibilityComponent::Goals => "Life Goals",
        }
    }
}

/// One sub-score per component, each expected in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityInputs {
    pub zodiac: f64,
    pub personality: f64,
    pub love_language: f64,
    pub lifestyle: f64,
    pub communication: f64,
    pub interests: f64,
    pub values: f64,
    pub goals: f64,
}

impl CompatibilityInputs {
    fn component_score(&self, component: CompatibilityComponent) -> f64 {
        match component {
            CompatibilityComponent::Zodiac => self.zodiac,
            CompatibilityComponent::Personality => self.personality,
            CompatibilityComponent::LoveLanguage => self.love_language,
            CompatibilityComponent::Lifestyle => self.lifestyle,
            CompatibilityComponent::Communication => self.communication,
            CompatibilityComponent::Interests => self.interests,
            CompatibilityComponent::Values => self.values,
            CompatibilityComponent::Goals => self.goals,
        }
    }
}

/// Per-component line item in the rendered report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScore {
    pub component: CompatibilityComponent,
    pub label: &'static str,
    pub score: f64,
}

/// Overall compatibility verdict derived on demand from the inputs; never
/// persisted as authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityReport {
    pub overall: f64,
    pub verdict: &'static str,
    pub components: Vec<ComponentScore>,
}

/// Build the full report: an 8-way unweighted average labelled with the
/// standard compatibility bands.
pub fn compatibility_report(
    inputs: &CompatibilityInputs,
) -> Result<CompatibilityReport, ScoreError> {
    let components: Vec<ComponentScore> = CompatibilityComponent::ordered()
        .into_iter()
        .map(|component| ComponentScore {
            component,
            label: component.label(),
            score: inputs.component_score(component),
        })
        .collect();

    let score_set: BTreeMap<String, f64> = components
        .iter()
        .map(|entry| (entry.component.key().to_string(), entry.score))
        .collect();

    let overall = aggregate(&score_set, &AggregationMode::Mean)?;
    let verdict = classify(overall, &COMPATIBILITY_BANDS).unwrap_or("Needs Work");

    Ok(CompatibilityReport {
        overall,
        verdict,
        components,
    })
}

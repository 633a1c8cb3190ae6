//! Big Five personality profile: each trait averages its four quiz answers
//! and is labelled High / Moderate / Low.

use super::{aggregate, classify, AggregationMode, ScoreError, TRAIT_BANDS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityTrait {
    pub const fn ordered() -> [PersonalityTrait; 5] {
        [
            PersonalityTrait::Openness,
            PersonalityTrait::Conscientiousness,
            PersonalityTrait::Extraversion,
            PersonalityTrait::Agreeableness,
            PersonalityTrait::Neuroticism,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            PersonalityTrait::Openness => "openness",
            PersonalityTrait::Conscientiousness => "conscientiousness",
            PersonalityTrait::Extraversion => "extraversion",
            PersonalityTrait::Agreeableness => "agreeableness",
            PersonalityTrait::Neuroticism => "neuroticism",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PersonalityTrait::Openness => "Openness",
            PersonalityTrait::Conscientiousness => "Conscientiousness",
            PersonalityTrait::Extraversion => "Extraversion",
            PersonalityTrait::Agreeableness => "Agreeableness",
            PersonalityTrait::Neuroticism => "Neuroticism",
        }
    }
}

/// Four answer scores (each 0-100) per trait, as collected by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub openness: [f64; 4],
    pub conscientiousness: [f64; 4],
    pub extraversion: [f64; 4],
    pub agreeableness: [f64; 4],
    pub neuroticism: [f64; 4],
}

impl QuizAnswers {
    fn answers_for(&self, personality_trait: PersonalityTrait) -> [f64; 4] {
        match personality_trait {
            PersonalityTrait::Openness => self.openness,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
            PersonalityTrait::Extraversion => self.extraversion,
            PersonalityTrait::Agreeableness => self.agreeableness,
            PersonalityTrait::Neuroticism => self.neuroticism,
        }
    }
}

/// Scored trait with its band label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitScore {
    #[serde(rename = "trait")]
    pub name: PersonalityTrait,
    pub label: &'static str,
    pub score: f64,
    pub level: &'static str,
}

/// Full profile in stable trait order, plus the dominant trait (highest
/// score; ties resolve to the earlier trait in the order).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityProfile {
    pub traits: Vec<TraitScore>,
    pub dominant: PersonalityTrait,
}

pub fn personality_profile(answers: &QuizAnswers) -> Result<PersonalityProfile, ScoreError> {
    let mut traits = Vec::with_capacity(PersonalityTrait::ordered().len());

    for personality_trait in PersonalityTrait::ordered() {
        let answer_set: BTreeMap<String, f64> = answers
            .answers_for(personality_trait)
            .into_iter()
            .enumerate()
            .map(|(index, score)| (format!("q{}", index + 1), score))
            .collect();

        let score = aggregate(&answer_set, &AggregationMode::Mean)?;
        let level = classify(score, &TRAIT_BANDS).unwrap_or("Low");

        traits.push(TraitScore {
            name: personality_trait,
            label: personality_trait.label(),
            score,
            level,
        });
    }

    let first = traits.first().ok_or(ScoreError::EmptyScoreSet)?;
    let mut dominant = first.name;
    let mut best_score = first.score;
    for entry in traits.iter().skip(1) {
        if entry.score > best_score {
            best_score = entry.score;
            dominant = entry.name;
        }
    }

    Ok(PersonalityProfile { traits, dominant })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(per_trait: [f64; 5]) -> QuizAnswers {
        QuizAnswers {
            openness: [per_trait[0]; 4],
            conscientiousness: [per_trait[1]; 4],
            extraversion: [per_trait[2]; 4],
            agreeableness: [per_trait[3]; 4],
            neuroticism: [per_trait[4]; 4],
        }
    }

    #[test]
    fn traits_average_their_four_answers() {
        let quiz = QuizAnswers {
            openness: [80.0, 90.0, 70.0, 100.0],
            ..answers([0.0, 50.0, 50.0, 50.0, 50.0])
        };
        let profile = personality_profile(&quiz).expect("profile builds");
        let openness = &profile.traits[0];
        assert_eq!(openness.name, PersonalityTrait::Openness);
        assert_eq!(openness.score, 85.0);
        assert_eq!(openness.level, "High");
    }

    #[test]
    fn levels_follow_the_trait_bands() {
        let profile =
            personality_profile(&answers([75.0, 55.0, 20.0, 40.0, 70.0])).expect("profile builds");
        let levels: Vec<_> = profile.traits.iter().map(|entry| entry.level).collect();
        assert_eq!(levels, vec!["High", "Moderate", "Low", "Moderate", "High"]);
    }

    #[test]
    fn dominant_trait_breaks_ties_in_stable_order() {
        let profile =
            personality_profile(&answers([60.0, 60.0, 60.0, 60.0, 60.0])).expect("profile builds");
        assert_eq!(profile.dominant, PersonalityTrait::Openness);

        let profile =
            personality_profile(&answers([10.0, 20.0, 95.0, 30.0, 40.0])).expect("profile builds");
        assert_eq!(profile.dominant, PersonalityTrait::Extraversion);
    }

    #[test]
    fn profile_preserves_trait_order() {
        let profile =
            personality_profile(&answers([1.0, 2.0, 3.0, 4.0, 5.0])).expect("profile builds");
        let order: Vec<_> = profile.traits.iter().map(|entry| entry.name).collect();
        assert_eq!(order, PersonalityTrait::ordered().to_vec());
    }
}

use serde::{Deserialize, Serialize};

/// One band of an ordered classification scale: any composite at or above
/// `min` (and below every earlier band's `min`) earns `label`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationBand<L> {
    pub min: f64,
    pub label: L,
}

/// Select the label for a composite against bands ordered by descending
/// `min`. The lower bound is inclusive, so a composite sitting exactly on a
/// boundary resolves to the higher band. A composite below every minimum
/// falls through to the final band; `None` only for an empty band list.
pub fn classify<L: AsRef<str>>(composite: f64, bands: &[ClassificationBand<L>]) -> Option<&str> {
    bands
        .iter()
        .find(|band| composite >= band.min)
        .or_else(|| bands.last())
        .map(|band| band.label.as_ref())
}

/// Bands used by the compatibility calculator.
pub const COMPATIBILITY_BANDS: [ClassificationBand<&str>; 4] = [
    ClassificationBand { min: 85.0, label: "Excellent Match" },
    ClassificationBand { min: 70.0, label: "Good" },
    ClassificationBand { min: 60.0, label: "Moderate" },
    ClassificationBand { min: 0.0, label: "Needs Work" },
];

/// Bands used per trait by the personality quiz.
pub const TRAIT_BANDS: [ClassificationBand<&str>; 3] = [
    ClassificationBand { min: 70.0, label: "High" },
    ClassificationBand { min: 40.0, label: "Moderate" },
    ClassificationBand { min: 0.0, label: "Low" },
];

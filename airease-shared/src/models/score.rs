use serde::{Deserialize, Serialize};

pub const DEFAULT_WEIGHTS_LABEL: &str = "default";

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Per-dimension experience ratings, each within [0, 10]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreDimensions {
    pub safety: f64,
    pub comfort: f64,
    pub service: f64,
    pub value: f64,
}

impl ScoreDimensions {
    /// Builds dimensions clamped to [0, 10] and rounded to one decimal.
    pub fn new(safety: f64, comfort: f64, service: f64, value: f64) -> Self {
        let norm = |v: f64| round1(v.clamp(0.0, 10.0));
        Self {
            safety: norm(safety),
            comfort: norm(comfort),
            service: norm(service),
            value: norm(value),
        }
    }

    pub fn overall(&self, weights: &ScoreWeights) -> f64 {
        round1(
            self.safety * weights.safety
                + self.comfort * weights.comfort
                + self.service * weights.service
                + self.value * weights.value,
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreWeights {
    pub safety: f64,
    pub comfort: f64,
    pub service: f64,
    pub value: f64,
}

impl ScoreWeights {
    pub const DEFAULT: ScoreWeights = ScoreWeights {
        safety: 0.25,
        comfort: 0.30,
        service: 0.20,
        value: 0.25,
    };
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Traveller profiles that re-weight the overall score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Business,
    Family,
    Student,
}

impl Persona {
    pub fn weights(&self) -> ScoreWeights {
        match self {
            Persona::Business => ScoreWeights { safety: 0.25, comfort: 0.35, service: 0.25, value: 0.15 },
            Persona::Family => ScoreWeights { safety: 0.35, comfort: 0.30, service: 0.25, value: 0.10 },
            Persona::Student => ScoreWeights { safety: 0.20, comfort: 0.20, service: 0.15, value: 0.45 },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Business => "business",
            Persona::Family => "family",
            Persona::Student => "student",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreExplanation {
    pub dimension: String,
    pub title: String,
    pub detail: String,
    pub is_positive: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightScore {
    pub overall_score: f64,
    pub dimensions: ScoreDimensions,
    pub highlights: Vec<String>,
    pub explanations: Vec<ScoreExplanation>,
    pub persona_weights_applied: String,
}

impl FlightScore {
    pub const MAX_HIGHLIGHTS: usize = 3;

    /// Assembles a score with the default weighting. Highlights beyond the cap are dropped.
    pub fn new(
        dimensions: ScoreDimensions,
        mut highlights: Vec<String>,
        explanations: Vec<ScoreExplanation>,
    ) -> Self {
        highlights.truncate(Self::MAX_HIGHLIGHTS);
        Self {
            overall_score: dimensions.overall(&ScoreWeights::DEFAULT),
            dimensions,
            highlights,
            explanations,
            persona_weights_applied: DEFAULT_WEIGHTS_LABEL.to_string(),
        }
    }

    /// Returns a copy whose overall score uses the persona's weights.
    pub fn reweighted(&self, persona: Persona) -> Self {
        Self {
            overall_score: self.dimensions.overall(&persona.weights()),
            persona_weights_applied: persona.as_str().to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_are_clamped_and_rounded() {
        let dims = ScoreDimensions::new(12.0, -1.0, 7.46, 8.04);
        assert_eq!(dims.safety, 10.0);
        assert_eq!(dims.comfort, 0.0);
        assert_eq!(dims.service, 7.5);
        assert_eq!(dims.value, 8.0);
    }

    #[test]
    fn test_overall_uses_default_weights() {
        let dims = ScoreDimensions::new(8.0, 7.0, 9.0, 6.0);
        let score = FlightScore::new(dims, vec![], vec![]);
        // 2.0 + 2.1 + 1.8 + 1.5
        assert_eq!(score.overall_score, 7.4);
        assert_eq!(score.persona_weights_applied, "default");
    }

    #[test]
    fn test_highlights_capped_at_three() {
        let dims = ScoreDimensions::new(8.0, 8.0, 8.0, 8.0);
        let highlights = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let score = FlightScore::new(dims, highlights, vec![]);
        assert_eq!(score.highlights, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_persona_reweighting_keeps_dimensions() {
        let dims = ScoreDimensions::new(8.0, 6.0, 8.0, 10.0);
        let score = FlightScore::new(dims, vec!["nonstop".into()], vec![]);
        let student = score.reweighted(Persona::Student);
        // 1.6 + 1.2 + 1.2 + 4.5
        assert_eq!(student.overall_score, 8.5);
        assert_eq!(student.dimensions, score.dimensions);
        assert_eq!(student.highlights, score.highlights);
        assert_eq!(student.persona_weights_applied, "student");
    }
}

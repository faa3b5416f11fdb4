//! Status tiers derived from the overall score

use wellscope_domain::impl_wire_key_enum;

/// Four-tier status shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Excellent,
    Good,
    NeedsImprovement,
    Concerning,
}

impl_wire_key_enum!(ScoreTier {
    Excellent => "excellent",
    Good => "good",
    NeedsImprovement => "needs_improvement",
    Concerning => "concerning",
});

/// Visual accent paired with each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Green,
    Blue,
    Amber,
    Red,
}

impl ScoreTier {
    /// Classify a score. Lower bounds are inclusive and checked from the top
    /// down; anything that fails every check (including NaN) is
    /// `Concerning`.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::NeedsImprovement
        } else {
            Self::Concerning
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Concerning => "Concerning",
        }
    }

    pub const fn accent(&self) -> Accent {
        match self {
            Self::Excellent => Accent::Green,
            Self::Good => Accent::Blue,
            Self::NeedsImprovement => Accent::Amber,
            Self::Concerning => Accent::Red,
        }
    }
}

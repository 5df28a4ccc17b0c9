//! Risk scoring for Normal changes.
//!
//! Seven dimensions are scored 1-5 and weighted equally. The composite is the
//! mean rounded to one decimal place, and the tier is read off the rounded
//! composite:
//!
//! ```text
//! 1.0 - 2.0  Low     (peer review)
//! 2.1 - 3.5  Medium  (change authority)
//! 3.6 - 5.0  High    (full CAB)
//! ```
use crate::error::InvalidInput;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;
/// Slider position a fresh request starts from.
pub const MIDPOINT_SCORE: u8 = 3;

const LOW_CEILING: f64 = 2.0;
const MEDIUM_CEILING: f64 = 3.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskDimension {
    ImpactScope,
    Complexity,
    Reversibility,
    TestingConfidence,
    DeploymentHistory,
    TimingSensitivity,
    DependencyCount,
}

impl RiskDimension {
    /// Positional order used for score sequences and breakdowns.
    pub const ALL: [RiskDimension; 7] = [
        Self::ImpactScope,
        Self::Complexity,
        Self::Reversibility,
        Self::TestingConfidence,
        Self::DeploymentHistory,
        Self::TimingSensitivity,
        Self::DependencyCount,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn label(self) -> &'static str {
        match self {
            Self::ImpactScope => "Impact Scope",
            Self::Complexity => "Complexity",
            Self::Reversibility => "Reversibility",
            Self::TestingConfidence => "Testing Confidence",
            Self::DeploymentHistory => "Deployment History",
            Self::TimingSensitivity => "Timing Sensitivity",
            Self::DependencyCount => "Dependency Count",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Map a rounded composite onto its tier. Upper bounds are inclusive.
    pub fn from_composite(composite: f64) -> Self {
        if composite <= LOW_CEILING {
            Self::Low
        } else if composite <= MEDIUM_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Badge text, e.g. "Medium Risk".
    pub fn badge(self) -> String {
        format!("{} Risk", self.as_str())
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub dimension: RiskDimension,
    pub label: &'static str,
    pub score: i64,
}

/// Label/score pairs in [`RiskDimension::ALL`] order.
pub fn dimension_breakdown(values: &[i64]) -> Vec<DimensionScore> {
    RiskDimension::ALL
        .iter()
        .zip(values)
        .map(|(&dimension, &score)| DimensionScore {
            dimension,
            label: dimension.label(),
            score,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Mean score rounded to one decimal place.
    pub composite: f64,
    pub tier: RiskTier,
}

impl RiskAssessment {
    /// Composite formatted with exactly one decimal place.
    pub fn composite_display(&self) -> String {
        format!("{:.1}", self.composite)
    }
}

/// Score seven dimensions, one per [`RiskDimension::ALL`] entry.
///
/// The mean is rounded half away from zero in integer tenths. Seven integer
/// scores never land exactly on a half tenth, so the rounding convention
/// cannot change the result.
pub fn assess_risk(values: &[i64]) -> Result<RiskAssessment, InvalidInput> {
    let sum = checked_sum(values)?;
    let count = RiskDimension::COUNT as u32;
    let tenths = (sum * 20 + count) / (2 * count);
    let composite = f64::from(tenths) / 10.0;
    Ok(RiskAssessment {
        composite,
        tier: RiskTier::from_composite(composite),
    })
}

fn checked_sum(values: &[i64]) -> Result<u32, InvalidInput> {
    if values.len() != RiskDimension::COUNT {
        return Err(InvalidInput::ScoreCount {
            expected: RiskDimension::COUNT,
            actual: values.len(),
        });
    }
    let mut sum = 0u32;
    for (&value, dimension) in values.iter().zip(RiskDimension::ALL) {
        let score = u8::try_from(value)
            .ok()
            .filter(|score| (MIN_SCORE..=MAX_SCORE).contains(score))
            .ok_or(InvalidInput::ScoreOutOfRange {
                dimension: dimension.label(),
                value,
            })?;
        sum += u32::from(score);
    }
    Ok(sum)
}

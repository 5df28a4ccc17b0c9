//! End-to-end change assessment.
//!
//! Sequences the three decision steps: classify, score only when the change
//! is Normal, then resolve the approval path.
use crate::approval::{resolve_approval_path, ApprovalPath};
use crate::classify::{classify_change, ChangeSignals, Classification};
use crate::error::InvalidInput;
use crate::risk::{assess_risk, dimension_breakdown, DimensionScore, RiskAssessment};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChangeAssessment {
    pub classification: Classification,
    pub classification_summary: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskReport>,
    pub approval_path: &'static ApprovalPath,
}

/// Risk result plus the inputs that produced it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskReport {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub badge: String,
    pub breakdown: Vec<DimensionScore>,
}

impl RiskReport {
    pub fn new(scores: &[i64]) -> Result<Self, InvalidInput> {
        let assessment = assess_risk(scores)?;
        Ok(Self {
            assessment,
            badge: assessment.tier.badge(),
            breakdown: dimension_breakdown(scores),
        })
    }
}

/// Run the full decision pipeline for one change.
///
/// Scores are only read, and only validated, for Normal changes; they are
/// required there.
pub fn assess_change(
    signals: ChangeSignals,
    scores: Option<&[i64]>,
) -> Result<ChangeAssessment, InvalidInput> {
    let classification = classify_change(signals);
    let risk = if classification.requires_risk_assessment() {
        scores.map(RiskReport::new).transpose()?
    } else {
        None
    };
    let tier = risk.as_ref().map(|report| report.assessment.tier);
    let approval_path = resolve_approval_path(classification, tier)?;
    Ok(ChangeAssessment {
        classification,
        classification_summary: classification.summary(),
        risk,
        approval_path,
    })
}

//! Approval workflow definitions.
//!
//! There are exactly five approval paths. Each is static data keyed by
//! [`ApprovalPathKey`]; resolution only picks the key.
use crate::classify::Classification;
use crate::error::InvalidInput;
use crate::risk::RiskTier;
use serde::Serialize;

/// A named, ordered sequence of approval steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ApprovalPath {
    pub title: &'static str,
    /// Execution order; preserved verbatim.
    pub steps: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ApprovalPathKey {
    Standard,
    NormalLow,
    NormalMedium,
    NormalHigh,
    Emergency,
}

impl ApprovalPathKey {
    pub const ALL: [ApprovalPathKey; 5] = [
        Self::Standard,
        Self::NormalLow,
        Self::NormalMedium,
        Self::NormalHigh,
        Self::Emergency,
    ];

    /// Pick the path for a classification. The tier only matters for Normal
    /// changes and is ignored otherwise.
    pub fn resolve(
        classification: Classification,
        tier: Option<RiskTier>,
    ) -> Result<Self, InvalidInput> {
        match (classification, tier) {
            (Classification::Standard, _) => Ok(Self::Standard),
            (Classification::Emergency, _) => Ok(Self::Emergency),
            (Classification::Normal, Some(RiskTier::Low)) => Ok(Self::NormalLow),
            (Classification::Normal, Some(RiskTier::Medium)) => Ok(Self::NormalMedium),
            (Classification::Normal, Some(RiskTier::High)) => Ok(Self::NormalHigh),
            (Classification::Normal, None) => Err(InvalidInput::MissingRiskTier),
        }
    }

    pub fn path(self) -> &'static ApprovalPath {
        match self {
            Self::Standard => &STANDARD_FLOW,
            Self::NormalLow => &NORMAL_LOW_FLOW,
            Self::NormalMedium => &NORMAL_MEDIUM_FLOW,
            Self::NormalHigh => &NORMAL_HIGH_FLOW,
            Self::Emergency => &EMERGENCY_FLOW,
        }
    }
}

pub fn resolve_approval_path(
    classification: Classification,
    tier: Option<RiskTier>,
) -> Result<&'static ApprovalPath, InvalidInput> {
    ApprovalPathKey::resolve(classification, tier).map(ApprovalPathKey::path)
}

static STANDARD_FLOW: ApprovalPath = ApprovalPath {
    title: "Standard Change Flow (Section 4.1)",
    steps: &[
        "Requester triggers pipeline",
        "Automated pre-checks (lint, test, scan)",
        "Auto-approved (change model match verified)",
        "Deploy",
        "Automated validation",
        "Change record logged automatically",
    ],
};

static NORMAL_LOW_FLOW: ApprovalPath = ApprovalPath {
    title: "Normal Change Flow \u{2014} Low Risk (Section 4.2)",
    steps: &[
        "Requester submits RFC",
        "Automated risk scoring",
        "Peer review (1 reviewer, async)",
        "Approved \u{2192} Scheduled in change calendar",
        "Deploy in approved window",
        "Validation",
        "Close RFC",
    ],
};

static NORMAL_MEDIUM_FLOW: ApprovalPath = ApprovalPath {
    title: "Normal Change Flow \u{2014} Medium Risk (Section 4.3)",
    steps: &[
        "Requester submits RFC",
        "Automated risk scoring",
        "Technical review (architect or senior engineer)",
        "Change authority approval",
        "Scheduled in change calendar (with conflict check)",
        "Deploy with monitoring",
        "Validation + brief PIR",
        "Close RFC",
    ],
};

static NORMAL_HIGH_FLOW: ApprovalPath = ApprovalPath {
    title: "Normal Change Flow \u{2014} High Risk (Section 4.4)",
    steps: &[
        "Requester submits RFC",
        "Automated risk scoring",
        "Technical review + security review",
        "Pre-CAB: documentation completeness check",
        "CAB review (weekly cadence or ad-hoc)",
        "Senior management sign-off",
        "Scheduled with communication plan",
        "Deploy with war-room / bridge call",
        "Validation + full PIR",
        "Close RFC",
    ],
};

static EMERGENCY_FLOW: ApprovalPath = ApprovalPath {
    title: "Emergency Change Flow (Section 4.5)",
    steps: &[
        "Incident declared",
        "Emergency RFC created (minimal fields)",
        "ECAB approval (phone/chat, 2 approvers minimum)",
        "Implement immediately",
        "Validate service restored",
        "Retrospective RFC completion (within 48h)",
        "Mandatory PIR",
    ],
};

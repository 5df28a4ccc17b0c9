//! Change classification decision tree.
//!
//! An outage dominates everything else; otherwise a pre-approved change model
//! makes the change Standard, and anything left over is Normal and needs a
//! risk assessment before it can be routed.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two yes/no answers that decide a classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSignals {
    pub service_down: bool,
    pub pre_approved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Classification {
    Standard,
    Normal,
    Emergency,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Normal => "Normal",
            Self::Emergency => "Emergency",
        }
    }

    /// Whether the change must be risk scored before an approval path exists.
    pub fn requires_risk_assessment(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Explanation shown to the requester alongside the classification.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Standard => {
                "Pre-authorized, low-risk, repeatable change. \
                 No per-instance approval required \u{2014} pre-approved via change model. \
                 Lead time target: minutes to hours (automated pipeline)."
            }
            Self::Emergency => {
                "Must be implemented immediately to restore service or prevent imminent critical impact. \
                 Expedited ECAB approval required. Full documentation within 48 hours. \
                 A corresponding incident or problem record is mandatory."
            }
            Self::Normal => {
                "This change requires assessment, authorization, and scheduling. \
                 Score the 7 risk dimensions to determine the risk tier and approval path."
            }
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify_change(signals: ChangeSignals) -> Classification {
    if signals.service_down {
        return Classification::Emergency;
    }
    if signals.pre_approved {
        return Classification::Standard;
    }
    Classification::Normal
}

//! Change request files.
//!
//! A request captures the classification answers and, for Normal changes, the
//! seven dimension scores. Files are plain JSON so they can be drafted by hand
//! from the stub written by `chgate init`.
use crate::classify::ChangeSignals;
use crate::risk::{RiskDimension, MIDPOINT_SCORE};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const REQUEST_SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub schema_version: u32,
    pub service_down: bool,
    pub pre_approved: bool,
    /// Only read when the change classifies as Normal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskProfile>,
}

/// Dimension scores by name. Kept as wide integers so out-of-range values
/// survive parsing and are reported against their dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub impact_scope: i64,
    pub complexity: i64,
    pub reversibility: i64,
    pub testing_confidence: i64,
    pub deployment_history: i64,
    pub timing_sensitivity: i64,
    pub dependency_count: i64,
}

impl RiskProfile {
    pub fn midpoint() -> Self {
        let score = i64::from(MIDPOINT_SCORE);
        Self {
            impact_scope: score,
            complexity: score,
            reversibility: score,
            testing_confidence: score,
            deployment_history: score,
            timing_sensitivity: score,
            dependency_count: score,
        }
    }

    pub fn get(&self, dimension: RiskDimension) -> i64 {
        match dimension {
            RiskDimension::ImpactScope => self.impact_scope,
            RiskDimension::Complexity => self.complexity,
            RiskDimension::Reversibility => self.reversibility,
            RiskDimension::TestingConfidence => self.testing_confidence,
            RiskDimension::DeploymentHistory => self.deployment_history,
            RiskDimension::TimingSensitivity => self.timing_sensitivity,
            RiskDimension::DependencyCount => self.dependency_count,
        }
    }

    /// Scores in [`RiskDimension::ALL`] order.
    pub fn values(&self) -> [i64; RiskDimension::COUNT] {
        RiskDimension::ALL.map(|dimension| self.get(dimension))
    }
}

impl ChangeRequest {
    pub fn signals(&self) -> ChangeSignals {
        ChangeSignals {
            service_down: self.service_down,
            pre_approved: self.pre_approved,
        }
    }

    /// Raw scores, if the request carries any. Range checks happen when a
    /// Normal change is assessed.
    pub fn scores(&self) -> Option<[i64; RiskDimension::COUNT]> {
        self.risk.as_ref().map(RiskProfile::values)
    }
}

/// Request written by `init`: a Normal change with every dimension at the midpoint.
pub fn default_request() -> ChangeRequest {
    ChangeRequest {
        schema_version: REQUEST_SCHEMA_VERSION,
        service_down: false,
        pre_approved: false,
        risk: Some(RiskProfile::midpoint()),
    }
}

pub fn request_stub() -> Result<String> {
    serde_json::to_string_pretty(&default_request()).context("serialize request stub")
}

pub fn load_request(path: &Path) -> Result<ChangeRequest> {
    let bytes = fs::read(path).with_context(|| format!("read request {}", path.display()))?;
    let request: ChangeRequest = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse request JSON {}", path.display()))?;
    Ok(request)
}

/// Persist a request in a stable JSON format.
pub fn write_request(path: &Path, request: &ChangeRequest) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(request).context("serialize request")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Check the schema version.
///
/// The risk block is ignored unless the change classifies as Normal, so its
/// scores are validated by the assessment rather than here.
pub fn validate_request(request: &ChangeRequest) -> Result<()> {
    if request.schema_version != REQUEST_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported request schema_version {}",
            request.schema_version
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::assess_change;
    use crate::error::InvalidInput;

    #[test]
    fn stub_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested/request.json");
        write_request(&path, &default_request()).expect("write request");
        let loaded = load_request(&path).expect("load request");
        assert_eq!(loaded, default_request());
        validate_request(&loaded).expect("stub is valid");
        assert_eq!(loaded.scores().map(|s| s.iter().sum::<i64>()), Some(21));
    }

    #[test]
    fn stub_lists_dimensions_by_name() {
        let stub = request_stub().expect("stub");
        assert!(stub.contains("\"impact_scope\": 3"));
        assert!(stub.contains("\"dependency_count\": 3"));
        assert!(stub.contains("\"schema_version\": 1"));
    }

    #[test]
    fn risk_block_is_optional() {
        let request: ChangeRequest = serde_json::from_str(
            r#"{"schema_version": 1, "service_down": true, "pre_approved": false}"#,
        )
        .expect("parse request");
        assert!(request.risk.is_none());
        assert!(request.signals().service_down);
        assert_eq!(request.scores(), None);
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let mut request = default_request();
        request.schema_version = 2;
        let err = validate_request(&request).expect_err("schema mismatch");
        assert!(err.to_string().contains("schema_version 2"));
    }

    #[test]
    fn out_of_range_risk_block_only_matters_for_normal_changes() {
        let mut request = default_request();
        if let Some(risk) = request.risk.as_mut() {
            risk.timing_sensitivity = 9;
        }
        validate_request(&request).expect("schema is valid");
        let scores = request.scores().expect("risk block");
        assert_eq!(
            assess_change(request.signals(), Some(scores.as_slice())),
            Err(InvalidInput::ScoreOutOfRange {
                dimension: "Timing Sensitivity",
                value: 9
            })
        );

        request.pre_approved = true;
        let standard =
            assess_change(request.signals(), Some(scores.as_slice())).expect("standard");
        assert!(standard.risk.is_none());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.json");
        let err = load_request(&path).expect_err("missing file");
        assert!(err.to_string().contains("absent.json"));
    }
}

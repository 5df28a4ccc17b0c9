//! Plain-text rendering of decisions for terminal output.
use crate::approval::ApprovalPath;
use crate::assessment::{ChangeAssessment, RiskReport};
use crate::classify::Classification;

pub fn render_classification(classification: Classification) -> String {
    let mut out = String::new();
    push_line(&mut out, &format!("Classification: {classification}"));
    push_line(&mut out, classification.summary());
    out
}

pub fn render_risk(report: &RiskReport) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        &format!(
            "Composite score: {} ({})",
            report.assessment.composite_display(),
            report.badge
        ),
    );
    for entry in &report.breakdown {
        push_line(&mut out, &format!("  {}: {}", entry.label, entry.score));
    }
    out
}

/// Title followed by numbered steps, one per line.
pub fn render_approval_path(path: &ApprovalPath) -> String {
    let mut out = String::new();
    push_line(&mut out, path.title);
    for (idx, step) in path.steps.iter().enumerate() {
        push_line(&mut out, &format!("{}. {}", idx + 1, step));
    }
    out
}

pub fn render_assessment(assessment: &ChangeAssessment) -> String {
    let mut out = render_classification(assessment.classification);
    if let Some(risk) = &assessment.risk {
        out.push('\n');
        out.push_str(&render_risk(risk));
    }
    out.push('\n');
    out.push_str(&render_approval_path(assessment.approval_path));
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

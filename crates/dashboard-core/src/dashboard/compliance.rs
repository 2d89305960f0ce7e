//! Compliance Overview
//!
//! Aggregates over clause compliance records.

use serde::{Deserialize, Serialize};

use crate::domain::ClauseCompliance;

const REVIEW_REQUIRED: &str = "Review Required";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub compliant: usize,
    pub review_required: usize,
    pub non_compliant: usize,
}

fn is_compliant(item: &ClauseCompliance) -> bool {
    item.compliance_summary.eq_ignore_ascii_case("compliant")
}

fn needs_review(item: &ClauseCompliance) -> bool {
    item.closeout_status == REVIEW_REQUIRED
}

/// Rounded share of compliant clauses, 0 for no data
pub fn compliance_percentage(items: &[ClauseCompliance]) -> u32 {
    if items.is_empty() {
        return 0;
    }
    let compliant = items.iter().filter(|i| is_compliant(i)).count();
    (compliant as f64 / items.len() as f64 * 100.0).round() as u32
}

/// High risk or pending review
pub fn count_critical_issues(items: &[ClauseCompliance]) -> usize {
    items
        .iter()
        .filter(|i| i.risk_assessment == "High" || needs_review(i))
        .count()
}

/// Contract ids in first-seen order
pub fn unique_contracts(items: &[ClauseCompliance]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item.contract_id) {
            seen.push(item.contract_id.clone());
        }
    }
    seen
}

pub fn clauses_by_contract<'a>(
    items: &'a [ClauseCompliance],
    contract_id: &str,
) -> Vec<&'a ClauseCompliance> {
    items.iter().filter(|i| i.contract_id == contract_id).collect()
}

/// Anything not high or medium counts as low.
pub fn summary_by_risk(items: &[ClauseCompliance]) -> RiskSummary {
    items.iter().fold(RiskSummary::default(), |mut acc, item| {
        match item.risk_assessment.to_lowercase().as_str() {
            "high" => acc.high += 1,
            "medium" => acc.medium += 1,
            _ => acc.low += 1,
        }
        acc
    })
}

/// Compliant wins over review required, which wins over non-compliant.
pub fn summary_by_status(items: &[ClauseCompliance]) -> StatusSummary {
    items.iter().fold(StatusSummary::default(), |mut acc, item| {
        if is_compliant(item) {
            acc.compliant += 1;
        } else if needs_review(item) {
            acc.review_required += 1;
        } else {
            acc.non_compliant += 1;
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(contract: &str, summary: &str, status: &str, risk: &str) -> ClauseCompliance {
        ClauseCompliance {
            contract_id: contract.to_string(),
            compliance_summary: summary.to_string(),
            closeout_status: status.to_string(),
            risk_assessment: risk.to_string(),
            ..ClauseCompliance::default()
        }
    }

    fn sample() -> Vec<ClauseCompliance> {
        vec![
            clause("Contract_2", "Market Research", "Review Required", "High"),
            clause("Contract_2", "Compliant", "Review Required", "High"),
            clause("Contract_1", "compliant", "Closed", "Low"),
            clause("Contract_3", "Missing signature", "Open", "Medium"),
        ]
    }

    #[test]
    fn test_percentage_and_critical() {
        assert_eq!(compliance_percentage(&sample()), 50);
        assert_eq!(compliance_percentage(&[]), 0);
        assert_eq!(count_critical_issues(&sample()), 2);

        let thirds = &sample()[1..];
        assert_eq!(compliance_percentage(thirds), 67);
    }

    #[test]
    fn test_grouping() {
        let items = sample();
        assert_eq!(unique_contracts(&items), vec!["Contract_2", "Contract_1", "Contract_3"]);
        assert_eq!(clauses_by_contract(&items, "Contract_2").len(), 2);
        assert!(clauses_by_contract(&items, "Contract_9").is_empty());
    }

    #[test]
    fn test_summaries() {
        let items = sample();
        assert_eq!(summary_by_risk(&items), RiskSummary { high: 2, medium: 1, low: 1 });
        assert_eq!(
            summary_by_status(&items),
            StatusSummary { compliant: 2, review_required: 1, non_compliant: 1 }
        );
        assert_eq!(summary_by_risk(&[]), RiskSummary::default());
    }
}

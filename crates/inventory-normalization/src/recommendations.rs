//! Issue-to-action mapping for the anomaly report.

use inventory_model::{Issue, IssueField};

const RECOMMENDED_ACTIONS: &[(IssueField, &str)] = &[
    (IssueField::Ip, "Correct IP or mark record for review"),
    (IssueField::Hostname, "Adjust hostname to RFC-compliant label"),
    (IssueField::Fqdn, "Provide valid FQDN or clear the field"),
    (IssueField::Mac, "Fix MAC address to 12 hex digits"),
    (IssueField::DeviceType, "Confirm device type"),
];

pub fn recommended_action(field: IssueField) -> Option<&'static str> {
    RECOMMENDED_ACTIONS
        .iter()
        .find(|(mapped, _)| *mapped == field)
        .map(|(_, action)| *action)
}

/// One action per distinct issue field, in first-seen order.
pub fn recommendations_for(issues: &[Issue]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::new();
    for issue in issues {
        let Some(action) = recommended_action(issue.field) else {
            continue;
        };
        if !actions.iter().any(|existing| existing == action) {
            actions.push(action.to_string());
        }
    }
    actions
}

//! Hostname and FQDN reconciliation.

use std::sync::LazyLock;

use inventory_model::{Issue, IssueField, IssueKind, NormalizationStep, StepLog, Validity};
use regex::Regex;

/// RFC 952/1123 label: alphanumeric at both ends, hyphens inside, 1-63 chars.
static HOST_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").expect("Invalid host label regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameNormalization {
    pub hostname: String,
    pub hostname_valid: Validity,
    pub fqdn: String,
    pub fqdn_consistent: Validity,
    pub steps: StepLog,
    pub issues: Vec<Issue>,
}

pub fn is_valid_label(label: &str) -> bool {
    HOST_LABEL_REGEX.is_match(label)
}

/// Two or more labels, each a valid host label.
pub fn is_valid_fqdn(fqdn: &str) -> bool {
    let mut labels = 0usize;
    for label in fqdn.split('.') {
        if !is_valid_label(label) {
            return false;
        }
        labels += 1;
    }
    labels >= 2
}

pub fn normalize_names(hostname_raw: Option<&str>, fqdn_raw: Option<&str>) -> NameNormalization {
    let mut steps = StepLog::new();
    let mut issues = Vec::new();

    let hostname_input = hostname_raw.map(str::trim).unwrap_or_default();
    let mut hostname = String::new();
    let mut hostname_valid = Validity::NotApplicable;
    if !hostname_input.is_empty() {
        steps.push(NormalizationStep::HostnameTrim);
        hostname = hostname_input.to_lowercase();
        steps.push(NormalizationStep::HostnameLower);
        hostname_valid = Validity::from(is_valid_label(&hostname));
        if !hostname_valid.is_valid() {
            issues.push(Issue::new(
                IssueField::Hostname,
                IssueKind::InvalidLabel,
                hostname_raw.unwrap_or_default(),
            ));
        }
    }

    let fqdn_input = fqdn_raw.map(str::trim).unwrap_or_default();
    let mut fqdn = String::new();
    let mut fqdn_valid = false;
    if !fqdn_input.is_empty() {
        steps.push(NormalizationStep::FqdnTrim);
        fqdn = fqdn_input.to_lowercase();
        steps.push(NormalizationStep::FqdnLower);
        fqdn_valid = is_valid_fqdn(&fqdn);
        if !fqdn_valid {
            issues.push(Issue::new(
                IssueField::Fqdn,
                IssueKind::InvalidFormat,
                fqdn_raw.unwrap_or_default(),
            ));
        }
    }
    let first_label = fqdn.split('.').next().unwrap_or_default();

    // The FQDN labels already passed validation, so the derived hostname does too.
    if hostname.is_empty() && fqdn_valid {
        hostname = first_label.to_string();
        hostname_valid = Validity::Valid;
        steps.push(NormalizationStep::HostnameFromFqdn);
    }

    let mut fqdn_consistent = Validity::NotApplicable;
    if !hostname.is_empty() && !fqdn.is_empty() {
        fqdn_consistent = Validity::from(fqdn_valid && hostname == first_label);
        if fqdn_valid && hostname != first_label {
            issues.push(Issue::new(
                IssueField::Fqdn,
                IssueKind::HostnameMismatch,
                fqdn_raw.unwrap_or_default(),
            ));
        }
    }

    NameNormalization {
        hostname,
        hostname_valid,
        fqdn,
        fqdn_consistent,
        steps,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_derived_from_fqdn() {
        let result = normalize_names(Some(""), Some("srv-1.example.com"));
        assert_eq!(result.hostname, "srv-1");
        assert_eq!(result.hostname_valid, Validity::Valid);
        assert_eq!(result.fqdn, "srv-1.example.com");
        assert_eq!(result.fqdn_consistent, Validity::Valid);
        assert!(result.steps.contains(NormalizationStep::HostnameFromFqdn));
        assert!(result.issues.is_empty());
    }

    #[test]
    fn invalid_standalone_hostname_is_kept() {
        let result = normalize_names(Some("bad_host"), Some(""));
        assert_eq!(result.hostname, "bad_host");
        assert_eq!(result.hostname_valid, Validity::Invalid);
        assert_eq!(result.fqdn_consistent, Validity::NotApplicable);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].field, IssueField::Hostname);
        assert_eq!(result.issues[0].kind, IssueKind::InvalidLabel);
    }

    #[test]
    fn hostname_is_lowercased_and_compared() {
        let result = normalize_names(Some(" Web-01 "), Some("WEB-01.Corp.Example.com"));
        assert_eq!(result.hostname, "web-01");
        assert_eq!(result.fqdn, "web-01.corp.example.com");
        assert_eq!(result.fqdn_consistent, Validity::Valid);
        assert_eq!(
            result.steps.joined(),
            "hostname_trim|hostname_lower|fqdn_trim|fqdn_lower"
        );
    }

    #[test]
    fn mismatch_is_reported_against_fqdn() {
        let result = normalize_names(Some("web-01"), Some("web-02.example.com"));
        assert_eq!(result.fqdn_consistent, Validity::Invalid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].field, IssueField::Fqdn);
        assert_eq!(result.issues[0].kind, IssueKind::HostnameMismatch);
        assert_eq!(result.issues[0].value, "web-02.example.com");
    }

    #[test]
    fn invalid_fqdn_is_never_consistent() {
        let result = normalize_names(Some("web-01"), Some("web-01"));
        assert_eq!(result.fqdn_consistent, Validity::Invalid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::InvalidFormat);

        let result = normalize_names(None, Some("web_01.example.com"));
        assert_eq!(result.hostname, "");
        assert_eq!(result.hostname_valid, Validity::NotApplicable);
        assert_eq!(result.fqdn_consistent, Validity::NotApplicable);
    }

    #[test]
    fn label_rules() {
        assert!(is_valid_label("a"));
        assert!(is_valid_label("A-1"));
        assert!(is_valid_label(&"a".repeat(63)));
        assert!(!is_valid_label(&"a".repeat(64)));
        assert!(!is_valid_label("-a"));
        assert!(!is_valid_label("a-"));
        assert!(!is_valid_label(""));
        assert!(!is_valid_fqdn("example"));
        assert!(!is_valid_fqdn("example.com."));
        assert!(is_valid_fqdn("a.b"));
    }
}

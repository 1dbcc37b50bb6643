//! MAC address normalization.

use inventory_model::{Issue, IssueField, IssueKind, NormalizationStep, StepLog, Validity};

const MAC_HEX_DIGITS: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacNormalization {
    pub mac: String,
    pub valid: Validity,
    pub steps: StepLog,
    pub issues: Vec<Issue>,
}

/// Reduce to hex digits and reformat as `aa:bb:cc:dd:ee:ff`.
///
/// An absent MAC is not a defect: it yields empty outputs and no issue.
pub fn normalize_mac(raw: Option<&str>) -> MacNormalization {
    let mut steps = StepLog::new();
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        steps.push(NormalizationStep::MacMissing);
        return MacNormalization {
            steps,
            ..MacNormalization::default()
        };
    }

    steps.push(NormalizationStep::MacTrim);
    let hex: Vec<char> = trimmed
        .chars()
        .filter(char::is_ascii_hexdigit)
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    if hex.len() == MAC_HEX_DIGITS {
        steps.push(NormalizationStep::MacHexExtract);
        steps.push(NormalizationStep::MacNormalize);
        let mut mac = String::with_capacity(17);
        for (idx, pair) in hex.chunks(2).enumerate() {
            if idx > 0 {
                mac.push(':');
            }
            mac.extend(pair);
        }
        return MacNormalization {
            mac,
            valid: Validity::Valid,
            steps,
            issues: Vec::new(),
        };
    }

    MacNormalization {
        mac: trimmed.to_string(),
        valid: Validity::Invalid,
        steps,
        issues: vec![Issue::new(
            IssueField::Mac,
            IssueKind::InvalidMac,
            raw.unwrap_or_default(),
        )],
    }
}

//! Device type classification.

use inventory_model::{Confidence, NormalizationStep, StepLog};

/// Keyword rule for inferring a device type from free-text hints.
#[derive(Debug, Clone, Copy)]
pub struct DeviceHintRule {
    pub device_type: &'static str,
    pub keywords: &'static [&'static str],
}

/// Checked in order; the first rule with any keyword present wins.
/// Keywords match as plain substrings, so `gw` also matches inside longer words.
pub const DEVICE_HINT_RULES: &[DeviceHintRule] = &[
    DeviceHintRule {
        device_type: "printer",
        keywords: &["printer"],
    },
    DeviceHintRule {
        device_type: "switch",
        keywords: &["switch"],
    },
    DeviceHintRule {
        device_type: "router",
        keywords: &["router", "gateway", "gw"],
    },
    DeviceHintRule {
        device_type: "iot",
        keywords: &["cam", "iot"],
    },
    DeviceHintRule {
        device_type: "server",
        keywords: &["srv", "server", "db"],
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceClassification {
    pub device_type: String,
    pub confidence: Confidence,
    pub steps: StepLog,
}

/// Trust an explicit device type, otherwise infer one from the normalized
/// hostname and notes.
pub fn classify_device(raw: Option<&str>, hostname: &str, notes: Option<&str>) -> DeviceClassification {
    let mut steps = StepLog::new();
    let explicit = raw.map(str::trim).unwrap_or_default();
    if !explicit.is_empty() {
        steps.push(NormalizationStep::DeviceFromInput);
        return DeviceClassification {
            device_type: explicit.to_lowercase(),
            confidence: Confidence::High,
            steps,
        };
    }

    let hints = format!(
        "{} {}",
        hostname.to_lowercase(),
        notes.unwrap_or_default().to_lowercase()
    );
    let inferred = DEVICE_HINT_RULES.iter().find(|rule| {
        rule.keywords
            .iter()
            .any(|keyword| hints.contains(keyword))
    });
    match inferred {
        Some(rule) => {
            steps.push(NormalizationStep::DeviceInferred);
            DeviceClassification {
                device_type: rule.device_type.to_string(),
                confidence: Confidence::Medium,
                steps,
            }
        }
        None => DeviceClassification::default(),
    }
}

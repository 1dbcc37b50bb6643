//! Site label normalization.

use inventory_model::{NormalizationStep, StepLog};

/// Collapsed site text to canonical site name. Keys are lowercase, hyphens
/// already replaced by spaces, whitespace collapsed.
pub const SITE_ALIASES: &[(&str, &str)] = &[
    ("blr campus", "BLR CAMPUS"),
    ("blr", "BLR CAMPUS"),
    ("hq bldg 1", "HQ BLDG 1"),
    ("hq building 1", "HQ BLDG 1"),
    ("hq", "HQ"),
    ("lab 1", "LAB 1"),
    ("dc 1", "DC 1"),
];

const SITE_PLACEHOLDERS: [&str; 2] = ["n/a", "na"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteNormalization {
    /// Trimmed raw label.
    pub site: String,
    pub site_normalized: String,
    pub steps: StepLog,
}

fn collapse_site(value: &str) -> String {
    value
        .to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn normalize_site(raw: Option<&str>) -> SiteNormalization {
    let site = raw.map(str::trim).unwrap_or_default();
    if site.is_empty() || SITE_PLACEHOLDERS.contains(&site.to_lowercase().as_str()) {
        return SiteNormalization {
            site: site.to_string(),
            ..SiteNormalization::default()
        };
    }

    let mut steps = StepLog::new();
    steps.push(NormalizationStep::SiteTrim);
    let collapsed = collapse_site(site);
    let site_normalized = SITE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == collapsed)
        .map_or_else(|| collapsed.to_uppercase(), |(_, canonical)| (*canonical).to_string());
    steps.push(NormalizationStep::SiteNormalize);

    SiteNormalization {
        site: site.to_string(),
        site_normalized,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_lookup() {
        let result = normalize_site(Some("HQ-BUILDING-1"));
        assert_eq!(result.site, "HQ-BUILDING-1");
        assert_eq!(result.site_normalized, "HQ BLDG 1");
        assert!(result.steps.contains(NormalizationStep::SiteNormalize));

        assert_eq!(normalize_site(Some(" blr ")).site_normalized, "BLR CAMPUS");
        assert_eq!(normalize_site(Some("Lab-1")).site_normalized, "LAB 1");
    }

    #[test]
    fn fallback_uppercases_collapsed_text() {
        let result = normalize_site(Some("  Pune -  Annex   2 "));
        assert_eq!(result.site, "Pune -  Annex   2");
        assert_eq!(result.site_normalized, "PUNE ANNEX 2");
    }

    #[test]
    fn placeholders_pass_through() {
        let result = normalize_site(Some(" N/A "));
        assert_eq!(result.site, "N/A");
        assert_eq!(result.site_normalized, "");
        assert!(result.steps.is_empty());
        assert_eq!(normalize_site(None), SiteNormalization::default());
    }

    #[test]
    fn canonical_names_are_stable() {
        for (_, canonical) in SITE_ALIASES {
            assert_eq!(normalize_site(Some(*canonical)).site_normalized, *canonical);
        }
    }
}

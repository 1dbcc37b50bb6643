//! Property tests for normalizer invariants.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use inventory_model::{NormalizationStep, RawRow, Validity};
use inventory_normalization::{normalize_ip, normalize_mac, normalize_row};
use proptest::prelude::*;

fn mac_separator() -> impl Strategy<Value = (&'static str, usize)> {
    prop_oneof![
        Just(("", 2)),
        Just((":", 2)),
        Just(("-", 2)),
        Just((".", 4)),
    ]
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("\\PC{0,24}")
}

prop_compose! {
    fn raw_row()(
        ip in optional_text(),
        hostname in optional_text(),
        fqdn in optional_text(),
        mac in optional_text(),
        owner in optional_text(),
        device_type in optional_text(),
        site in optional_text(),
        notes in optional_text(),
    ) -> RawRow {
        RawRow { ip, hostname, fqdn, mac, owner, device_type, site, notes, source_row_id: None }
    }
}

proptest! {
    #[test]
    fn mac_formats_canonicalize(octets in any::<[u8; 6]>(), (separator, group) in mac_separator(), upper in any::<bool>()) {
        let hex: String = octets.iter().map(|byte| format!("{byte:02x}")).collect();
        let hex = if upper { hex.to_uppercase() } else { hex };
        let grouped: Vec<&str> = (0..hex.len()).step_by(group).map(|idx| &hex[idx..idx + group]).collect();
        let raw = grouped.join(separator);

        let expected: Vec<String> = octets.iter().map(|byte| format!("{byte:02x}")).collect();
        let result = normalize_mac(Some(&raw));
        prop_assert_eq!(result.valid, Validity::Valid);
        prop_assert_eq!(&result.mac, &expected.join(":"));

        let again = normalize_mac(Some(&result.mac));
        prop_assert_eq!(again.mac, result.mac);
    }

    #[test]
    fn leading_zero_octets_are_repaired(octets in any::<[u8; 4]>(), pads in any::<[u8; 4]>()) {
        let raw: Vec<String> = octets
            .iter()
            .zip(pads)
            .map(|(octet, pad)| format!("{}{octet}", "0".repeat(usize::from(pad % 3))))
            .collect();
        let result = normalize_ip(Some(&raw.join(".")));
        prop_assert_eq!(result.valid, Validity::Valid);
        prop_assert_eq!(&result.ip, &Ipv4Addr::from(octets).to_string());

        let again = normalize_ip(Some(&result.ip));
        prop_assert_eq!(again.ip, result.ip);
        prop_assert_eq!(again.subnet_cidr, result.subnet_cidr);
        prop_assert!(!again.steps.contains(NormalizationStep::IpParseRelaxed));
    }

    #[test]
    fn steps_are_unique_known_tokens(row in raw_row()) {
        let outcome = normalize_row(&row);
        let mut seen = BTreeSet::new();
        for token in outcome.record.normalization_steps.split('|').filter(|token| !token.is_empty()) {
            prop_assert!(token.parse::<NormalizationStep>().is_ok(), "unknown token {}", token);
            prop_assert!(seen.insert(token.to_string()), "duplicate token {}", token);
        }
        for value in [
            &outcome.record.ip_valid,
            &outcome.record.hostname_valid,
            &outcome.record.fqdn_consistent,
            &outcome.record.mac_valid,
        ] {
            prop_assert!(Validity::parse(value).is_some());
        }
        prop_assert_eq!(outcome.anomaly.is_some(), !outcome.issues().is_empty());
    }
}

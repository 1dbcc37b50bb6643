//! IP address normalization.
//!
//! Strict parsing first, then a relaxed IPv4 pass that repairs leading-zero
//! octets. Successful parses are classified to derive a default subnet.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use inventory_model::{Issue, IssueField, IssueKind, NormalizationStep, StepLog, Validity};

/// Placeholder values treated as an absent address (compared lowercased).
const MISSING_TOKENS: [&str; 4] = ["", "n/a", "na", "none"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpNormalization {
    /// Parsed address, present only when `valid` is [`Validity::Valid`].
    pub address: Option<IpAddr>,
    /// Canonical text, or the trimmed raw value when parsing failed.
    pub ip: String,
    pub valid: Validity,
    pub subnet_cidr: String,
    pub steps: StepLog,
    pub issues: Vec<Issue>,
}

impl IpNormalization {
    /// `"4"`, `"6"` or `""` when no address was parsed.
    pub fn version(&self) -> &'static str {
        match self.address {
            Some(IpAddr::V4(_)) => "4",
            Some(IpAddr::V6(_)) => "6",
            None => "",
        }
    }

    fn invalid(steps: StepLog, issue: Issue, ip: String) -> Self {
        Self {
            address: None,
            ip,
            valid: Validity::Invalid,
            subnet_cidr: String::new(),
            steps,
            issues: vec![issue],
        }
    }
}

/// IPv4 address classes that drive the default subnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipv4Class {
    /// 10/8, 172.16/12, 192.168/16.
    PrivateRfc1918,
    /// 169.254/16 (APIPA).
    LinkLocal,
    Loopback,
    Other,
}

pub fn classify_ipv4(address: Ipv4Addr) -> Ipv4Class {
    match address.octets() {
        [10, ..] => Ipv4Class::PrivateRfc1918,
        [172, second, ..] if (16..=31).contains(&second) => Ipv4Class::PrivateRfc1918,
        [192, 168, ..] => Ipv4Class::PrivateRfc1918,
        [169, 254, ..] => Ipv4Class::LinkLocal,
        [127, ..] => Ipv4Class::Loopback,
        _ => Ipv4Class::Other,
    }
}

fn is_ipv6_link_local(address: Ipv6Addr) -> bool {
    address.segments()[0] & 0xffc0 == 0xfe80
}

/// Default subnet for an address, empty when no default applies.
pub fn default_subnet(address: IpAddr) -> String {
    match address {
        IpAddr::V4(v4) => match classify_ipv4(v4) {
            Ipv4Class::PrivateRfc1918 => {
                let [a, b, c, _] = v4.octets();
                format!("{a}.{b}.{c}.0/24")
            }
            Ipv4Class::LinkLocal => "169.254.0.0/16".to_string(),
            Ipv4Class::Loopback => "127.0.0.0/8".to_string(),
            Ipv4Class::Other => String::new(),
        },
        IpAddr::V6(v6) if is_ipv6_link_local(v6) => {
            let [s0, s1, s2, s3, ..] = v6.segments();
            let network = Ipv6Addr::new(s0, s1, s2, s3, 0, 0, 0, 0);
            format!("{}/64", compress_ipv6(network))
        }
        IpAddr::V6(_) => String::new(),
    }
}

/// Reverse-DNS pointer name (`in-addr.arpa` / `ip6.arpa`), without the
/// trailing root dot.
pub fn reverse_pointer(address: IpAddr) -> String {
    match address {
        IpAddr::V4(v4) => {
            let [a, b, c, d] = v4.octets();
            format!("{d}.{c}.{b}.{a}.in-addr.arpa")
        }
        IpAddr::V6(v6) => {
            let mut name = String::with_capacity(72);
            for byte in v6.octets().iter().rev() {
                name.push(hex_digit(byte & 0x0f));
                name.push('.');
                name.push(hex_digit(byte >> 4));
                name.push('.');
            }
            name.push_str("ip6.arpa");
            name
        }
    }
}

/// Text form of an address. IPv6 is always written as compressed hex groups,
/// IPv4-mapped addresses included (`::ffff:a00:1`, not `::ffff:10.0.0.1`).
pub fn address_text(address: IpAddr) -> String {
    match address {
        IpAddr::V4(v4) => v4.to_string(),
        IpAddr::V6(v6) => compress_ipv6(v6),
    }
}

fn compress_ipv6(address: Ipv6Addr) -> String {
    let segments = address.segments();
    // Longest run of zero groups; the first one wins a tie.
    let (mut zeros_start, mut zeros_len) = (0, 0);
    let mut index = 0;
    while index < segments.len() {
        if segments[index] != 0 {
            index += 1;
            continue;
        }
        let start = index;
        while index < segments.len() && segments[index] == 0 {
            index += 1;
        }
        if index - start > zeros_len {
            (zeros_start, zeros_len) = (start, index - start);
        }
    }
    let groups = |segments: &[u16]| {
        segments
            .iter()
            .map(|segment| format!("{segment:x}"))
            .collect::<Vec<_>>()
            .join(":")
    };
    if zeros_len < 2 {
        return groups(&segments);
    }
    format!(
        "{}::{}",
        groups(&segments[..zeros_start]),
        groups(&segments[zeros_start + zeros_len..])
    )
}

fn hex_digit(nibble: u8) -> char {
    char::from_digit(u32::from(nibble), 16).unwrap_or('0')
}

/// Accept dotted quads whose octets carry leading zeros, e.g.
/// `192.168.010.005`. Signs, empty segments and values above 255 are rejected.
fn parse_ipv4_relaxed(candidate: &str) -> Option<Ipv4Addr> {
    let mut parts = candidate.split('.');
    let mut octets = [0u8; 4];
    for octet in &mut octets {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

pub fn normalize_ip(raw: Option<&str>) -> IpNormalization {
    let mut steps = StepLog::new();
    let Some(raw) = raw else {
        steps.push(NormalizationStep::IpMissing);
        let issue = Issue::new(IssueField::Ip, IssueKind::Missing, "");
        return IpNormalization::invalid(steps, issue, String::new());
    };

    let trimmed = raw.trim();
    steps.push(NormalizationStep::IpTrim);
    if MISSING_TOKENS.contains(&trimmed.to_lowercase().as_str()) {
        steps.push(NormalizationStep::IpMissing);
        let issue = Issue::new(IssueField::Ip, IssueKind::Missing, trimmed);
        return IpNormalization::invalid(steps, issue, String::new());
    }

    let candidate = match trimmed.split_once('%') {
        Some((address, _zone)) => {
            steps.push(NormalizationStep::IpDropZone);
            address
        }
        None => trimmed,
    };

    let address = match candidate.parse::<IpAddr>() {
        Ok(address) => address,
        Err(error) => match parse_ipv4_relaxed(candidate) {
            Some(v4) => {
                steps.push(NormalizationStep::IpParseRelaxed);
                IpAddr::V4(v4)
            }
            None => {
                steps.push(NormalizationStep::IpInvalidParse);
                let issue = Issue::new(IssueField::Ip, IssueKind::Invalid, trimmed)
                    .with_detail(format!("{candidate:?}: {error}"));
                return IpNormalization::invalid(steps, issue, trimmed.to_string());
            }
        },
    };
    steps.push(NormalizationStep::IpParse);
    steps.push(NormalizationStep::IpNormalize);

    let mut issues = Vec::new();
    if let IpAddr::V4(v4) = address
        && classify_ipv4(v4) == Ipv4Class::PrivateRfc1918
        && matches!(v4.octets()[3], 0 | 255)
    {
        steps.push(NormalizationStep::IpReservedEdge);
        issues.push(Issue::new(IssueField::Ip, IssueKind::ReservedEdge, trimmed));
    }

    IpNormalization {
        address: Some(address),
        ip: address_text(address),
        valid: Validity::Valid,
        subnet_cidr: default_subnet(address),
        steps,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relaxed_parse_repairs_leading_zeros() {
        let result = normalize_ip(Some("192.168.010.005"));
        assert_eq!(result.ip, "192.168.10.5");
        assert_eq!(result.valid, Validity::Valid);
        assert_eq!(result.version(), "4");
        assert_eq!(result.subnet_cidr, "192.168.10.0/24");
        assert!(result.steps.contains(NormalizationStep::IpParseRelaxed));
        assert!(result.issues.is_empty());
    }

    #[test]
    fn zone_id_is_dropped() {
        let result = normalize_ip(Some("fe80::1%eth0"));
        assert_eq!(result.ip, "fe80::1");
        assert_eq!(result.valid, Validity::Valid);
        assert_eq!(result.version(), "6");
        assert_eq!(result.subnet_cidr, "fe80::/64");
        assert!(result.steps.contains(NormalizationStep::IpDropZone));
        assert!(result.issues.is_empty());
    }

    #[test]
    fn out_of_range_octet_is_invalid() {
        let result = normalize_ip(Some("10.0.1.300"));
        assert_eq!(result.valid, Validity::Invalid);
        assert_eq!(result.version(), "");
        assert_eq!(result.subnet_cidr, "");
        assert_eq!(result.ip, "10.0.1.300");
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Invalid);
        assert!(result.issues[0].detail.is_some());
        assert!(result.steps.contains(NormalizationStep::IpInvalidParse));
    }

    #[test]
    fn reserved_edge_stays_valid() {
        let result = normalize_ip(Some("192.168.1.255"));
        assert_eq!(result.valid, Validity::Valid);
        assert!(result.steps.contains(NormalizationStep::IpReservedEdge));
        assert_eq!(result.issues[0].kind, IssueKind::ReservedEdge);

        let network = normalize_ip(Some("10.20.30.0"));
        assert_eq!(network.issues[0].kind, IssueKind::ReservedEdge);

        let public = normalize_ip(Some("8.8.8.255"));
        assert!(public.issues.is_empty());
        assert_eq!(public.subnet_cidr, "");
    }

    #[test]
    fn placeholders_are_missing() {
        for raw in ["", "  ", "N/A", "na", "None"] {
            let result = normalize_ip(Some(raw));
            assert_eq!(result.valid, Validity::Invalid, "{raw:?}");
            assert_eq!(result.ip, "");
            assert_eq!(result.issues[0].kind, IssueKind::Missing);
            assert_eq!(result.issues[0].value, raw.trim());
        }
        let absent = normalize_ip(None);
        assert_eq!(absent.issues[0].kind, IssueKind::Missing);
        assert_eq!(absent.steps.joined(), "ip_missing");
    }

    #[test]
    fn relaxed_parse_rejects_signs_and_short_forms() {
        for raw in ["-1.2.3.4", "1.2.3", "1.2.3.4.5", "1..2.3", "+1.2.3.4", "a.b.c.d"] {
            assert_eq!(normalize_ip(Some(raw)).valid, Validity::Invalid, "{raw}");
        }
    }

    #[test]
    fn ipv6_is_compressed() {
        let result = normalize_ip(Some(" 2001:0DB8:0000:0000:0000:0000:0000:0001 "));
        assert_eq!(result.ip, "2001:db8::1");
        assert_eq!(result.subnet_cidr, "");
    }

    #[test]
    fn ipv4_mapped_ipv6_is_written_in_hex() {
        let result = normalize_ip(Some("::ffff:10.0.0.1"));
        assert_eq!(result.ip, "::ffff:a00:1");
        assert_eq!(result.version(), "6");
        assert_eq!(normalize_ip(Some(&result.ip)).ip, "::ffff:a00:1");
    }

    #[test]
    fn ipv6_text_compresses_longest_zero_run() {
        let text = |raw: &str| address_text(raw.parse().expect("address"));
        assert_eq!(text("::"), "::");
        assert_eq!(text("::1"), "::1");
        assert_eq!(text("1:0:0:2:0:0:0:3"), "1:0:0:2::3");
        assert_eq!(text("1:0:0:2:0:0:3:4"), "1::2:0:0:3:4");
        assert_eq!(text("1:0:2:3:4:5:6:7"), "1:0:2:3:4:5:6:7");
        assert_eq!(text("10.0.0.1"), "10.0.0.1");
    }

    #[test]
    fn default_subnets() {
        let subnet = |raw: &str| default_subnet(raw.parse().expect("address"));
        assert_eq!(subnet("10.0.0.5"), "10.0.0.0/24");
        assert_eq!(subnet("172.31.4.9"), "172.31.4.0/24");
        assert_eq!(subnet("172.32.4.9"), "");
        assert_eq!(subnet("169.254.1.1"), "169.254.0.0/16");
        assert_eq!(subnet("127.0.0.1"), "127.0.0.0/8");
        assert_eq!(subnet("fe80::abcd:1"), "fe80::/64");
        assert_eq!(subnet("febf:1:2:3:4::1"), "febf:1:2:3::/64");
    }

    #[test]
    fn reverse_pointers() {
        let ptr = |raw: &str| reverse_pointer(raw.parse().expect("address"));
        assert_eq!(ptr("192.168.10.5"), "5.10.168.192.in-addr.arpa");
        assert_eq!(
            ptr("2001:db8::1"),
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa"
        );
    }
}

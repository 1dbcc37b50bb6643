//! Free-text owner parsing.
//!
//! Owner cells mix names, emails and team tags in any order, e.g.
//! `"priya (platform) priya@corp.example.com"`. The text is ambiguous by
//! nature, so parsing never raises issues.

use std::sync::LazyLock;

use inventory_model::{NormalizationStep, StepLog};
use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("Invalid email regex")
});

static TEAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("Invalid team regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerParse {
    pub name: String,
    pub email: String,
    pub team: String,
    pub steps: StepLog,
}

pub fn parse_owner(raw: Option<&str>) -> OwnerParse {
    let mut steps = StepLog::new();
    let owner = raw.map(str::trim).unwrap_or_default();
    if owner.is_empty() {
        return OwnerParse::default();
    }
    steps.push(NormalizationStep::OwnerTrim);

    let mut working = owner.to_string();
    let mut email = String::new();
    if let Some((range, found)) = EMAIL_REGEX
        .find(&working)
        .map(|found| (found.range(), found.as_str().to_lowercase()))
    {
        email = found;
        working.replace_range(range, "");
        steps.push(NormalizationStep::OwnerEmailExtract);
    }

    let mut team = String::new();
    if let Some(found) = TEAM_REGEX
        .captures(&working)
        .map(|captures| captures[1].trim().to_string())
    {
        team = found;
        working = TEAM_REGEX.replace_all(&working, "").into_owned();
        steps.push(NormalizationStep::OwnerTeamParen);
    }

    let mut name = working.trim().to_string();
    if name.is_empty() && !email.is_empty() {
        let local_part = email.split('@').next().unwrap_or_default();
        name = local_part.replace(['.', '_'], " ");
        steps.push(NormalizationStep::OwnerFromEmailLocalpart);
    }

    OwnerParse {
        name: capitalize_words(&name),
        email,
        team: title_case(&team),
        steps,
    }
}

/// Capitalize each whitespace-delimited word; runs of whitespace collapse.
fn capitalize_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_alpha = false;
    for ch in value.chars() {
        if previous_alpha {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        previous_alpha = ch.is_alphabetic();
    }
    out
}

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliverableTier {
    /// No leading number; rendered as-is.
    Plain,
    Header,
    Level1,
    Level2,
    /// Deeper than two levels; carries the dot count.
    Scaled(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverableLine {
    pub number: Option<String>,
    pub text: String,
    pub tier: DeliverableTier,
}

fn number_token() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"^(\d+(?:\.\d+)*)\s+").expect("deliverable number pattern should compile")
    })
}

/// Splits a deliverable string into its dotted number and text and picks a tier.
///
/// Trailing `.0` segments are dropped before counting dots, so `3.0 Topic`
/// and `3 Topic` are both headers while `3.1` is first level.
pub fn classify_deliverable(raw: &str) -> DeliverableLine {
    let Some(captures) = number_token().captures(raw) else {
        return DeliverableLine {
            number: None,
            text: raw.to_string(),
            tier: DeliverableTier::Plain,
        };
    };

    let whole = captures.get(0).map(|m| m.end()).unwrap_or(0);
    let number = captures
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let mut segments: Vec<&str> = number.split('.').collect();
    while segments.len() > 1 && segments.last().is_some_and(|s| s.trim_start_matches('0').is_empty()) {
        segments.pop();
    }
    let tier = match segments.len() - 1 {
        0 => DeliverableTier::Header,
        1 => DeliverableTier::Level1,
        2 => DeliverableTier::Level2,
        dots => DeliverableTier::Scaled(dots),
    };

    DeliverableLine {
        text: raw[whole..].to_string(),
        number: Some(number),
        tier,
    }
}

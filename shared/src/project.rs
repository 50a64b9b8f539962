//! ==============================================================================
//! project.rs - project record served by the launchpad api
//! ==============================================================================
//!
//! the api owns this record, the page only reads it. keys are camelCase on
//! the wire. the record's own id is ignored: the page already knows which
//! project it asked for from the route.
//!
//! ==============================================================================

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// delimiter between description paragraphs
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// label rendered when no funds have been reported
pub const FUNDS_UNAVAILABLE: &str = "N/A";

// ==============================================================================
// project
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub banner_img_url: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub short_description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub funds_raised: Option<FundsRaised>,
    /// long form text, paragraphs split on a blank line
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub socials: Option<Socials>,
}

impl Project {
    /// funds raised as displayed, `N/A` when missing, zero or blank
    pub fn funds_label(&self) -> String {
        self.funds_raised
            .as_ref()
            .filter(|funds| !funds.is_blank())
            .map(|funds| funds.to_string())
            .unwrap_or_else(|| FUNDS_UNAVAILABLE.to_string())
    }

    /// description split into paragraphs, `None` when there is nothing to split
    pub fn paragraphs(&self) -> Option<Vec<&str>> {
        self.description
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| text.split(PARAGRAPH_DELIMITER).collect())
    }

    /// social links that are present, in display order
    pub fn social_links(&self) -> Vec<SocialLink> {
        self.socials
            .as_ref()
            .map(Socials::links)
            .unwrap_or_default()
    }
}

// ==============================================================================
// funds raised
// ==============================================================================

/// the api sends either a number or a preformatted string, anything else is
/// treated as missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FundsRaised {
    Amount(serde_json::Number),
    Text(String),
}

impl FundsRaised {
    fn is_blank(&self) -> bool {
        match self {
            FundsRaised::Amount(n) => n.as_f64() == Some(0.0),
            FundsRaised::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for FundsRaised {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FundsRaised::Amount(n) => match n.as_f64() {
                Some(value) if n.is_f64() => f.write_str(&display_number(value)),
                _ => write!(f, "{}", n),
            },
            FundsRaised::Text(s) => f.write_str(s),
        }
    }
}

// ==============================================================================
// socials
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, deserialize_with = "lenient")]
    pub discord: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub telegram: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub website: Option<String>,
}

impl Socials {
    /// present links in display order, blank urls are skipped
    pub fn links(&self) -> Vec<SocialLink> {
        SocialKind::ALL
            .iter()
            .filter_map(|&kind| {
                self.url(kind)
                    .filter(|url| !url.is_empty())
                    .map(|url| SocialLink {
                        kind,
                        url: url.to_string(),
                    })
            })
            .collect()
    }

    fn url(&self, kind: SocialKind) -> Option<&str> {
        match kind {
            SocialKind::Discord => self.discord.as_deref(),
            SocialKind::Github => self.github.as_deref(),
            SocialKind::Telegram => self.telegram.as_deref(),
            SocialKind::Twitter => self.twitter.as_deref(),
            SocialKind::Website => self.website.as_deref(),
        }
    }
}

/// recognised social networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialKind {
    Discord,
    Github,
    Telegram,
    Twitter,
    Website,
}

impl SocialKind {
    pub const ALL: [SocialKind; 5] = [
        SocialKind::Discord,
        SocialKind::Github,
        SocialKind::Telegram,
        SocialKind::Twitter,
        SocialKind::Website,
    ];

    /// value for `aria-label`, also used as the icon class suffix
    pub fn aria_label(self) -> &'static str {
        match self {
            SocialKind::Discord => "discord",
            SocialKind::Github => "github",
            SocialKind::Telegram => "telegram",
            SocialKind::Twitter => "twitter",
            SocialKind::Website => "website",
        }
    }

    /// hover title
    pub fn title(self) -> &'static str {
        match self {
            SocialKind::Discord => "Discord",
            SocialKind::Github => "GitHub",
            SocialKind::Telegram => "Telegram",
            SocialKind::Twitter => "Twitter",
            SocialKind::Website => "Web",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

// ==============================================================================
// helpers
// ==============================================================================

/// a field of the wrong type reads as missing instead of failing the record
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// format a float the way a browser prints a number: integral values up to
/// 1e21 without a fraction, very large or very small ones in exponent form
fn display_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude > 0.0 && magnitude < 1e-6) {
        let sci = format!("{:e}", value);
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => sci,
        };
    }
    if value.fract() == 0.0 {
        if let Some(digits) = integral_digits(magnitude) {
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{}{}", sign, digits);
        }
    }
    format!("{}", value)
}

/// shortest round-trip digits of an integral float, padded with zeros
fn integral_digits(magnitude: f64) -> Option<String> {
    let sci = format!("{:e}", magnitude);
    let (mantissa, exp) = sci.split_once('e')?;
    let exp: usize = exp.parse().ok()?;
    let mut digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let width = exp + 1;
    if digits.len() > width {
        return None;
    }
    digits.extend(std::iter::repeat('0').take(width - digits.len()));
    Some(digits)
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Project {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_camel_case_fields() {
        let project = parse(
            r#"{"id": 7, "name": "Foo", "bannerImgUrl": "https://img/b.png",
                "shortDescription": "Bar", "fundsRaised": 100}"#,
        );
        assert_eq!(project.name, "Foo");
        assert_eq!(project.banner_img_url, "https://img/b.png");
        assert_eq!(project.short_description, "Bar");
        assert_eq!(project.funds_label(), "100");
    }

    #[test]
    fn test_null_and_missing_strings_default_to_empty() {
        let project = parse(r#"{"name": null}"#);
        assert_eq!(project.name, "");
        assert_eq!(project.banner_img_url, "");
        assert!(project.socials.is_none());
    }

    #[test]
    fn test_funds_label() {
        assert_eq!(parse("{}").funds_label(), "N/A");
        assert_eq!(parse(r#"{"fundsRaised": null}"#).funds_label(), "N/A");
        assert_eq!(parse(r#"{"fundsRaised": 0}"#).funds_label(), "N/A");
        assert_eq!(parse(r#"{"fundsRaised": ""}"#).funds_label(), "N/A");
        assert_eq!(parse(r#"{"fundsRaised": 12.5}"#).funds_label(), "12.5");
        assert_eq!(
            parse(r#"{"fundsRaised": "$1.2M"}"#).funds_label(),
            "$1.2M"
        );
    }

    #[test]
    fn test_funds_label_prints_numbers_like_a_browser() {
        let label = |json: &str| parse(&format!(r#"{{"fundsRaised": {}}}"#, json)).funds_label();
        assert_eq!(label("100"), "100");
        assert_eq!(label("100.0"), "100");
        assert_eq!(label("1.5e3"), "1500");
        assert_eq!(label("-250.0"), "-250");
        assert_eq!(label("0.1"), "0.1");
        assert_eq!(label("100000000000000000000"), "100000000000000000000");
        assert_eq!(label("1152921504606846976.0"), "1152921504606847000");
        assert_eq!(label("1e21"), "1e+21");
        assert_eq!(label("0.0000001"), "1e-7");
    }

    #[test]
    fn test_wrong_field_types_degrade_to_missing() {
        let project = parse(
            r#"{"name": "Foo", "fundsRaised": true, "description": 3,
                "socials": {"github": 7, "twitter": "https://t"}}"#,
        );
        assert_eq!(project.name, "Foo");
        assert_eq!(project.funds_label(), "N/A");
        assert_eq!(project.paragraphs(), None);
        assert_eq!(
            project.social_links(),
            vec![SocialLink {
                kind: SocialKind::Twitter,
                url: "https://t".to_string(),
            }]
        );

        let project = parse(r#"{"name": 7, "socials": "https://x"}"#);
        assert_eq!(project.name, "");
        assert!(project.social_links().is_empty());
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(parse("{}").paragraphs(), None);
        assert_eq!(parse(r#"{"description": ""}"#).paragraphs(), None);
        assert_eq!(
            parse(r#"{"description": "one"}"#).paragraphs(),
            Some(vec!["one"])
        );
        // single newlines stay inside a paragraph
        assert_eq!(
            parse(r#"{"description": "a\nb\n\nc"}"#).paragraphs(),
            Some(vec!["a\nb", "c"])
        );
    }

    #[test]
    fn test_paragraph_count_follows_delimiters() {
        for k in 0..6 {
            let segments: Vec<String> = (0..=k).map(|i| format!("p{}", i)).collect();
            let project = Project {
                description: Some(segments.join(PARAGRAPH_DELIMITER)),
                ..Project::default()
            };
            let paragraphs = project.paragraphs().unwrap();
            assert_eq!(paragraphs.len(), k + 1);
            assert_eq!(paragraphs, segments);
        }
    }

    #[test]
    fn test_social_links_order_and_gating() {
        let project = parse(
            r#"{"socials": {"website": "https://w", "github": "https://g",
                "discord": "", "twitter": null, "medium": "https://m"}}"#,
        );
        let links = project.social_links();
        assert_eq!(
            links.iter().map(|l| l.kind).collect::<Vec<_>>(),
            vec![SocialKind::Github, SocialKind::Website]
        );
        assert_eq!(links[0].url, "https://g");
    }

    #[test]
    fn test_social_labels() {
        assert_eq!(SocialKind::Website.title(), "Web");
        assert_eq!(SocialKind::Github.title(), "GitHub");
        assert_eq!(SocialKind::Telegram.aria_label(), "telegram");
    }
}

use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use sha2::{Digest, Sha256};

/// Compile a pattern that is known to be valid
#[allow(clippy::expect_used)]
fn static_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern compiles")
}

lazy_static! {
    static ref EMAIL_REGEX: Regex = static_pattern(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b");
    static ref PHONE_REGEX: Regex = static_pattern(r"(?:\+\d{1,3}[-.\s]?)?\(?\b\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b");
    static ref SSN_REGEX: Regex = static_pattern(r"\b\d{3}-\d{2}-\d{4}\b");
    static ref CREDIT_CARD_REGEX: Regex = static_pattern(r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b");
    static ref IP_REGEX: Regex = static_pattern(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b");
}

/// Kind of sensitive value detected in a log message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiiKind {
    Email,
    Phone,
    Ssn,
    CreditCard,
    IpAddress,
}

impl PiiKind {
    fn label(self) -> &'static str {
        match self {
            PiiKind::Email => "EMAIL",
            PiiKind::Phone => "PHONE",
            PiiKind::Ssn => "SSN",
            PiiKind::CreditCard => "CC",
            PiiKind::IpAddress => "IP",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            PiiKind::Email => &EMAIL_REGEX,
            PiiKind::Phone => &PHONE_REGEX,
            PiiKind::Ssn => &SSN_REGEX,
            PiiKind::CreditCard => &CREDIT_CARD_REGEX,
            PiiKind::IpAddress => &IP_REGEX,
        }
    }

    fn mask(self, value: &str) -> String {
        match self {
            PiiKind::Email => {
                let mut parts = value.splitn(2, '@');
                let local = parts.next().and_then(|p| p.chars().next()).unwrap_or('*');
                let domain = parts.next().and_then(|p| p.chars().next()).unwrap_or('*');
                format!("{local}***@{domain}***")
            }
            PiiKind::Phone => "(***) ***-****".to_string(),
            PiiKind::Ssn => "***-**-****".to_string(),
            PiiKind::CreditCard => "****-****-****-****".to_string(),
            PiiKind::IpAddress => {
                let octets: Vec<&str> = value.split('.').collect();
                match (octets.first(), octets.last()) {
                    (Some(first), Some(last)) if octets.len() == 4 => format!("{first}.***.***.{last}"),
                    _ => "***.***.***.***".to_string(),
                }
            }
        }
    }
}

/// PII redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_emails: bool,
    pub redact_phones: bool,
    pub redact_ssn: bool,
    pub redact_credit_cards: bool,
    pub redact_ip_addresses: bool,
    /// Replace values with a correlation hash instead of a mask
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_emails: true,
            redact_phones: true,
            redact_ssn: true,
            redact_credit_cards: true,
            redact_ip_addresses: true,
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl RedactionConfig {
    fn enabled_kinds(&self) -> Vec<PiiKind> {
        // Card numbers run before phones so a 16-digit number is not split into a phone match.
        [
            (self.redact_emails, PiiKind::Email),
            (self.redact_ssn, PiiKind::Ssn),
            (self.redact_credit_cards, PiiKind::CreditCard),
            (self.redact_phones, PiiKind::Phone),
            (self.redact_ip_addresses, PiiKind::IpAddress),
        ]
        .into_iter()
        .filter_map(|(enabled, kind)| enabled.then_some(kind))
        .collect()
    }
}

/// PII redactor for log messages and error strings
///
/// Symptom descriptions are health information and are never redacted piecemeal:
/// they are replaced wholesale by [`PiiRedactor::fingerprint`].
pub struct PiiRedactor {
    config: RedactionConfig,
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    /// Scrub identifiers out of a free-form message
    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        for kind in self.config.enabled_kinds() {
            result = kind
                .pattern()
                .replace_all(&result, |caps: &Captures| {
                    let value = caps.get(0).map_or("", |m| m.as_str());
                    if self.config.hash_for_correlation {
                        format!("{}[{}]", kind.label(), self.fingerprint(value))
                    } else {
                        kind.mask(value)
                    }
                })
                .into_owned();
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).into_owned();
        }

        result
    }

    /// Short, stable correlation hash of a value
    pub fn fingerprint(&self, value: &str) -> String {
        let digest = Sha256::digest(value.as_bytes());
        // first 8 bytes are enough to correlate
        let prefix: Vec<u8> = digest.iter().take(8).copied().collect();
        general_purpose::STANDARD_NO_PAD.encode(prefix)
    }
}

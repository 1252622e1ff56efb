// Page parameters read from the query string.

use super::constants::DEFAULT_MESSAGE;
use super::motion::PolicyKind;

/// Already-decoded query parameters; the first value wins for repeated keys.
pub trait QueryParams {
    fn get(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageParams {
    pub message: String,
    pub policy: Option<PolicyKind>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            policy: None,
        }
    }
}

impl PageParams {
    pub fn from_query(query: &impl QueryParams) -> Self {
        let policy = query.get("shake").and_then(|raw| {
            let kind = PolicyKind::parse(&raw);
            if kind.is_none() {
                log::warn!("[params] ignoring unknown shake policy {:?}", raw);
            }
            kind
        });
        Self {
            message: message_or_default(query.get("message").as_deref()),
            policy,
        }
    }
}

/// Trimmed message, or the default when missing, blank or malformed.
///
/// The URL parser replaces bytes that are not UTF-8 with U+FFFD, so a
/// replacement character marks a value that did not decode.
pub fn message_or_default(decoded: Option<&str>) -> String {
    decoded
        .map(str::trim)
        .filter(|m| !m.is_empty() && !m.contains(char::REPLACEMENT_CHARACTER))
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}

//! Host-header patterns.
//!
//! A pattern is a dot-separated sequence of labels, each either a literal
//! (`admin`) or a placeholder (`{tenant}`). Matching is case-insensitive
//! (host names are) and ignores any `:port` suffix, so `Admin.LOCALHOST:3000`
//! still reaches the `admin.localhost` scope.

use std::{collections::HashMap, fmt};

use actix_web::{
    dev::RequestHead,
    guard::{Guard, GuardContext},
    http::header,
};
use thiserror::Error;

/// Errors raised while parsing a host pattern.
#[derive(Debug, Error, PartialEq)]
pub enum HostPatternError {
    #[error("host pattern cannot be empty")]
    Empty,
    #[error("host pattern contains an empty label")]
    EmptyLabel,
    #[error("host pattern placeholder has no name")]
    EmptyPlaceholder,
    #[error("duplicate placeholder name: {0}")]
    DuplicatePlaceholder(String),
}

#[derive(Debug, Clone, PartialEq)]
enum Label {
    Literal(String),
    Placeholder(String),
}

/// A parsed host pattern, usable both as a route guard and to capture
/// placeholder labels out of a concrete host.
#[derive(Debug, Clone, PartialEq)]
pub struct HostPattern {
    labels: Vec<Label>,
    source: String,
}

impl HostPattern {
    /// Parses a pattern such as `admin.localhost` or `{tenant}.localhost`.
    ///
    /// Literal labels are stored lowercased. Placeholder names must be
    /// non-empty and unique within the pattern.
    pub fn parse(pattern: &str) -> Result<Self, HostPatternError> {
        if pattern.is_empty() {
            return Err(HostPatternError::Empty);
        }

        let mut labels = Vec::new();
        let mut seen = Vec::new();
        for label in pattern.split('.') {
            if label.is_empty() {
                return Err(HostPatternError::EmptyLabel);
            }
            if let Some(name) = label.strip_prefix('{').and_then(|l| l.strip_suffix('}')) {
                if name.is_empty() {
                    return Err(HostPatternError::EmptyPlaceholder);
                }
                if seen.contains(&name) {
                    return Err(HostPatternError::DuplicatePlaceholder(name.to_string()));
                }
                seen.push(name);
                labels.push(Label::Placeholder(name.to_string()));
            } else {
                labels.push(Label::Literal(label.to_ascii_lowercase()));
            }
        }

        Ok(Self {
            labels,
            source: pattern.to_string(),
        })
    }

    /// Whether the pattern captures the given host.
    pub fn matches(&self, host: &str) -> bool {
        self.capture(host).is_some()
    }

    /// Runs the pattern against a host header value. The label counts must
    /// agree, literals must match and every placeholder captures exactly one
    /// non-empty label. Captured labels come back lowercased.
    pub fn capture(&self, host: &str) -> Option<HostParams> {
        let hostname = strip_port(host).to_ascii_lowercase();
        let host_labels: Vec<&str> = hostname.split('.').collect();
        if host_labels.len() != self.labels.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (pattern_label, host_label) in self.labels.iter().zip(host_labels) {
            match pattern_label {
                Label::Literal(expected) => {
                    if expected != host_label {
                        return None;
                    }
                }
                Label::Placeholder(name) => {
                    if host_label.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), host_label.to_string());
                }
            }
        }

        Some(HostParams(params))
    }

    /// The pattern text this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for HostPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Guard for HostPattern {
    fn check(&self, ctx: &GuardContext<'_>) -> bool {
        match request_host(ctx.head()) {
            Some(host) => self.matches(host),
            None => false,
        }
    }
}

/// Captured placeholder labels from a matched host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostParams(pub(crate) HashMap<String, String>);

impl HostParams {
    /// Looks up a captured label by placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Host of the request: the `Host` header when present, the URI authority
/// otherwise (absolute-form request targets).
pub(crate) fn request_host(head: &RequestHead) -> Option<&str> {
    head.headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .or_else(|| head.uri.host())
}

/// Drops the `:port` suffix from a host header value. Bracketed IPv6 hosts
/// are kept whole; they never match a label pattern but must not be split at
/// their inner colons.
fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        if let Some(end) = host.find(']') {
            return &host[..=end];
        }
    }
    host.split(':').next().unwrap_or(host)
}

//! Domain models for the `AuthN` context module.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthnContextError;

/// A structured authentication context declaration.
///
/// Declarations are an alternative to class references. The broker indexes
/// them by `namespace` and folds their canonical string form into the record
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthnContextDecl {
    namespace: String,
    content: String,
}

impl AuthnContextDecl {
    #[must_use]
    pub fn new(namespace: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            content: content.into(),
        }
    }

    /// Namespace identifier of the declaration format.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Canonical string form of the declaration.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for AuthnContextDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// What an authentication endpoint offers.
///
/// Exactly one of `class_ref` and `decl` is expected to be populated. When
/// both are set the class reference takes precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthnContextSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decl: Option<AuthnContextDecl>,
}

impl AuthnContextSpec {
    /// Spec offering a standard authentication context class.
    #[must_use]
    pub fn class_ref(class_ref: impl Into<String>) -> Self {
        Self {
            class_ref: Some(class_ref.into()),
            decl: None,
        }
    }

    /// Spec offering a declaration.
    #[must_use]
    pub fn decl(decl: AuthnContextDecl) -> Self {
        Self {
            class_ref: None,
            decl: Some(decl),
        }
    }
}

/// Comparison policy requested by the relying party.
///
/// Each policy answers whether a candidate level should replace the current
/// best level during ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Candidate level equals the current level.
    Exact,
    /// Candidate level is at least the current level.
    #[default]
    Minimum,
    /// Candidate level is at most the current level.
    Maximum,
    /// Candidate level is strictly above the current level.
    Better,
}

impl Comparison {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 4] = [Self::Exact, Self::Minimum, Self::Maximum, Self::Better];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Better => "better",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Comparison {
    type Err = AuthnContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AuthnContextError::UnknownComparison(s.to_owned()))
    }
}

/// Authentication context requested by a relying party.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedAuthnContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decl_ref: Option<String>,
    /// `None` means the broker default, [`Comparison::Minimum`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

impl RequestedAuthnContext {
    /// Request a class reference with the given comparison policy.
    #[must_use]
    pub fn class_ref(class_ref: impl Into<String>, comparison: Comparison) -> Self {
        Self {
            class_ref: Some(class_ref.into()),
            decl_ref: None,
            comparison: Some(comparison),
        }
    }

    /// Request a declaration reference with the given comparison policy.
    #[must_use]
    pub fn decl_ref(decl_ref: impl Into<String>, comparison: Comparison) -> Self {
        Self {
            class_ref: None,
            decl_ref: Some(decl_ref.into()),
            comparison: Some(comparison),
        }
    }
}

/// Deterministic fingerprint identifying a registered method record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Reference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a record was registered under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    ClassRef(String),
    Decl(AuthnContextDecl),
}

/// A registered authentication method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Opaque method identifier (typically the URL the user is sent to).
    pub method: String,
    /// Assurance level, 0 is the lowest.
    pub level: u32,
    /// Authenticating authority, may be empty.
    pub authn_authority: String,
    pub kind: RecordKind,
}

impl MethodRecord {
    #[must_use]
    pub fn class_ref(&self) -> Option<&str> {
        match &self.kind {
            RecordKind::ClassRef(class_ref) => Some(class_ref),
            RecordKind::Decl(_) => None,
        }
    }

    #[must_use]
    pub fn decl(&self) -> Option<&AuthnContextDecl> {
        match &self.kind {
            RecordKind::Decl(decl) => Some(decl),
            RecordKind::ClassRef(_) => None,
        }
    }

    /// Ranking key the record is indexed under.
    #[must_use]
    pub fn key(&self) -> &str {
        match &self.kind {
            RecordKind::ClassRef(class_ref) => class_ref,
            RecordKind::Decl(decl) => decl.namespace(),
        }
    }
}

/// A selectable `(method, reference)` pair returned by `pick`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub method: String,
    pub reference: Reference,
}

impl Candidate {
    #[must_use]
    pub fn new(method: impl Into<String>, reference: Reference) -> Self {
        Self {
            method: method.into(),
            reference,
        }
    }
}

/// A generic extension element carried inside a protocol message.
///
/// `Display` renders the element as markup, which is the canonical form used
/// for declarations decoded from elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionElement {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ExtensionElement>,
}

impl ExtensionElement {
    #[must_use]
    pub fn new(tag: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            namespace: Some(namespace.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: ExtensionElement) -> Self {
        self.children.push(child);
        self
    }
}

impl fmt::Display for ExtensionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(ns) = &self.namespace {
            match self.tag.split_once(':') {
                Some((prefix, _)) => write!(f, " xmlns:{prefix}=\"{}\"", Escaped(ns))?,
                None => write!(f, " xmlns=\"{}\"", Escaped(ns))?,
            }
        }
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", Escaped(value))?;
        }
        if self.text.is_none() && self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        if let Some(text) = &self.text {
            write!(f, "{}", Escaped(text))?;
        }
        for child in &self.children {
            write!(f, "{child}")?;
        }
        write!(f, "</{}>", self.tag)
    }
}

struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                _ => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}

//! Immutable structural model of one analyzed class.
//!
//! A [`Skeleton`] is the boundary type between the (out-of-scope) bytecode
//! adapter and the metric engine: declaration-ordered attributes and methods
//! plus two usage relations, method→attributes-used and method→methods-called.
//! The validating [`SkeletonBuilder`] guarantees the integrity invariant —
//! every referenced name resolves within the same class — so every calculator
//! downstream can treat a `Skeleton` as total input and stay panic-free.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};

/// Static/instance flag for attributes and methods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Instance,
    Static,
}

/// Method visibility as recorded by the adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// One declared attribute
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub kind: MemberKind,
}

impl Attribute {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// One declared method. Overloads are distinguished by signature, so the
/// signature string is the unique key within a class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    signature: String,
    kind: MemberKind,
    visibility: Visibility,
    uses: Vec<String>,
    calls: Vec<String>,
}

impl Method {
    pub fn new(signature: impl Into<String>, kind: MemberKind, visibility: Visibility) -> Self {
        Self {
            signature: signature.into(),
            kind,
            visibility,
            uses: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Record the attributes this method reads or writes (direct use only,
    /// no transitive closure through calls)
    pub fn with_uses<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uses.extend(attributes.into_iter().map(Into::into));
        self.uses.sort();
        self.uses.dedup();
        self
    }

    /// Record the sibling methods this method invokes on `this`
    pub fn with_calls<I, S>(mut self, signatures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.calls.extend(signatures.into_iter().map(Into::into));
        self.calls.sort();
        self.calls.dedup();
        self
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Attribute names this method uses, sorted and deduplicated
    pub fn uses(&self) -> &[String] {
        &self.uses
    }

    /// Method signatures this method calls, sorted and deduplicated
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

/// Normalized, immutable model of one class.
///
/// Constructed once per class via [`Skeleton::builder`], then shared
/// read-only with every metric calculator. Declaration order of methods and
/// attributes is preserved so derived matrices are reproducible across runs;
/// equality is structural (name plus content).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skeleton {
    name: String,
    attributes: Vec<Attribute>,
    methods: Vec<Method>,
}

impl Skeleton {
    pub fn builder(name: impl Into<String>) -> SkeletonBuilder {
        SkeletonBuilder {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Qualified class identifier, the unique key for reporting
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Methods in declaration order
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    /// Public methods only, for adapters that restrict analysis to the
    /// exported surface of a class
    pub fn public_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods
            .iter()
            .filter(|m| m.visibility() == Visibility::Public)
    }
}

/// Validating builder enforcing the integrity invariant: unique member
/// names, and every `uses`/`calls` entry resolving within the same class.
#[derive(Clone, Debug)]
pub struct SkeletonBuilder {
    name: String,
    attributes: Vec<Attribute>,
    methods: Vec<Method>,
}

impl SkeletonBuilder {
    pub fn attribute(mut self, name: impl Into<String>, kind: MemberKind) -> Self {
        self.attributes.push(Attribute::new(name, kind));
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Validate and freeze the skeleton.
    ///
    /// A dangling reference here is a defect in the adapter that produced
    /// the input; it is reported once, with the offending names, rather than
    /// rediscovered by every metric.
    pub fn build(self) -> Result<Skeleton> {
        let mut attribute_names: HashSet<&str> = HashSet::new();
        for attribute in &self.attributes {
            if !attribute_names.insert(&attribute.name) {
                return Err(Error::DuplicateAttribute {
                    class: self.name,
                    attribute: attribute.name.clone(),
                });
            }
        }

        let mut signatures: HashSet<&str> = HashSet::new();
        for method in &self.methods {
            if !signatures.insert(&method.signature) {
                return Err(Error::DuplicateMethod {
                    class: self.name,
                    method: method.signature.clone(),
                });
            }
        }

        for method in &self.methods {
            if let Some(missing) = method.uses.iter().find(|u| !attribute_names.contains(u.as_str())) {
                return Err(Error::UnresolvedAttribute {
                    class: self.name,
                    method: method.signature.clone(),
                    attribute: missing.clone(),
                });
            }
            if let Some(missing) = method.calls.iter().find(|c| !signatures.contains(c.as_str())) {
                return Err(Error::UnresolvedCall {
                    class: self.name,
                    method: method.signature.clone(),
                    callee: missing.clone(),
                });
            }
        }

        Ok(Skeleton {
            name: self.name,
            attributes: self.attributes,
            methods: self.methods,
        })
    }
}

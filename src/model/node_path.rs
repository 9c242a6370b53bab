//! Textual addresses of nodes inside an OpenAPI document.
//!
//! A node path is a list of segments, each a property name optionally
//! followed by a bracketed key or index:
//!
//! ```text
//! /paths[/pets/{petId}]/get/parameters[0]
//! ```
//!
//! Bracketed values may contain `/`, which is why path templates can be used
//! as keys without escaping. A `\`, `[` or `]` inside a key, and a `/` inside a
//! name, is written with a leading `\`.

use serde::{Deserialize, Serialize};
use std::fmt::Formatter;
use std::str::FromStr;

use crate::model::ModelError;

/// One step of a [`NodePath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePathSegment {
    pub name: String,
    pub index: Option<String>,
}

/// Address of a node inside a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodePath {
    segments: Vec<NodePathSegment>,
}

impl NodePath {
    /// The document root
    pub fn root() -> Self {
        Self::default()
    }

    /// Append a plain property segment
    pub fn child<S: Into<String>>(&self, name: S) -> Self {
        let mut path = self.clone();
        path.segments.push(NodePathSegment {
            name: name.into(),
            index: None,
        });
        path
    }

    /// Append a property segment keyed by `index`
    pub fn indexed<S: Into<String>, I: ToString>(&self, name: S, index: I) -> Self {
        let mut path = self.clone();
        path.segments.push(NodePathSegment {
            name: name.into(),
            index: Some(index.to_string()),
        });
        path
    }

    pub fn segments(&self) -> &[NodePathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether `self` is `other` or lies underneath it
    pub fn starts_with(&self, other: &NodePath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl std::fmt::Display for NodePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            f.write_str("/")?;
            write_escaped(f, &segment.name, &['\\', '/', '[', ']'])?;
            if let Some(index) = &segment.index {
                f.write_str("[")?;
                write_escaped(f, index, &['\\', '[', ']'])?;
                f.write_str("]")?;
            }
        }
        Ok(())
    }
}

fn write_escaped(f: &mut Formatter<'_>, text: &str, special: &[char]) -> std::fmt::Result {
    for c in text.chars() {
        if special.contains(&c) {
            f.write_str("\\")?;
        }
        write!(f, "{c}")?;
    }
    Ok(())
}

impl FromStr for NodePath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidNodePath(s.to_string());

        let rest = s.strip_prefix('/').ok_or_else(invalid)?;
        if rest.is_empty() {
            return Ok(Self::root());
        }

        let mut segments = Vec::new();
        let mut chars = rest.chars();
        let mut name = String::new();

        loop {
            match chars.next() {
                Some('\\') => name.push(chars.next().ok_or_else(invalid)?),
                Some('[') => {
                    let index = read_key(&mut chars).ok_or_else(invalid)?;
                    segments.push(take_segment(&mut name, Some(index)).ok_or_else(invalid)?);
                    match chars.next() {
                        Some('/') => {}
                        None => break,
                        Some(_) => return Err(invalid()),
                    }
                }
                Some(']') => return Err(invalid()),
                Some('/') => segments.push(take_segment(&mut name, None).ok_or_else(invalid)?),
                Some(c) => name.push(c),
                None => {
                    segments.push(take_segment(&mut name, None).ok_or_else(invalid)?);
                    break;
                }
            }
        }

        Ok(Self { segments })
    }
}

/// Reads a bracketed key up to its closing `]`, unescaping `\x` to `x`
fn read_key(chars: &mut std::str::Chars<'_>) -> Option<String> {
    let mut key = String::new();
    loop {
        match chars.next()? {
            '\\' => key.push(chars.next()?),
            ']' => return Some(key),
            '[' => return None,
            c => key.push(c),
        }
    }
}

fn take_segment(name: &mut String, index: Option<String>) -> Option<NodePathSegment> {
    if name.is_empty() {
        return None;
    }
    Some(NodePathSegment {
        name: std::mem::take(name),
        index,
    })
}

impl TryFrom<String> for NodePath {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodePath> for String {
    fn from(path: NodePath) -> Self {
        path.to_string()
    }
}

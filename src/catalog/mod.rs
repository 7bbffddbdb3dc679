//! The error catalog and the values derived from it
//!
//! A [`Catalog`] is the ordered list of diagnostic kinds the downstream parser
//! can record. Ordinals are positional: the synthetic sentinel ("no error")
//! always holds ordinal 0 and real kinds follow at `1..=K` in catalog order.
//! Every ordinal maps to exactly one [`MarkerType`].

mod ident;

pub use ident::check_identifier;

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::ops::Range;

use serde::Serialize;

use crate::error::CatalogError;

/// Slot budget used when none is configured
pub const DEFAULT_SLOTS: usize = 20;

/// Kinds recognized by the seephit parser, in ordinal order.
const SEEPHIT_KINDS: &[&str] = &[
    "Expecting_an_identifier",
    "Unexpected_character_inside_tag_content",
    "Expecting_a_tag_name_after_open_bracket",
    "Empty_value_for_non_boolean_attribute",
    "Duplicate_ID_on_tag",
    "Expecting_a_value_for_attribute",
    "Missing_open_bracket",
    "Unknown_tag_name",
    "Missing_close_bracket_on_void_tag",
    "Missing_close_bracket_on_open_tag",
    "Expecting_a_close_tag",
    "Mismatched_Close_Tag",
    "Missing_close_bracket_in_close_tag",
    "Missing_close_brace_in_template",
    "Unexpected_end_of_stream",
    "Invalid_syntax_in_for_tag",
    "Invalid_syntax_in_if_tag",
    "Infinite_loop_in_for_tag",
];

/// One named diagnostic category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorKind {
    name: String,
}

impl ErrorKind {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Position-derived identity of a kind; 0 is the sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ordinal(usize);

impl Ordinal {
    /// The "no error" ordinal
    pub const SENTINEL: Ordinal = Ordinal(0);

    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(self) -> usize {
        self.0
    }

    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }
}

impl std::fmt::Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// The nominal type standing in for one ordinal at the type level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerType<'a> {
    Sentinel,
    Kind(&'a ErrorKind),
}

impl<'a> MarkerType<'a> {
    /// Name of the emitted type. The sentinel's name comes from the schema.
    pub fn name<'b>(&self, sentinel: &'b str) -> &'b str
    where
        'a: 'b,
    {
        match *self {
            MarkerType::Sentinel => sentinel,
            MarkerType::Kind(kind) => kind.name(),
        }
    }
}

/// Maximum number of recorded warnings the dispatch scaffold addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBudget(NonZeroUsize);

impl SlotBudget {
    pub fn new(slots: usize) -> Result<Self, CatalogError> {
        NonZeroUsize::new(slots)
            .map(Self)
            .ok_or(CatalogError::InvalidBudget { slots })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Slot indices `0..N`
    pub fn slots(self) -> Range<usize> {
        0..self.get()
    }
}

impl Default for SlotBudget {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_SLOTS).unwrap_or(NonZeroUsize::MIN))
    }
}

/// The ordered, name-unique set of recognized diagnostics.
///
/// Only [`Catalog::new`] builds one, so every `Catalog` value has passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    kinds: Vec<ErrorKind>,
}

impl Catalog {
    /// Validate and build a catalog from names in ordinal order.
    ///
    /// Positions in errors are 0-based indices into `names`.
    pub fn new<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kinds = Vec::new();
        let mut seen: HashMap<String, usize> = HashMap::new();

        for (position, name) in names.into_iter().enumerate() {
            let name = name.into();
            check_identifier(&name).map_err(|reason| CatalogError::InvalidName {
                name: name.clone(),
                position,
                reason,
            })?;
            if let Some(&first) = seen.get(&name) {
                return Err(CatalogError::DuplicateName {
                    name,
                    first,
                    second: position,
                });
            }
            seen.insert(name.clone(), position);
            kinds.push(ErrorKind { name });
        }

        Ok(Self { kinds })
    }

    /// The catalog shipped with the seephit parser
    pub fn seephit() -> Self {
        Self {
            kinds: SEEPHIT_KINDS
                .iter()
                .map(|name| ErrorKind {
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Number of real kinds (the sentinel excluded)
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kinds(&self) -> &[ErrorKind] {
        &self.kinds
    }

    /// Number of ordinals, sentinel included
    pub fn ordinal_count(&self) -> usize {
        self.kinds.len() + 1
    }

    /// Real kinds paired with their ordinals, in catalog order
    pub fn ordered_kinds(&self) -> impl Iterator<Item = (Ordinal, &ErrorKind)> {
        self.kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| (Ordinal(i + 1), kind))
    }

    /// Every ordinal with its marker type, sentinel first
    pub fn entries(&self) -> impl Iterator<Item = (Ordinal, MarkerType<'_>)> {
        std::iter::once((Ordinal::SENTINEL, MarkerType::Sentinel)).chain(
            self.ordered_kinds()
                .map(|(ordinal, kind)| (ordinal, MarkerType::Kind(kind))),
        )
    }

    /// Resolve an ordinal to its marker type
    pub fn marker(&self, ordinal: Ordinal) -> Option<MarkerType<'_>> {
        if ordinal.is_sentinel() {
            return Some(MarkerType::Sentinel);
        }
        self.kinds.get(ordinal.0 - 1).map(MarkerType::Kind)
    }

    /// Ordinal of a real kind
    pub fn ordinal_of(&self, name: &str) -> Option<Ordinal> {
        self.kinds
            .iter()
            .position(|kind| kind.name == name)
            .map(|i| Ordinal(i + 1))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seephit()
    }
}

#[cfg(test)]
mod tests;

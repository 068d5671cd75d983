//! Reaction kinds and the per-thread reaction board
//!
//! Every thread carries seven fixed reaction kinds. A user holds at most
//! one reaction per thread; switching kinds moves the reaction instead of
//! stacking it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// The seven fixed reaction kinds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReactionKind {
    Rendang,
    TehTalua,
    Langkitang,
    SotoPadang,
    SambaLado,
    Gulai,
    Asin,
}

impl ReactionKind {
    /// All kinds in display order
    pub const ALL: [ReactionKind; 7] = [
        Self::Rendang,
        Self::TehTalua,
        Self::Langkitang,
        Self::SotoPadang,
        Self::SambaLado,
        Self::Gulai,
        Self::Asin,
    ];

    /// Wire/storage identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rendang => "rendang",
            Self::TehTalua => "teh-talua",
            Self::Langkitang => "langkitang",
            Self::SotoPadang => "soto-padang",
            Self::SambaLado => "samba-lado",
            Self::Gulai => "gulai",
            Self::Asin => "asin",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rendang => "Rendang",
            Self::TehTalua => "Teh Talua",
            Self::Langkitang => "Langkitang",
            Self::SotoPadang => "Soto Padang",
            Self::SambaLado => "Samba Lado",
            Self::Gulai => "Gulai",
            Self::Asin => "Asin",
        }
    }

    /// Parse a reaction kind from caller input
    ///
    /// Unknown kinds are rejected rather than silently coerced.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownReaction(s.to_string()))
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a toggle did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardChange {
    /// User now reacts with the given kind
    Added,
    /// User's reaction of the given kind was removed
    Removed,
}

/// Per-thread reaction state
///
/// Maps each kind to the ordered list of reacting user ids. Invariant:
/// a user id appears under at most one kind at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionBoard {
    kinds: BTreeMap<ReactionKind, Vec<Uuid>>,
}

impl ReactionBoard {
    /// Create an empty board with all seven kinds present
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: ReactionKind::ALL
                .into_iter()
                .map(|kind| (kind, Vec::new()))
                .collect(),
        }
    }

    /// Users currently reacting with `kind`, in insertion order
    #[must_use]
    pub fn users_for(&self, kind: ReactionKind) -> &[Uuid] {
        self.kinds.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Number of users reacting with `kind`
    #[must_use]
    pub fn count(&self, kind: ReactionKind) -> usize {
        self.users_for(kind).len()
    }

    /// Total reactions across all kinds
    #[must_use]
    pub fn total(&self) -> usize {
        self.kinds.values().map(Vec::len).sum()
    }

    /// The kind the user currently reacts with, if any
    #[must_use]
    pub fn kind_of(&self, user_id: Uuid) -> Option<ReactionKind> {
        self.kinds
            .iter()
            .find(|(_, users)| users.contains(&user_id))
            .map(|(kind, _)| *kind)
    }

    /// Whether the user reacts with this specific kind
    #[must_use]
    pub fn has_reacted(&self, user_id: Uuid, kind: ReactionKind) -> bool {
        self.users_for(kind).contains(&user_id)
    }

    /// Remove the user from every kind
    pub fn remove_everywhere(&mut self, user_id: Uuid) {
        for users in self.kinds.values_mut() {
            users.retain(|id| *id != user_id);
        }
    }

    /// Toggle the user's reaction of `kind`
    ///
    /// Re-toggling the same kind removes it; any other existing reaction
    /// is removed first so the at-most-one-kind invariant holds.
    pub fn toggle(&mut self, user_id: Uuid, kind: ReactionKind) -> BoardChange {
        if self.has_reacted(user_id, kind) {
            if let Some(users) = self.kinds.get_mut(&kind) {
                users.retain(|id| *id != user_id);
            }
            return BoardChange::Removed;
        }

        self.remove_everywhere(user_id);
        self.kinds.entry(kind).or_default().push(user_id);
        BoardChange::Added
    }
}

impl Default for ReactionBoard {
    fn default() -> Self {
        Self::new()
    }
}

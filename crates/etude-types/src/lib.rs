//! # etude-types: Core types for the etude components
//!
//! This crate contains the shared types used across the workspace:
//! - Entity IDs ([`UserId`], [`ItemId`])
//! - Logical time ([`Tick`])
//!
//! All types are cheap 8-byte `Copy` values with ordering, hashing, and
//! serde derives, so they can live in `BTreeMap` keys and test fixtures
//! without ceremony.

use std::fmt::Display;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

// ============================================================================
// Entity IDs - All Copy (cheap 8-byte values)
// ============================================================================

/// Unique identifier for a feed participant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// Caller-supplied identifier for a posted item.
///
/// Item IDs are opaque to the feed: they are not required to be unique
/// across users (or even within one user), and the feed never interprets
/// them beyond returning them from a feed query.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for u64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

// ============================================================================
// Logical time
// ============================================================================

/// Monotonically increasing logical timestamp.
///
/// Ticks are assigned from an instance-scoped counter, one per posted item,
/// and are used only for relative ordering - they carry no wall-clock
/// meaning. Within one counter a tick is never reused, so two items from
/// the same feed instance never compare equal on `created_at`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Tick(u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    pub fn new(tick: u64) -> Self {
        Self(tick)
    }

    /// Returns the tick as a `u64`.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the successor tick.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Tick {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Tick> for u64 {
    fn from(tick: Tick) -> Self {
        tick.0
    }
}

impl Add for Tick {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Tick {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

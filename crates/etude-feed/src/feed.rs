//! Feed state and operations.
//!
//! The feed is a plain in-memory state machine: post, follow, unfollow, and
//! a top-10 timeline query. Every operation accepts every input - unknown
//! user or item ids behave as fresh entries - so nothing here returns a
//! `Result`.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use etude_types::{ItemId, Tick, UserId};

use crate::topk::BoundedMinHeap;

/// Maximum number of item ids a feed query returns.
pub const FEED_LIMIT: usize = 10;

/// A posted item. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-supplied id; not required to be unique across users.
    pub id: ItemId,
    /// Logical creation time, assigned from the feed's clock.
    pub created_at: Tick,
}

/// The in-memory micro feed.
///
/// Invariants:
/// - a user who has posted at least once always follows themselves;
/// - a user can never be made to unfollow themselves;
/// - `clock` increments exactly once per posted item, so `created_at` is
///   strictly increasing across all items of one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Feed {
    /// User -> set of users they follow.
    follows: BTreeMap<UserId, BTreeSet<UserId>>,
    /// User -> their items, insertion order = creation order.
    items: BTreeMap<UserId, Vec<Item>>,
    /// Instance-scoped logical clock; used only for relative ordering.
    clock: Tick,
}

impl Feed {
    /// Creates a new empty feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts an item for `user`.
    ///
    /// Bootstraps the self-follow (idempotent), appends the item with the
    /// current clock tick, then advances the clock.
    pub fn post_item(&mut self, user: UserId, item: ItemId) {
        // Self-follow is enforced here, not left to incidental call order.
        self.follow(user, user);

        self.items.entry(user).or_default().push(Item {
            id: item,
            created_at: self.clock,
        });
        self.clock = self.clock.next();

        debug_assert!(self.is_following(user, user));
    }

    /// Makes `follower` follow `followee`. Idempotent, never errors, even
    /// when `follower == followee`.
    pub fn follow(&mut self, follower: UserId, followee: UserId) {
        self.follows.entry(follower).or_default().insert(followee);
    }

    /// Makes `follower` unfollow `followee`.
    ///
    /// No-op when the relationship does not exist or when a user attempts
    /// to unfollow themselves. Never errors.
    pub fn unfollow(&mut self, follower: UserId, followee: UserId) {
        if follower == followee {
            return;
        }
        if let Some(followees) = self.follows.get_mut(&follower) {
            followees.remove(&followee);
        }
    }

    /// Returns the ids of the 10 most recent items across everyone `user`
    /// follows (themselves included once they have posted), newest first.
    ///
    /// A user with no follow entry gets an empty feed. Cost is
    /// O(total candidate items * log 10) via a bounded min-heap.
    pub fn get_feed(&self, user: UserId) -> Vec<ItemId> {
        let Some(followees) = self.follows.get(&user) else {
            return Vec::new();
        };

        let mut top = BoundedMinHeap::new(FEED_LIMIT);
        for followee in followees {
            let Some(items) = self.items.get(followee) else {
                continue;
            };
            for item in items {
                top.push((item.created_at, item.id));
            }
        }

        let feed: Vec<ItemId> = top
            .into_descending()
            .into_iter()
            .map(|(_, id)| id)
            .collect();

        debug_assert!(feed.len() <= FEED_LIMIT);
        feed
    }

    // ========================================================================
    // Read accessors
    // ========================================================================

    /// Returns the set of users `user` follows, if any relationship exists.
    pub fn following(&self, user: UserId) -> Option<&BTreeSet<UserId>> {
        self.follows.get(&user)
    }

    /// Returns true if `follower` currently follows `followee`.
    pub fn is_following(&self, follower: UserId, followee: UserId) -> bool {
        self.follows
            .get(&follower)
            .is_some_and(|f| f.contains(&followee))
    }

    /// Returns the number of items `user` has posted.
    pub fn item_count(&self, user: UserId) -> usize {
        self.items.get(&user).map_or(0, Vec::len)
    }

    /// Returns the tick the next posted item will be stamped with.
    pub fn clock(&self) -> Tick {
        self.clock
    }
}

//! # etude-feed: in-memory micro feed
//!
//! An in-memory service supporting posting timestamped items, directed
//! follow/unfollow relationships, and retrieval of the 10 most recent items
//! across a user's followed set (including themselves).
//!
//! ## Key Principles
//!
//! - **No IO**: all state lives inside the [`Feed`] instance
//! - **No clocks**: items are ordered by an instance-scoped logical tick,
//!   not wall-clock time
//! - **No errors**: every operation accepts every input; unknown ids are
//!   simply fresh entries
//!
//! Single-threaded by design. Callers that share a `Feed` across threads
//! must serialize access externally.
//!
//! ## Example
//!
//! ```
//! use etude_feed::Feed;
//! use etude_types::{ItemId, UserId};
//!
//! let mut feed = Feed::new();
//! feed.post_item(UserId::new(1), ItemId::new(5));
//! feed.follow(UserId::new(1), UserId::new(2));
//! feed.post_item(UserId::new(2), ItemId::new(6));
//!
//! assert_eq!(
//!     feed.get_feed(UserId::new(1)),
//!     vec![ItemId::new(6), ItemId::new(5)],
//! );
//! ```

pub mod feed;
pub mod topk;


pub use feed::{FEED_LIMIT, Feed, Item};
pub use topk::BoundedMinHeap;

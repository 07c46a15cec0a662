//! Feed command - scripted walk through the micro feed.

use anyhow::Result;
use etude_feed::Feed;
use etude_types::{ItemId, UserId};
use tracing::debug;

pub fn run() -> Result<()> {
    println!("MicroFeed");
    println!("---------");

    let mut feed = Feed::new();

    post(&mut feed, 1, 5);
    show(&feed, 1);

    println!("follow(1, 2)");
    feed.follow(UserId::new(1), UserId::new(2));

    post(&mut feed, 2, 6);
    show(&feed, 1);

    println!("unfollow(1, 2)");
    feed.unfollow(UserId::new(1), UserId::new(2));
    show(&feed, 1);

    Ok(())
}

fn post(feed: &mut Feed, user: u64, item: u64) {
    feed.post_item(UserId::new(user), ItemId::new(item));
    debug!(user, item, clock = %feed.clock(), "posted");
    println!("post_item({user}, {item})");
}

fn show(feed: &Feed, user: u64) {
    let ids: Vec<u64> = feed
        .get_feed(UserId::new(user))
        .into_iter()
        .map(u64::from)
        .collect();
    println!("get_feed({user}) -> {ids:?}");
}

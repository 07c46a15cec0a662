//! Skip command - scripted walk through the skip-aware sequence.

use anyhow::{Context, Result};
use etude_skip::SkipSequence;
use tracing::debug;

const SOURCE: [i64; 11] = [5, 6, 7, 5, 6, 8, 9, 5, 5, 6, 8];

pub fn run() -> Result<()> {
    println!("SkipSequence over {SOURCE:?}");
    println!("---------------------------");

    let mut seq = SkipSequence::new(SOURCE.into_iter());

    println!("has_next() -> {}", seq.has_next());
    next(&mut seq)?;
    skip(&mut seq, 5)?;
    next(&mut seq)?;
    next(&mut seq)?;
    skip(&mut seq, 7)?;
    skip(&mut seq, 9)?;
    next(&mut seq)?;
    next(&mut seq)?;
    next(&mut seq)?;
    skip(&mut seq, 8)?;
    skip(&mut seq, 5)?;
    println!("has_next() -> {}", seq.has_next());
    next(&mut seq)?;
    println!("has_next() -> {}", seq.has_next());

    Ok(())
}

fn next<I: Iterator<Item = i64>>(seq: &mut SkipSequence<I>) -> Result<()> {
    let value = seq.next().context("next() on exhausted sequence")?;
    debug!(value, pending = seq.pending_skips(), "produced");
    println!("next()     -> {value}");
    Ok(())
}

fn skip<I: Iterator<Item = i64>>(seq: &mut SkipSequence<I>, value: i64) -> Result<()> {
    seq.skip(value).context("skip() on exhausted sequence")?;
    debug!(value, pending = seq.pending_skips(), "skip recorded");
    println!("skip({value})");
    Ok(())
}

//! Transcoder tests
//!
//! Whole-document conversions in both directions.

mod blocks;
mod idempotence;
mod links;
mod round_trip;

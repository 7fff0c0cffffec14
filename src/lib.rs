//! imadic - kana-to-name IME dictionary builder.
//!
//! Scrapes character listings, splits each name into surname and given name
//! with hiragana readings, applies manual corrections and writes
//! tab-separated dictionary files.

pub mod cache;
pub mod cli;
pub mod config;
pub mod corrections;
pub mod dictionary;
pub mod names;
pub mod scrapers;

//! Embedded default dictionary
//!
//! Generated from `data/words.txt` by the build script.

include!(concat!(env!("OUT_DIR"), "/words.rs"));

//! Embedded sample list
//!
//! Sample list compiled into the binary at build time.

// Include generated sample list from build script
include!(concat!(env!("OUT_DIR"), "/sample.rs"));

//! bmp-ascii library crate.
//!
//! Decodes uncompressed 24-bit bitmaps and renders them as truecolor
//! terminal character art. The modules are exposed for integration testing.

pub mod ascii;
pub mod bitmap;
pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;

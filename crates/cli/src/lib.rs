//! Fontbuild CLI library.

pub mod cli;

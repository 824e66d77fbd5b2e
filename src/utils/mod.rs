//! Process-level utilities shared by the binaries.

pub mod interrupt;

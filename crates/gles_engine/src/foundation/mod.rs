//! Cross-cutting utilities shared by the engine and the demo binaries

pub mod logging;

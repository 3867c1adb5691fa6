// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.3
// Author: Lukas Bower
// Date Modified: 2026-08-25

//! Stimuli generator for the iDMA hardware test harness. Produces the
//! `idma_defines.h` / `idma_parameters.h` header pair consumed by the
//! transfer test firmware.

/// Numeric generation bounds and TOML overrides
pub mod config;

/// Dimensionality profiles (descriptor field lists and draw rules)
pub mod profile;

/// Random sampling and header writing driver
pub mod generator;

/// C header text rendering
pub mod emitter;

/// CLI interface for generator invocation
pub mod cli;

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading bounds or writing stimuli headers.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read bounds file {}: {source}", path.display())]
    ReadBounds {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid bounds file {}: {source}", path.display())]
    ParseBounds {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("bound `{0}` must be at least 1")]
    ZeroBound(&'static str),
    #[error("the preset table is only defined for the 3d profile")]
    PresetsUnsupported,
}

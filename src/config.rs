// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-25

//! Generation bounds. Defaults follow the legacy per-flavour limits; a
//! TOML file can override individual keys for a run.

use crate::profile::Dim;
use crate::GenError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Upper limits for every random draw. All draws are uniform in
/// `[1, limit]`, so every limit must be at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Upper bound on `NB_TRANSFERS`.
    pub max_transfers: u32,
    /// Upper bound on the per-transfer size draw, before the length bias.
    pub transfer_size: u32,
    /// Upper bound on the row length draw (2-D/3-D).
    pub max_length: u32,
    /// Upper bound on every stride draw, before the length bias.
    pub max_stride: u32,
    /// Upper bound on `num_reps_3d` (3-D only).
    pub max_reps: u32,
}

/// Partial bounds as read from a TOML override file. Missing keys keep
/// the profile defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsFile {
    pub max_transfers: Option<u32>,
    pub transfer_size: Option<u32>,
    pub max_length: Option<u32>,
    pub max_stride: Option<u32>,
    pub max_reps: Option<u32>,
}

impl Bounds {
    /// Legacy limits for one dimensionality flavour. The flat 1-D flow
    /// allows sizes up to 1024 bytes; the strided flows cap the size draw
    /// at 128 bytes.
    pub fn defaults_for(dim: Dim) -> Self {
        let transfer_size = match dim {
            Dim::OneD => 1024,
            Dim::TwoD | Dim::ThreeD => 128,
        };
        Self {
            max_transfers: 10,
            transfer_size,
            max_length: 10,
            max_stride: 10,
            max_reps: 5,
        }
    }

    /// Apply the overrides from `path` on top of `self`.
    pub fn with_overrides_from(self, path: &Path) -> Result<Self, GenError> {
        let data = fs::read_to_string(path).map_err(|source| GenError::ReadBounds {
            path: path.to_path_buf(),
            source,
        })?;
        let file: BoundsFile = toml::from_str(&data).map_err(|source| GenError::ParseBounds {
            path: path.to_path_buf(),
            source,
        })?;
        self.with_overrides(&file)
    }

    pub fn with_overrides(self, file: &BoundsFile) -> Result<Self, GenError> {
        let merged = Self {
            max_transfers: file.max_transfers.unwrap_or(self.max_transfers),
            transfer_size: file.transfer_size.unwrap_or(self.transfer_size),
            max_length: file.max_length.unwrap_or(self.max_length),
            max_stride: file.max_stride.unwrap_or(self.max_stride),
            max_reps: file.max_reps.unwrap_or(self.max_reps),
        };
        merged.validate()?;
        Ok(merged)
    }

    fn validate(&self) -> Result<(), GenError> {
        if self.max_transfers == 0 {
            return Err(GenError::ZeroBound("max_transfers"));
        }
        if self.transfer_size == 0 {
            return Err(GenError::ZeroBound("transfer_size"));
        }
        if self.max_length == 0 {
            return Err(GenError::ZeroBound("max_length"));
        }
        if self.max_stride == 0 {
            return Err(GenError::ZeroBound("max_stride"));
        }
        if self.max_reps == 0 {
            return Err(GenError::ZeroBound("max_reps"));
        }
        Ok(())
    }
}

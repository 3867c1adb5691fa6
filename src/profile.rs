// CLASSIFICATION: COMMUNITY
// Filename: profile.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-25

//! Dimensionality profiles. A profile lists the fields of one transfer
//! descriptor and the rule used to draw each field, so a single generator
//! covers the 1-D, 2-D and 3-D test flavours.

use clap::ValueEnum;

/// Transfer dimensionality selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dim {
    /// Flat transfers, one size per entry.
    #[value(name = "1d")]
    OneD,
    /// Strided transfers.
    #[value(name = "2d")]
    TwoD,
    /// Strided, repeated transfers.
    #[value(name = "3d")]
    ThreeD,
}

/// How a single descriptor field is drawn.
///
/// `length` is always drawn before the other fields of a record; the
/// size and stride rules add it to their own uniform draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Uniform in `[1, transfer_size]`, no length bias (1-D sizes).
    Size,
    /// Uniform in `[1, max_length]`.
    Length,
    /// Uniform in `[1, transfer_size]` plus the record's length.
    SizePlusLength,
    /// Uniform in `[1, max_stride]` plus the record's length.
    StridePlusLength,
    /// Uniform in `[1, max_reps]`.
    Reps,
}

/// One field of the emitted descriptor struct.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub draw: Draw,
}

const FIELDS_1D: &[FieldSpec] = &[FieldSpec {
    name: "size",
    draw: Draw::Size,
}];

const FIELDS_2D: &[FieldSpec] = &[
    FieldSpec {
        name: "size",
        draw: Draw::SizePlusLength,
    },
    FieldSpec {
        name: "length",
        draw: Draw::Length,
    },
    FieldSpec {
        name: "src_stride",
        draw: Draw::StridePlusLength,
    },
    FieldSpec {
        name: "dst_stride",
        draw: Draw::StridePlusLength,
    },
];

const FIELDS_3D: &[FieldSpec] = &[
    FieldSpec {
        name: "size",
        draw: Draw::SizePlusLength,
    },
    FieldSpec {
        name: "length",
        draw: Draw::Length,
    },
    FieldSpec {
        name: "src_stride_2d",
        draw: Draw::StridePlusLength,
    },
    FieldSpec {
        name: "dst_stride_2d",
        draw: Draw::StridePlusLength,
    },
    FieldSpec {
        name: "src_stride_3d",
        draw: Draw::StridePlusLength,
    },
    FieldSpec {
        name: "dst_stride_3d",
        draw: Draw::StridePlusLength,
    },
    FieldSpec {
        name: "num_reps_3d",
        draw: Draw::Reps,
    },
];

/// Field list for one dimensionality flavour.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub dim: Dim,
    pub fields: &'static [FieldSpec],
}

impl Profile {
    pub fn for_dim(dim: Dim) -> Self {
        let fields = match dim {
            Dim::OneD => FIELDS_1D,
            Dim::TwoD => FIELDS_2D,
            Dim::ThreeD => FIELDS_3D,
        };
        Self { dim, fields }
    }

    /// Flat profiles emit a bare `unsigned int` array instead of a
    /// struct-literal array.
    pub fn is_flat(&self) -> bool {
        self.dim == Dim::OneD
    }

    pub fn uses_length(&self) -> bool {
        self.fields.iter().any(|f| f.draw == Draw::Length)
    }
}

// CLASSIFICATION: COMMUNITY
// Filename: emitter.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-25

//! C header text rendering. The output shape is consumed verbatim by the
//! iDMA test firmware build, so the formats here are byte-stable.

use crate::profile::FieldSpec;

/// Name of the emitted descriptor struct type.
pub const STRUCT_NAME: &str = "TransferParameters";

/// Render one `#define NAME value` macro line followed by a blank line.
pub fn render_define(name: &str, value: u32) -> String {
    format!("#define {} {}\n\n", name, value)
}

/// Render a flat `unsigned int` array, one value per line.
///
/// The trailing `, ` on each value line matches the legacy emitter and is
/// kept so regenerated headers diff cleanly against checked-in ones.
pub fn render_flat_array(name: &str, values: &[u32]) -> String {
    let mut out = String::new();
    out.push_str(&format!("unsigned int {}[] = {{\n", name));
    for v in values {
        out.push_str(&format!("{}, \n", v));
    }
    out.push_str("};\n\n");
    out
}

/// Render the `typedef struct { ... } TransferParameters;` declaration for
/// a profile's field list.
pub fn render_struct_typedef(fields: &[FieldSpec]) -> String {
    let mut out = String::new();
    out.push_str("typedef struct {\n");
    for field in fields {
        out.push_str(&format!("  unsigned int {};\n", field.name));
    }
    out.push_str(&format!("}} {};\n\n", STRUCT_NAME));
    out
}

/// Render a `TransferParameters` array of struct literals, one record per
/// line.
pub fn render_struct_array(name: &str, records: &[Vec<u32>]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}[] = {{\n", STRUCT_NAME, name));
    for record in records {
        let cells: Vec<String> = record.iter().map(u32::to_string).collect();
        out.push_str(&format!("{{{}}},\n", cells.join(", ")));
    }
    out.push_str("};\n\n");
    out
}

/// Hand-tuned 3-D preset table shipped with the hardware test. Kept
/// byte-identical so firmware builds can swap between randomized and preset
/// stimuli without regenerating anything.
pub const PRESETS_3D: &str = "
// Parameters are declared in this order:
// size, length, src_stride_2d, dst_stride_2d, src_stride_3d, dst_stride_3d, num_reps_3d

TransferParameters idma_presets[] = {
{1,   1,  1,  1,  1,  1, 1},
{2,   8,  8,  8,  8,  8, 2},
{3,   8,  8,  8,  8,  8, 4},
{4,   8, 16, 16, 16, 16, 8},
{8,   8, 32, 32, 32, 32, 8},
{16,  8, 16, 16, 16, 16, 8},
{32,  2,  2,  2,  2,  2, 2},
{64,  4,  4,  4,  4,  4, 2},
{128, 4,  4,  4,  4,  4, 4},
};

";

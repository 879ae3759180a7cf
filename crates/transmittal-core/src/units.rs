//! Unit conversion helpers
//!
//! Layout geometry is expressed in millimeters and points. The DOCX writer
//! needs twips, half-points and EMUs; the PDF transpiler keeps millimeters.
//! Conversions stay in `f64` and only [`round`] at the emission boundary, so
//! chained conversions do not compound rounding drift.

/// Twips per millimeter
pub const TWIPS_PER_MM: f64 = 56.7;

/// Twips per pixel, assuming 72 DPI
pub const TWIPS_PER_PX: f64 = 20.0;

/// Half-points per point (DOCX font sizes are half-points)
pub const HALF_POINTS_PER_PT: f64 = 2.0;

/// EMUs per millimeter (914400 EMU per inch)
pub const EMU_PER_MM: f64 = 36_000.0;

/// Points per millimeter
pub const PT_PER_MM: f64 = 72.0 / 25.4;

pub fn mm_to_twips(mm: f64) -> f64 {
    mm * TWIPS_PER_MM
}

pub fn pt_to_half_points(pt: f64) -> f64 {
    pt * HALF_POINTS_PER_PT
}

pub fn px_to_twips(px: f64) -> f64 {
    px * TWIPS_PER_PX
}

pub fn mm_to_emu(mm: f64) -> f64 {
    mm * EMU_PER_MM
}

pub fn pt_to_twips(pt: f64) -> f64 {
    px_to_twips(pt)
}

pub fn pt_to_mm(pt: f64) -> f64 {
    pt / PT_PER_MM
}

/// Round a converted value for emission
pub fn round(value: f64) -> i64 {
    value.round() as i64
}

//! Angle and pixel-density conversions

use super::{check_finite, check_range, CalcError};

const CM_PER_INCH: f64 = 2.54;

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Radians to degrees
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Pixels to physical inches at a display density
pub fn px_to_inches(px: f64, dpi: f64) -> Result<f64, CalcError> {
    let px = check_finite("pixels", px)?;
    let dpi = check_range("dpi", dpi, 1.0, 10_000.0)?;
    Ok(px / dpi)
}

/// Physical inches to pixels at a display density
pub fn inches_to_px(inches: f64, dpi: f64) -> Result<f64, CalcError> {
    let inches = check_finite("inches", inches)?;
    let dpi = check_range("dpi", dpi, 1.0, 10_000.0)?;
    Ok(inches * dpi)
}

/// Pixels to centimeters at a display density
pub fn px_to_cm(px: f64, dpi: f64) -> Result<f64, CalcError> {
    px_to_inches(px, dpi).map(|inches| inches * CM_PER_INCH)
}

/// Centimeters to pixels at a display density
pub fn cm_to_px(cm: f64, dpi: f64) -> Result<f64, CalcError> {
    let cm = check_finite("cm", cm)?;
    inches_to_px(cm / CM_PER_INCH, dpi)
}

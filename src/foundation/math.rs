/// Width every layout dimension is authored against.
pub const REFERENCE_WIDTH: f64 = 1280.0;

/// Uniform scale applied to every layout dimension of a render.
///
/// Derived once from the canvas width (`s = W / 1280`) so that layouts stay self-similar across
/// output sizes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Scale for a canvas of `width` pixels.
    pub fn for_width(width: u32) -> Self {
        Self(f64::from(width) / REFERENCE_WIDTH)
    }

    /// Raw scale value.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Scale a reference-space length and round to whole pixels.
    ///
    /// Rounds half away from zero; truncation would bias every element up and to the left.
    pub fn px(self, reference: f64) -> u32 {
        let v = (reference * self.0).round();
        if v <= 0.0 { 0 } else { v as u32 }
    }
}

/// Floor-divided offset that centers `content` inside `extent`. Negative when content overflows.
pub fn centered_offset(extent: u32, content: u32) -> i32 {
    (i64::from(extent) - i64::from(content)).div_euclid(2) as i32
}

pub(crate) fn mul_div255(x: u8, y: u8) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

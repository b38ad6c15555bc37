//! Stereo width and mid/side balance.
//!
//! Both transforms work in the mid/side domain:
//!
//! ```text
//! mid  = (L + R) / 2
//! side = (L - R) / 2
//! L'   = mid' + side'
//! R'   = mid' - side'
//! ```
//!
//! [`StereoField::Width`] scales only the side signal. [`StereoField::MidSide`]
//! trades mid against side: `mid' = mid·(1 - b)`, `side' = side·(1 + b)`.

/// Which stereo-field transform runs this block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StereoField {
    /// Side scaled by the factor (1.0 = unchanged, 0.0 = mono, 4.0 = 400 %).
    Width(f32),
    /// Mid/side balance in [-1, 1]; -1 is doubled mid only, 1 is doubled side only.
    MidSide(f32),
}

impl StereoField {
    /// Picks the transform from the raw parameter values.
    ///
    /// `width_percent` is 0–400, `mid_side` is -100–100.
    pub fn from_params(mid_side_mode: bool, width_percent: f32, mid_side: f32) -> Self {
        if mid_side_mode {
            Self::MidSide(mid_side / 100.0)
        } else {
            Self::Width(width_percent / 100.0)
        }
    }

    /// Mid and side gains this transform applies.
    #[inline]
    pub fn gains(self) -> (f32, f32) {
        match self {
            Self::Width(w) => (1.0, w),
            Self::MidSide(b) => (1.0 - b, 1.0 + b),
        }
    }

    /// `true` when the transform leaves the signal unchanged.
    pub fn is_identity(self) -> bool {
        self.gains() == (1.0, 1.0)
    }

    /// Transforms one stereo sample.
    #[inline]
    pub fn apply(self, left: f32, right: f32) -> (f32, f32) {
        let (mid_gain, side_gain) = self.gains();
        let mid = (left + right) * 0.5 * mid_gain;
        let side = (left - right) * 0.5 * side_gain;
        (mid + side, mid - side)
    }

    /// Transforms a stereo pair in place. Identity settings skip the
    /// arithmetic so the signal passes bit-exact.
    pub fn process(self, left: &mut [f32], right: &mut [f32]) {
        if self.is_identity() {
            return;
        }
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            (*l, *r) = self.apply(*l, *r);
        }
    }
}

impl Default for StereoField {
    fn default() -> Self {
        Self::Width(1.0)
    }
}

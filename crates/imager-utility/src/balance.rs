//! Stereo balance.
//!
//! Balance runs -50 to +50 and maps linearly onto pan -1 to +1. The channel
//! being panned toward stays at unity; the rule decides how the opposite
//! channel falls.

use core::f32::consts::FRAC_PI_2;

/// Largest balance magnitude.
pub const BALANCE_RANGE: f32 = 50.0;

/// How the far channel attenuates as balance moves off center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanRule {
    /// Far channel falls as `cos(|pan|·π/2)`.
    #[default]
    EqualPower,
    /// Far channel falls as `1 - |pan|`.
    Balanced,
}

impl PanRule {
    /// Textual names accepted by [`from_name`](Self::from_name).
    pub const NAMES: &'static [&'static str] = &["equal_power", "balanced"];

    /// Snake-case name used in presets.
    pub fn name(self) -> &'static str {
        match self {
            Self::EqualPower => "equal_power",
            Self::Balanced => "balanced",
        }
    }

    /// Parses a rule name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("equal_power") {
            Some(Self::EqualPower)
        } else if name.eq_ignore_ascii_case("balanced") {
            Some(Self::Balanced)
        } else {
            None
        }
    }

    /// Left and right gains for `pan` in [-1, 1].
    #[inline]
    pub fn gains(self, pan: f32) -> (f32, f32) {
        let amount = pan.abs().min(1.0);
        let far = match self {
            Self::EqualPower => libm::cosf(amount * FRAC_PI_2),
            Self::Balanced => 1.0 - amount,
        };
        if pan < 0.0 { (1.0, far) } else if pan > 0.0 { (far, 1.0) } else { (1.0, 1.0) }
    }
}

/// Maps a balance value to pan, clamped to [-1, 1].
#[inline]
pub fn balance_to_pan(balance: f32) -> f32 {
    (balance / BALANCE_RANGE).clamp(-1.0, 1.0)
}

/// Applies `balance` to a stereo pair. Zero balance leaves the block
/// untouched.
pub fn process(left: &mut [f32], right: &mut [f32], rule: PanRule, balance: f32) {
    let (gain_l, gain_r) = rule.gains(balance_to_pan(balance));
    if gain_l != 1.0 {
        for sample in left.iter_mut() {
            *sample *= gain_l;
        }
    }
    if gain_r != 1.0 {
        for sample in right.iter_mut() {
            *sample *= gain_r;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_unity() {
        assert_eq!(PanRule::EqualPower.gains(0.0), (1.0, 1.0));
        assert_eq!(PanRule::Balanced.gains(0.0), (1.0, 1.0));
    }

    #[test]
    fn hard_pan_silences_far_side() {
        let (l, r) = PanRule::EqualPower.gains(balance_to_pan(-50.0));
        assert_eq!(l, 1.0);
        assert!(r.abs() < 1e-6, "r={r}");

        let (l, r) = PanRule::Balanced.gains(balance_to_pan(50.0));
        assert_eq!(l, 0.0);
        assert_eq!(r, 1.0);
    }

    #[test]
    fn equal_power_half_pan() {
        let (l, r) = PanRule::EqualPower.gains(0.5);
        assert!((l - core::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert_eq!(r, 1.0);
    }

    #[test]
    fn balanced_is_linear() {
        let (l, r) = PanRule::Balanced.gains(-0.25);
        assert_eq!(l, 1.0);
        assert!((r - 0.75).abs() < 1e-6);
    }

    #[test]
    fn pan_clamps() {
        assert_eq!(balance_to_pan(80.0), 1.0);
        assert_eq!(balance_to_pan(-25.0), -0.5);
    }

    #[test]
    fn zero_balance_leaves_block() {
        let mut left = [0.3f32, -0.7];
        let mut right = [0.1f32, 0.9];
        process(&mut left, &mut right, PanRule::EqualPower, 0.0);
        assert_eq!(left, [0.3, -0.7]);
        assert_eq!(right, [0.1, 0.9]);
    }

    #[test]
    fn rule_names_round_trip() {
        for &name in PanRule::NAMES {
            let rule = PanRule::from_name(name).unwrap();
            assert_eq!(rule.name(), name);
        }
        assert_eq!(PanRule::from_name("Balanced"), Some(PanRule::Balanced));
        assert_eq!(PanRule::from_name("sine"), None);
    }
}

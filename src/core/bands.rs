use thiserror::Error;

/// Full marks for a value inside the perfect range
pub const PERFECT_SCORE: f64 = 100.0;

/// Why a dimension could not be scored
///
/// None of these reach the caller: the dimension simply scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("requirement has no {0} bounds")]
    MissingBound(&'static str),

    #[error("{0} value is missing or not a finite number")]
    MalformedValue(&'static str),
}

/// Requirement bounds after the single-bound fallback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    /// Resolve an optional min/max pair
    ///
    /// A lone bound stands in for the missing one. Inverted pairs are kept
    /// as given.
    pub fn resolve<T>(
        dimension: &'static str,
        min: Option<T>,
        max: Option<T>,
    ) -> Result<Self, ScoreError>
    where
        T: Into<f64> + Copy,
    {
        let (lower, upper) = match (min, max) {
            (Some(lo), Some(hi)) => (lo.into(), hi.into()),
            (Some(only), None) | (None, Some(only)) => (only.into(), only.into()),
            (None, None) => return Err(ScoreError::MissingBound(dimension)),
        };

        if !lower.is_finite() || !upper.is_finite() {
            return Err(ScoreError::MalformedValue(dimension));
        }

        Ok(Self { lower, upper })
    }

    /// Degenerate band around a single point
    pub fn point(center: f64) -> Self {
        Self {
            lower: center,
            upper: center,
        }
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Widen both ends by `margin`, clamping the low end at zero
    fn widen(&self, margin: f64) -> (f64, f64) {
        ((self.lower - margin).max(0.0), self.upper + margin)
    }
}

/// Band widths for one dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPolicy {
    /// Half-width added to the bounds for the 100-point range
    pub perfect: f64,
    /// Half-width added to the bounds for the non-zero range
    pub acceptable: f64,
    /// Score awarded at the acceptable edge
    pub floor: f64,
}

/// Score `value` against `bounds` using a three-zone banded policy
///
/// Inside the perfect range the score is 100, outside the acceptable range
/// it is 0, and in between it falls linearly from 100 to `policy.floor`.
/// A zero-width band between the two ranges counts as perfect.
pub fn banded_score(value: f64, bounds: Bounds, policy: BandPolicy) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let (perfect_min, perfect_max) = bounds.widen(policy.perfect);
    if perfect_min <= value && value <= perfect_max {
        return PERFECT_SCORE;
    }

    let (acceptable_min, acceptable_max) = bounds.widen(policy.acceptable);

    let (gap, width) = if value > perfect_max && value <= acceptable_max {
        (value - perfect_max, acceptable_max - perfect_max)
    } else if value < perfect_min && value >= acceptable_min {
        (perfect_min - value, perfect_min - acceptable_min)
    } else {
        return 0.0;
    };

    if width <= 0.0 {
        return PERFECT_SCORE;
    }

    let score = PERFECT_SCORE - (gap / width) * (PERFECT_SCORE - policy.floor);
    score.max(policy.floor)
}

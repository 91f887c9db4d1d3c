//! Generator configuration: inclusive count ranges plus the women-only
//! college probability, validated eagerly at construction. Generation itself
//! has no failure path, so every bound check lives here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("count range maximum {max} is less than minimum {min}")]
    InvertedRange { min: u32, max: u32 },
    #[error("women college ratio must be within [0, 1], got {ratio}")]
    RatioOutOfRange { ratio: f64 },
}

/// An inclusive `[min, max]` count range. Valid by construction: `new`
/// rejects inverted bounds, and unsigned bounds rule out negatives outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    min: u32,
    max: u32,
}

impl CountRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if max < min {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Count ranges for one generation run. The six ranges are public (a
/// `CountRange` cannot be invalid); the ratio stays behind an accessor so the
/// unit-interval check cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    pub colleges: CountRange,
    pub departments: CountRange,
    pub undergraduate_students: CountRange,
    pub postgraduate_students: CountRange,
    pub phd_students: CountRange,
    pub courses: CountRange,
    women_college_ratio: f64,
}

impl SynthConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        colleges: CountRange,
        departments: CountRange,
        undergraduate_students: CountRange,
        postgraduate_students: CountRange,
        phd_students: CountRange,
        courses: CountRange,
        women_college_ratio: f64,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&women_college_ratio) {
            return Err(ConfigError::RatioOutOfRange {
                ratio: women_college_ratio,
            });
        }
        Ok(Self {
            colleges,
            departments,
            undergraduate_students,
            postgraduate_students,
            phd_students,
            courses,
            women_college_ratio,
        })
    }

    pub fn women_college_ratio(&self) -> f64 {
        self.women_college_ratio
    }

    /// Same configuration with a different women-only probability.
    pub fn with_women_college_ratio(self, ratio: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ConfigError::RatioOutOfRange { ratio });
        }
        Ok(Self {
            women_college_ratio: ratio,
            ..self
        })
    }
}

impl Default for SynthConfig {
    /// The stock benchmark configuration.
    fn default() -> Self {
        Self {
            colleges: CountRange { min: 2, max: 4 },
            departments: CountRange { min: 2, max: 3 },
            undergraduate_students: CountRange { min: 5, max: 10 },
            postgraduate_students: CountRange { min: 2, max: 5 },
            phd_students: CountRange { min: 1, max: 3 },
            courses: CountRange { min: 3, max: 6 },
            women_college_ratio: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_is_rejected() {
        let err = CountRange::new(5, 2).expect_err("max < min must fail");
        assert_eq!(err, ConfigError::InvertedRange { min: 5, max: 2 });
    }

    #[test]
    fn degenerate_range_is_allowed() {
        let range = CountRange::new(3, 3).expect("single-value range");
        assert!(range.contains(3));
        assert!(!range.contains(2));
        assert!(!range.contains(4));
    }

    #[test]
    fn ratio_outside_unit_interval_is_rejected() {
        let default = SynthConfig::default();
        assert!(default.clone().with_women_college_ratio(1.5).is_err());
        assert!(default.clone().with_women_college_ratio(-0.1).is_err());
        assert!(default.with_women_college_ratio(1.0).is_ok());
    }

    #[test]
    fn constructor_validates_ratio() {
        let r = |min, max| CountRange::new(min, max).expect("valid range");
        let err = SynthConfig::new(r(2, 4), r(2, 3), r(5, 10), r(2, 5), r(1, 3), r(3, 6), 2.0)
            .expect_err("ratio 2.0 must fail");
        assert!(matches!(err, ConfigError::RatioOutOfRange { .. }));
    }

    #[test]
    fn default_matches_stock_benchmark() {
        let config = SynthConfig::default();
        assert_eq!(config.colleges.min(), 2);
        assert_eq!(config.colleges.max(), 4);
        assert_eq!(config.undergraduate_students.max(), 10);
        assert_eq!(config.phd_students.min(), 1);
        assert!((config.women_college_ratio() - 0.2).abs() < f64::EPSILON);
    }
}

//! Threshold classes over composite SPI values.

use crate::error::SampleError;

/// One severity class over a half-open value range.
///
/// A composite pixel belongs to the class when `min <= value < max`.
#[derive(Debug, Clone, PartialEq)]
pub struct DroughtClass {
    id: u32,
    label: String,
    min: f64,
    max: f64,
}

impl DroughtClass {
    /// Creates a class over `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InvalidClass`] when the bounds are not finite
    /// or `max <= min`.
    pub fn new(id: u32, label: impl Into<String>, min: f64, max: f64) -> Result<Self, SampleError> {
        if !min.is_finite() || !max.is_finite() || max <= min {
            return Err(SampleError::InvalidClass { id, min, max });
        }
        Ok(Self {
            id,
            label: label.into(),
            min,
            max,
        })
    }

    /// Integer identifier written alongside every sample.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Human-readable severity name, carried into reports.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Exclusive upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether a composite value belongs to this class.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }
}

/// Checks that a class list is usable: non-empty, unique ids, disjoint
/// ranges.
///
/// # Errors
///
/// Returns [`SampleError::DuplicateClassId`] or
/// [`SampleError::OverlappingClasses`] naming the offending pair, or
/// [`SampleError::InvalidConfig`] when the list is empty.
pub fn validate_classes(classes: &[DroughtClass]) -> Result<(), SampleError> {
    if classes.is_empty() {
        return Err(SampleError::InvalidConfig {
            reason: "at least one class is required".to_string(),
        });
    }
    for (index, a) in classes.iter().enumerate() {
        for b in &classes[index + 1..] {
            if a.id == b.id {
                return Err(SampleError::DuplicateClassId { id: a.id });
            }
            if a.min < b.max && b.min < a.max {
                return Err(SampleError::OverlappingClasses {
                    first: a.id,
                    second: b.id,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_half_open() {
        let class = DroughtClass::new(0, "severe", -0.4, -0.3).unwrap();
        assert!(class.contains(-0.4));
        assert!(class.contains(-0.35));
        assert!(!class.contains(-0.3));
        assert!(!class.contains(f64::NAN));
    }

    #[test]
    fn rejects_empty_or_non_finite_ranges() {
        assert!(DroughtClass::new(0, "a", -0.3, -0.3).is_err());
        assert!(DroughtClass::new(0, "a", -0.2, -0.3).is_err());
        assert!(DroughtClass::new(0, "a", f64::NEG_INFINITY, 0.0).is_err());
        assert!(DroughtClass::new(0, "a", 0.0, f64::NAN).is_err());
    }

    #[test]
    fn adjacent_classes_are_disjoint() {
        let classes = vec![
            DroughtClass::new(0, "severe", -0.4, -0.3).unwrap(),
            DroughtClass::new(1, "moderate", -0.3, -0.2).unwrap(),
            DroughtClass::new(2, "mild", -0.2, -0.1).unwrap(),
        ];
        assert!(validate_classes(&classes).is_ok());
    }

    #[test]
    fn overlap_names_both_classes() {
        let classes = vec![
            DroughtClass::new(0, "severe", -0.4, -0.25).unwrap(),
            DroughtClass::new(3, "moderate", -0.3, -0.2).unwrap(),
        ];
        match validate_classes(&classes).unwrap_err() {
            SampleError::OverlappingClasses { first, second } => {
                assert_eq!((first, second), (0, 3));
            }
            other => panic!("expected OverlappingClasses, got {other}"),
        }
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let classes = vec![
            DroughtClass::new(1, "a", -0.4, -0.3).unwrap(),
            DroughtClass::new(1, "b", -0.2, -0.1).unwrap(),
        ];
        assert!(matches!(
            validate_classes(&classes),
            Err(SampleError::DuplicateClassId { id: 1 })
        ));
    }

    #[test]
    fn empty_class_list_is_rejected() {
        assert!(matches!(
            validate_classes(&[]),
            Err(SampleError::InvalidConfig { .. })
        ));
    }
}

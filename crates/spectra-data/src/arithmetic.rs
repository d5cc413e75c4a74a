//! Error-propagating arithmetic between spectra and with scalars

use crate::data::Data;
use crate::geometry::{AttributeGeometry, DetectorGeometry};
use crate::merge::combine_for_add;
use spectra_core::{Error, Result};
use spectra_resample::SmoothMode;
use tracing::debug;

/// Denominators at or below this make an elementwise quotient zero
pub const DIVISION_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    fn value(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide if b <= DIVISION_THRESHOLD => 0.0,
            BinaryOp::Divide => a / b,
        }
    }

    fn error(self, a: f64, ea: f64, b: f64, eb: f64, result: f64) -> f64 {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => ea.hypot(eb),
            BinaryOp::Multiply => (ea * b).hypot(eb * a),
            BinaryOp::Divide if a == 0.0 || b == 0.0 => 0.0,
            BinaryOp::Divide => result.abs() * (ea / a).hypot(eb / b),
        }
    }
}

impl Data {
    /// `other` as this spectrum's kind, on this spectrum's grid
    fn aligned(&self, other: &Data) -> Result<Data> {
        let mut aligned = other.convert(self.kind, true, other.group_id)?;
        if !self.scale.compatible(&aligned.scale) {
            debug!(
                this = self.group_id,
                other = other.group_id,
                from = %aligned.scale,
                onto = %self.scale,
                "scales differ, resampling operand"
            );
            aligned.resample(self.scale.clone(), SmoothMode::Linear)?;
        }
        Ok(aligned)
    }

    fn binary(&self, other: &Data, op: BinaryOp) -> Result<Data> {
        let rhs = self.aligned(other)?;
        let mut out = self.clone();
        out.sqrt_errors = false;

        out.values = self
            .values
            .iter()
            .zip(&rhs.values)
            .map(|(&a, &b)| op.value(a, b))
            .collect();

        out.errors = match (self.errors.as_deref(), rhs.errors.as_deref()) {
            (Some(ea), Some(eb)) => Some(
                self.values
                    .iter()
                    .zip(ea)
                    .zip(rhs.values.iter().zip(eb))
                    .zip(&out.values)
                    .map(|(((&a, &ea), (&b, &eb)), &r)| op.error(a, ea, b, eb, r))
                    .collect(),
            ),
            _ => None,
        };
        Ok(out)
    }

    /// Sum with `other`, merging attributes from detector attributes
    pub fn add(&self, other: &Data) -> Result<Data> {
        self.add_with(other, &AttributeGeometry)
    }

    /// Sum with `other`, using `geometry` for detector placement when
    /// merging attributes
    pub fn add_with(&self, other: &Data, geometry: &dyn DetectorGeometry) -> Result<Data> {
        let mut out = self.binary(other, BinaryOp::Add)?;
        out.attributes = combine_for_add(self, other, geometry);
        Ok(out)
    }

    pub fn subtract(&self, other: &Data) -> Result<Data> {
        self.binary(other, BinaryOp::Subtract)
    }

    pub fn multiply(&self, other: &Data) -> Result<Data> {
        self.binary(other, BinaryOp::Multiply)
    }

    /// Elementwise quotient; denominators at or below
    /// [`DIVISION_THRESHOLD`] give zero
    pub fn divide(&self, other: &Data) -> Result<Data> {
        self.binary(other, BinaryOp::Divide)
    }

    fn scalar(&self, value: impl Fn(f64) -> f64, error: impl Fn(f64, f64) -> f64) -> Data {
        let mut out = self.clone();
        out.sqrt_errors = false;
        out.values = self.values.iter().map(|&y| value(y)).collect();
        out.errors = self.errors.as_ref().map(|errors| {
            self.values
                .iter()
                .zip(errors)
                .map(|(&y, &e)| error(y, e))
                .collect()
        });
        out
    }

    /// Add `value` known to within `error`
    ///
    /// A non-positive `error` leaves the errors as they were.
    pub fn add_scalar(&self, value: f64, error: f64) -> Result<Data> {
        Ok(self.scalar(|y| y + value, |_, e| shift_error(e, error)))
    }

    pub fn subtract_scalar(&self, value: f64, error: f64) -> Result<Data> {
        Ok(self.scalar(|y| y - value, |_, e| shift_error(e, error)))
    }

    pub fn multiply_scalar(&self, value: f64, error: f64) -> Result<Data> {
        Ok(self.scalar(
            |y| y * value,
            |y, e| {
                if error > 0.0 {
                    (e * value).hypot(error * y)
                } else {
                    e * value.abs()
                }
            },
        ))
    }

    /// Divide by `value`; fails on exactly zero
    pub fn divide_scalar(&self, value: f64, error: f64) -> Result<Data> {
        if value == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(self.scalar(
            |y| y / value,
            |y, e| {
                if error <= 0.0 {
                    e / value.abs()
                } else if y == 0.0 {
                    0.0
                } else {
                    (y / value).abs() * (e / y).hypot(error / value)
                }
            },
        ))
    }
}

fn shift_error(e: f64, error: f64) -> f64 {
    if error > 0.0 {
        e.hypot(error)
    } else {
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{Attribute, AttributeValue};
    use crate::names;
    use approx::assert_relative_eq;
    use spectra_scale::{Scale, XScale};

    fn grid() -> XScale {
        XScale::uniform(0.0, 2.0, 3).unwrap()
    }

    #[test]
    fn test_add_and_subtract() {
        let a = Data::function(grid(), vec![1.0, 2.0, 3.0], 1).with_errors(vec![3.0, 3.0, 3.0]);
        let b = Data::function(grid(), vec![1.0, 1.0, 1.0], 2).with_errors(vec![4.0, 4.0, 4.0]);

        let sum = a.add(&b).unwrap();
        assert_eq!(sum.values(), &[2.0, 3.0, 4.0]);
        for e in sum.errors().unwrap() {
            assert_relative_eq!(*e, 5.0);
        }
        assert_eq!(sum.group_id(), 1);

        let diff = a.subtract(&b).unwrap();
        assert_eq!(diff.values(), &[0.0, 1.0, 2.0]);
        for e in diff.errors().unwrap() {
            assert_relative_eq!(*e, 5.0);
        }
    }

    #[test]
    fn test_errors_need_both_operands() {
        let a = Data::function(grid(), vec![1.0, 2.0, 3.0], 1).with_errors(vec![1.0; 3]);
        let b = Data::function(grid(), vec![1.0, 1.0, 1.0], 2);
        assert!(a.add(&b).unwrap().errors().is_none());
        assert!(b.multiply(&a).unwrap().errors().is_none());
    }

    #[test]
    fn test_multiply_errors() {
        let a = Data::function(grid(), vec![2.0, 2.0, 2.0], 1).with_errors(vec![1.0; 3]);
        let b = Data::function(grid(), vec![3.0, 3.0, 3.0], 1).with_errors(vec![1.0; 3]);
        let p = a.multiply(&b).unwrap();
        assert_eq!(p.values(), &[6.0, 6.0, 6.0]);
        assert_relative_eq!(p.errors().unwrap()[0], 13.0f64.sqrt());
    }

    #[test]
    fn test_divide_threshold_and_errors() {
        let a = Data::function(grid(), vec![4.0, 0.0, 4.0], 1).with_errors(vec![1.0; 3]);
        let b = Data::function(grid(), vec![0.01, 2.0, 2.0], 1).with_errors(vec![1.0; 3]);
        let q = a.divide(&b).unwrap();
        assert_eq!(q.values(), &[0.0, 0.0, 2.0]);
        let errors = q.errors().unwrap();
        assert_eq!(errors[0], 0.0);
        assert_eq!(errors[1], 0.0);
        assert_relative_eq!(errors[2], 2.0 * (0.0625f64 + 0.25).sqrt());
    }

    #[test]
    fn test_incompatible_operand_is_resampled() {
        let a = Data::function(grid(), vec![1.0, 1.0, 1.0], 1);
        let fine = XScale::uniform(0.0, 2.0, 5).unwrap();
        let b = Data::function(fine, vec![0.0, 1.0, 2.0, 3.0, 4.0], 2);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.values(), &[1.0, 3.0, 5.0]);
        assert_eq!(sum.scale().count(), 3);
    }

    #[test]
    fn test_histogram_operand_is_converted() {
        let a = Data::function(XScale::uniform(0.5, 2.5, 3).unwrap(), vec![1.0, 1.0, 1.0], 1);
        let h = Data::histogram(XScale::uniform(0.0, 3.0, 4).unwrap(), vec![2.0, 4.0, 6.0], 2);
        let sum = a.add(&h).unwrap();
        assert_eq!(sum.values(), &[3.0, 5.0, 7.0]);
    }

    #[test]
    fn test_only_add_merges_attributes() {
        let a = Data::function(grid(), vec![1.0; 3], 1)
            .with_attribute(Attribute::float(names::TOTAL_COUNT, 10.0))
            .unwrap();
        let b = Data::function(grid(), vec![1.0; 3], 1)
            .with_attribute(Attribute::float(names::TOTAL_COUNT, 5.0))
            .unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(
            sum.attributes().value(names::TOTAL_COUNT),
            Some(&AttributeValue::Float(15.0))
        );
        let diff = a.subtract(&b).unwrap();
        assert_eq!(
            diff.attributes().value(names::TOTAL_COUNT),
            Some(&AttributeValue::Float(10.0))
        );
    }

    #[test]
    fn test_scalar_add() {
        let a = Data::function(grid(), vec![1.0, 2.0, 3.0], 1).with_errors(vec![3.0; 3]);
        let s = a.add_scalar(1.0, 4.0).unwrap();
        assert_eq!(s.values(), &[2.0, 3.0, 4.0]);
        for e in s.errors().unwrap() {
            assert_relative_eq!(*e, 5.0);
        }

        let s = a.subtract_scalar(1.0, 0.0).unwrap();
        assert_eq!(s.values(), &[0.0, 1.0, 2.0]);
        assert_eq!(s.errors(), Some(&[3.0, 3.0, 3.0][..]));
    }

    #[test]
    fn test_scalar_multiply() {
        let a = Data::function(grid(), vec![1.0, 2.0, 3.0], 1).with_errors(vec![1.0; 3]);
        let s = a.multiply_scalar(-2.0, 0.0).unwrap();
        assert_eq!(s.values(), &[-2.0, -4.0, -6.0]);
        assert_eq!(s.errors(), Some(&[2.0, 2.0, 2.0][..]));

        let s = a.multiply_scalar(3.0, 1.0).unwrap();
        assert_relative_eq!(s.errors().unwrap()[1], 13.0f64.sqrt());
    }

    #[test]
    fn test_scalar_divide() {
        let a = Data::function(grid(), vec![0.0, 2.0, 4.0], 1).with_errors(vec![1.0; 3]);
        assert_eq!(a.divide_scalar(0.0, 1.0), Err(Error::DivisionByZero));

        let s = a.divide_scalar(-2.0, 0.0).unwrap();
        assert_eq!(s.values(), &[0.0, -1.0, -2.0]);
        assert_eq!(s.errors(), Some(&[0.5, 0.5, 0.5][..]));

        let s = a.divide_scalar(2.0, 1.0).unwrap();
        let errors = s.errors().unwrap();
        assert_eq!(errors[0], 0.0);
        assert_relative_eq!(errors[1], 1.0 * (0.25f64 + 0.25).sqrt());
    }
}

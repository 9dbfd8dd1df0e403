use crate::error::VectorError;
use std::ops::Index;

/// Dense, fixed-length vector of `f64` used for TF and TF-IDF representations.
///
/// Binary operations require both operands to have the same length and fail
/// with [`VectorError::DimensionMismatch`] otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    data: Box<[f64]>,
}

impl Vector {
    pub fn zeros(len: usize) -> Self {
        Self { data: vec![0.0; len].into_boxed_slice() }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data: data.into_boxed_slice() }
    }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn get(&self, i: usize) -> Option<f64> { self.data.get(i).copied() }

    /// Panics if `i` is out of bounds, like slice indexing.
    pub fn set(&mut self, i: usize, value: f64) { self.data[i] = value; }

    pub fn as_slice(&self) -> &[f64] { &self.data }

    pub fn add(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn sub(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    pub fn mul_elementwise(&self, other: &Vector) -> Result<Vector, VectorError> {
        self.zip_with(other, "multiply", |a, b| a * b)
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, VectorError> {
        self.check_len(other, "take the dot product of")?;
        Ok(self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).sum())
    }

    pub fn add_scalar(&self, k: f64) -> Vector { self.map(|x| x + k) }

    pub fn sub_scalar(&self, k: f64) -> Vector { self.map(|x| x - k) }

    pub fn scale(&self, k: f64) -> Vector { self.map(|x| x * k) }

    pub fn div(&self, k: f64) -> Vector { self.map(|x| x / k) }

    pub fn negate(&self) -> Vector { self.map(|x| -x) }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Cosine of the angle between `self` and `other`.
    ///
    /// If either vector has zero magnitude the similarity is 0: a document or
    /// query without any vocabulary term matches nothing.
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f64, VectorError> {
        let dot = self.dot(other)?;
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return Ok(0.0);
        }
        Ok((dot / denom).clamp(-1.0, 1.0))
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Vector {
        Vector { data: self.data.iter().map(|&x| f(x)).collect() }
    }

    fn zip_with(&self, other: &Vector, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Vector, VectorError> {
        self.check_len(other, op)?;
        Ok(Vector { data: self.data.iter().zip(other.data.iter()).map(|(&a, &b)| f(a, b)).collect() })
    }

    fn check_len(&self, other: &Vector, op: &'static str) -> Result<(), VectorError> {
        if self.len() != other.len() {
            return Err(VectorError::DimensionMismatch { op, left: self.len(), right: other.len() });
        }
        Ok(())
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 { &self.data[i] }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self { Self::from_vec(data) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(xs: &[f64]) -> Vector { Vector::from_vec(xs.to_vec()) }

    #[test]
    fn zeros_by_default() {
        let z = Vector::zeros(3);
        assert_eq!(z.as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(z.magnitude(), 0.0);
    }

    #[test]
    fn elementwise_ops() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);
        assert_eq!(a.add(&b).unwrap().as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!(b.sub(&a).unwrap().as_slice(), &[3.0, 3.0, 3.0]);
        assert_eq!(a.mul_elementwise(&b).unwrap().as_slice(), &[4.0, 10.0, 18.0]);
        assert_eq!(a.dot(&b).unwrap(), 32.0);
    }

    #[test]
    fn scalar_ops() {
        let a = v(&[2.0, -4.0]);
        assert_eq!(a.scale(0.5).as_slice(), &[1.0, -2.0]);
        assert_eq!(a.div(2.0).as_slice(), &[1.0, -2.0]);
        assert_eq!(a.add_scalar(1.0).as_slice(), &[3.0, -3.0]);
        assert_eq!(a.sub_scalar(1.0).as_slice(), &[1.0, -5.0]);
        assert_eq!(a.negate().as_slice(), &[-2.0, 4.0]);
    }

    #[test]
    fn magnitude_is_euclidean() {
        assert_eq!(v(&[3.0, 4.0]).magnitude(), 5.0);
    }

    #[test]
    fn mismatched_sizes_fail() {
        let a = v(&[1.0, 2.0]);
        let b = v(&[1.0, 2.0, 3.0]);
        assert!(matches!(a.add(&b), Err(VectorError::DimensionMismatch { left: 2, right: 3, .. })));
        assert!(matches!(a.sub(&b), Err(VectorError::DimensionMismatch { .. })));
        assert!(matches!(a.dot(&b), Err(VectorError::DimensionMismatch { .. })));
        assert!(matches!(a.cosine_similarity(&b), Err(VectorError::DimensionMismatch { .. })));
    }

    #[test]
    fn cosine_is_symmetric_and_self_maximal() {
        let a = v(&[1.0, 0.5, 0.0, 2.0]);
        let b = v(&[0.3, 0.0, 1.2, 0.7]);
        assert_eq!(a.cosine_similarity(&b).unwrap(), b.cosine_similarity(&a).unwrap());
        assert!((a.cosine_similarity(&a).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_with_zero_vector_is_zero() {
        let a = v(&[1.0, 2.0]);
        let z = Vector::zeros(2);
        assert_eq!(a.cosine_similarity(&z).unwrap(), 0.0);
        assert_eq!(z.cosine_similarity(&z).unwrap(), 0.0);
    }
}

//! Regularly sampled 3D scalar fields
use crate::Error;

/// Uniform sampling along a single axis
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sampling {
    /// Number of samples
    pub count: usize,
    /// Distance between adjacent samples
    pub delta: f64,
    /// Coordinate of the first sample
    pub first: f64,
}

impl Sampling {
    /// Builds a new sampling
    pub fn new(count: usize, delta: f64, first: f64) -> Self {
        Self {
            count,
            delta,
            first,
        }
    }

    /// Builds a sampling with unit spacing, starting at zero
    pub fn unit(count: usize) -> Self {
        Self::new(count, 1.0, 0.0)
    }

    /// Returns the coordinate at a (possibly fractional) sample index
    pub fn value(&self, i: f64) -> f64 {
        self.first + self.delta * i
    }

    /// Returns the coordinate of the last sample
    pub fn last(&self) -> f64 {
        self.value(self.count.saturating_sub(1) as f64)
    }
}

/// A regularly sampled 3D array of values
///
/// Samples are stored in a flat array indexed as `[i3][i2][i1]`, i.e. axis 1
/// varies fastest.  The field is immutable once built; its constructors check
/// that the sample array matches the sampling grid, so that indexing within
/// [`dims`](Self::dims) never goes out of bounds.
#[derive(Clone, Debug)]
pub struct ScalarField {
    samples: Vec<f32>,
    sampling: [Sampling; 3],
}

impl ScalarField {
    /// Builds a new field from samples ordered `[i3][i2][i1]`
    pub fn new(
        sampling: [Sampling; 3],
        samples: Vec<f32>,
    ) -> Result<Self, Error> {
        let expected = Self::check(&sampling)?;
        if samples.len() != expected {
            return Err(Error::BadSampleCount(samples.len(), expected));
        }
        Ok(Self { samples, sampling })
    }

    /// Builds a new field by evaluating `f(i1, i2, i3)` at every sample
    pub fn from_fn<F: FnMut(usize, usize, usize) -> f32>(
        sampling: [Sampling; 3],
        mut f: F,
    ) -> Result<Self, Error> {
        let size = Self::check(&sampling)?;
        let mut samples = Vec::with_capacity(size);
        for i3 in 0..sampling[2].count {
            for i2 in 0..sampling[1].count {
                for i1 in 0..sampling[0].count {
                    samples.push(f(i1, i2, i3));
                }
            }
        }
        Ok(Self { samples, sampling })
    }

    /// Validates the sampling, returning the total number of samples
    fn check(sampling: &[Sampling; 3]) -> Result<usize, Error> {
        for (axis, s) in sampling.iter().enumerate() {
            if !(s.delta.is_finite() && s.delta > 0.0) {
                return Err(Error::BadSpacing(axis, s.delta));
            }
            if !s.first.is_finite() {
                return Err(Error::BadOrigin(axis, s.first));
            }
        }
        sampling
            .iter()
            .try_fold(1usize, |acc, s| acc.checked_mul(s.count))
            .ok_or(Error::GridTooLarge)
    }

    /// Returns the sampling along each axis
    pub fn sampling(&self) -> &[Sampling; 3] {
        &self.sampling
    }

    /// Returns the number of samples along each axis, as `[n1, n2, n3]`
    pub fn dims(&self) -> [usize; 3] {
        self.sampling.map(|s| s.count)
    }

    /// Returns the number of cubes along each axis
    ///
    /// This is one less than the number of samples (or zero, if an axis has
    /// no samples).
    pub fn cube_dims(&self) -> [usize; 3] {
        self.sampling.map(|s| s.count.saturating_sub(1))
    }

    /// Returns the raw sample array, ordered `[i3][i2][i1]`
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Converts from a sample position to an index in the sample array
    fn offset(&self, i: [usize; 3]) -> usize {
        let [n1, n2, n3] = self.dims();
        debug_assert!(i[0] < n1 && i[1] < n2 && i[2] < n3);
        i[0] + n1 * (i[1] + n2 * i[2])
    }

    /// Looks up the sample at `[i1, i2, i3]`
    ///
    /// # Panics
    /// If the index is outside of [`dims`](Self::dims)
    pub fn get(&self, i: [usize; 3]) -> f32 {
        self.samples[self.offset(i)]
    }

    /// Returns a copy of this field with axes 1 and 3 exchanged
    pub fn swap13(&self) -> Self {
        let [s1, s2, s3] = self.sampling;
        let mut samples = Vec::with_capacity(self.samples.len());
        for g3 in 0..s1.count {
            for g2 in 0..s2.count {
                for g1 in 0..s3.count {
                    samples.push(self.get([g3, g2, g1]));
                }
            }
        }
        Self {
            samples,
            sampling: [s3, s2, s1],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sample_count() {
        let s = [Sampling::unit(2), Sampling::unit(3), Sampling::unit(4)];
        assert!(ScalarField::new(s, vec![0.0; 24]).is_ok());
        assert!(matches!(
            ScalarField::new(s, vec![0.0; 23]),
            Err(Error::BadSampleCount(23, 24))
        ));
    }

    #[test]
    fn test_bad_sampling() {
        let mut s = [Sampling::unit(2); 3];
        s[1].delta = 0.0;
        assert!(matches!(
            ScalarField::new(s, vec![0.0; 8]),
            Err(Error::BadSpacing(1, _))
        ));
        s[1].delta = f64::NAN;
        assert!(ScalarField::new(s, vec![0.0; 8]).is_err());

        let mut s = [Sampling::unit(2); 3];
        s[2].first = f64::INFINITY;
        assert!(matches!(
            ScalarField::new(s, vec![0.0; 8]),
            Err(Error::BadOrigin(2, _))
        ));

        let s = [Sampling::unit(usize::MAX / 2); 3];
        assert!(matches!(
            ScalarField::from_fn(s, |_, _, _| 0.0),
            Err(Error::GridTooLarge)
        ));
    }

    #[test]
    fn test_indexing() {
        let s = [Sampling::unit(2), Sampling::unit(3), Sampling::unit(4)];
        let f = ScalarField::from_fn(s, |i1, i2, i3| {
            (i1 + 10 * i2 + 100 * i3) as f32
        })
        .unwrap();
        assert_eq!(f.dims(), [2, 3, 4]);
        assert_eq!(f.cube_dims(), [1, 2, 3]);
        assert_eq!(f.get([1, 2, 3]), 321.0);
        assert_eq!(f.get([0, 1, 0]), 10.0);
        assert_eq!(f.samples()[1], 1.0);
        assert_eq!(f.samples()[2], 10.0);
    }

    #[test]
    fn test_swap13() {
        let s = [
            Sampling::new(2, 0.5, 1.0),
            Sampling::unit(3),
            Sampling::new(4, 2.0, -1.0),
        ];
        let f = ScalarField::from_fn(s, |i1, i2, i3| {
            (i1 + 10 * i2 + 100 * i3) as f32
        })
        .unwrap();
        let g = f.swap13();
        assert_eq!(g.dims(), [4, 3, 2]);
        assert_eq!(g.sampling()[0], s[2]);
        assert_eq!(g.sampling()[2], s[0]);
        for i3 in 0..4 {
            for i2 in 0..3 {
                for i1 in 0..2 {
                    assert_eq!(f.get([i1, i2, i3]), g.get([i3, i2, i1]));
                }
            }
        }
    }

    #[test]
    fn test_sampling() {
        let s = Sampling::new(5, 0.25, -1.0);
        assert_eq!(s.value(0.0), -1.0);
        assert_eq!(s.value(2.0), -0.5);
        assert_eq!(s.last(), 0.0);
    }
}

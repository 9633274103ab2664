//! Gradient-based vertex normals
use super::types::Axis;
use crate::field::ScalarField;

/// Finite-difference derivative of the field at sample `j` along `axis`
///
/// This is a central difference in the interior of the grid and a one-sided
/// difference on its boundary.  The result is in units of samples, i.e. it is
/// not yet divided by the sample spacing.
fn derivative(field: &ScalarField, j: [usize; 3], axis: usize) -> f64 {
    let n = field.dims()[axis];
    let at = |offset: isize| {
        let mut p = j;
        p[axis] = j[axis].wrapping_add_signed(offset);
        f64::from(field.get(p))
    };
    if n < 2 {
        0.0
    } else if j[axis] == 0 {
        at(1) - at(0)
    } else if j[axis] == n - 1 {
        at(0) - at(-1)
    } else {
        (at(1) - at(-1)) * 0.5
    }
}

/// Estimates the unit normal at a crossing on the edge from `j` along `axis`
///
/// The gradient is estimated at both of the edge's samples, then blended
/// linearly by `dx` (the crossing's fractional position along the edge) and
/// scaled by the per-axis sample spacing.
///
/// If the blended gradient is zero, the result is `NaN`.
pub fn estimate(
    field: &ScalarField,
    j: [usize; 3],
    axis: Axis,
    dx: f64,
) -> nalgebra::Vector3<f32> {
    let mut k = j;
    k[axis.index()] += 1;

    let sampling = field.sampling();
    let g = nalgebra::Vector3::from_fn(|i, _| {
        let u = derivative(field, j, i);
        let v = derivative(field, k, i);
        (u + (v - u) * dx) / sampling[i].delta
    });
    let scale = 1.0 / g.norm();
    (g * scale).cast::<f32>()
}

//! Closed-form volumes and monomial integrals of the unit simplices.
//!
//! Over the unit `m`-simplex
//!
//! ```text
//! ∫ ∏ x_i^{e_i} dx = ∏ e_i! / (Σ e_i + m)!
//! ```
//!
//! The ratio is accumulated incrementally (`k += 1; I *= j / k` for every
//! unit of every exponent, then `m` more divisions) so no factorial is ever
//! formed. These values exist to check Monte-Carlo estimates; the samplers
//! do not use them.

/// Monomial integral over the unit simplex of dimension `exponents.len()`.
fn simplex_unit_monomial_integral(exponents: &[u32]) -> f64 {
    let mut k = 0.0;
    let mut integral = 1.0;
    for &e in exponents {
        for j in 1..=e {
            k += 1.0;
            integral *= f64::from(j) / k;
        }
    }
    for _ in exponents {
        k += 1.0;
        integral /= k;
    }
    integral
}

/// Volume of the unit tetrahedron, `1/6`.
#[inline]
pub fn tetrahedron_unit_volume() -> f64 {
    1.0 / 6.0
}

/// Integral of `x^e0 y^e1 z^e2` over the unit tetrahedron.
///
/// # Examples
///
/// ```rust
/// use sampler_domains::exact::{tetrahedron_unit_monomial_integral, tetrahedron_unit_volume};
///
/// assert_eq!(tetrahedron_unit_monomial_integral([0, 0, 0]), tetrahedron_unit_volume());
/// // ∫ x = 1! / 4! = 1/24
/// assert!((tetrahedron_unit_monomial_integral([1, 0, 0]) - 1.0 / 24.0).abs() < 1e-15);
/// ```
pub fn tetrahedron_unit_monomial_integral(exponents: [u32; 3]) -> f64 {
    simplex_unit_monomial_integral(&exponents)
}

/// Area of the unit triangle, `1/2`.
#[inline]
pub fn triangle_unit_area() -> f64 {
    0.5
}

/// Integral of `x^e0 y^e1` over the unit triangle.
///
/// # Examples
///
/// ```rust
/// use sampler_domains::exact::triangle_unit_monomial_integral;
///
/// // ∫ x y^3 = 1! 3! / 6! = 1/120
/// assert!((triangle_unit_monomial_integral([1, 3]) - 1.0 / 120.0).abs() < 1e-15);
/// ```
pub fn triangle_unit_monomial_integral(exponents: [u32; 2]) -> f64 {
    simplex_unit_monomial_integral(&exponents)
}

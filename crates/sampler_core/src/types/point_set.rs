//! Shaped numeric buffer for sample batches and uniform matrices.
//!
//! # Memory Layout
//!
//! Values are stored column-major: `data[col * rows + row]`. For a sample
//! batch `rows` is the spatial dimension and `cols` the number of samples,
//! so each column is one point and `point(j)` is a contiguous slice.

#[cfg(feature = "serde")]
use super::error::SamplingError;

/// Column-major `rows × cols` matrix of `f64`.
///
/// # Examples
///
/// ```rust
/// use sampler_core::types::PointSet;
///
/// let points = PointSet::from_points(&[[0.25, 0.5], [0.75, 0.125]]);
/// assert_eq!(points.dim(), 2);
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.point(1), &[0.75, 0.125]);
/// assert_eq!(points.get(1, 0), 0.5);
/// ```
///
/// With the `serde` feature, deserialisation goes through
/// [`from_column_major`](Self::from_column_major), so a payload whose `data`
/// length disagrees with `rows × cols` is rejected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPointSet")
)]
pub struct PointSet {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Unchecked wire form of [`PointSet`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPointSet {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPointSet> for PointSet {
    type Error = SamplingError;

    fn try_from(raw: RawPointSet) -> Result<Self, Self::Error> {
        let expected = raw.rows.saturating_mul(raw.cols);
        let got = raw.data.len();
        PointSet::from_column_major(raw.rows, raw.cols, raw.data)
            .ok_or(SamplingError::DimensionMismatch { expected, got })
    }
}

impl PointSet {
    /// Creates a zero-filled `rows × cols` buffer.
    #[inline]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wraps a column-major buffer.
    ///
    /// Returns `None` if `data.len() != rows * cols`.
    pub fn from_column_major(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Builds a batch from fixed-size points, one column per point.
    pub fn from_points<const D: usize>(points: &[[f64; D]]) -> Self {
        let data = points.iter().flat_map(|p| p.iter().copied()).collect();
        Self {
            rows: D,
            cols: points.len(),
            data,
        }
    }

    /// Number of rows (spatial dimension of a sample batch).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (sample count of a sample batch).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Spatial dimension of the batch. Alias of [`rows`](Self::rows).
    #[inline]
    pub fn dim(&self) -> usize {
        self.rows
    }

    /// Number of samples in the batch. Alias of [`cols`](Self::cols).
    #[inline]
    pub fn len(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the batch holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cols == 0
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index out of range");
        self.data[col * self.rows + row]
    }

    /// The `j`-th sample as a slice of length `dim()`.
    #[inline]
    pub fn point(&self, j: usize) -> &[f64] {
        &self.data[j * self.rows..(j + 1) * self.rows]
    }

    /// Iterates over samples (columns).
    ///
    /// Always yields [`len`](Self::len) slices; for a zero-row batch each
    /// slice is empty.
    pub fn iter_points(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.cols).map(move |j| self.point(j))
    }

    /// Iterates over the `i`-th coordinate of every sample.
    pub fn coordinate(&self, i: usize) -> impl Iterator<Item = f64> + '_ {
        assert!(i < self.rows, "coordinate index out of range");
        self.data.iter().skip(i).step_by(self.rows).copied()
    }

    /// Underlying column-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the batch, returning the column-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[col * self.rows + row] = value;
    }

    /// Mutable access to the `j`-th sample, for crates building batches.
    #[inline]
    pub fn point_mut(&mut self, j: usize) -> &mut [f64] {
        &mut self.data[j * self.rows..(j + 1) * self.rows]
    }
}

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Range, Sub, SubAssign};

use auto_impl_ops::auto_ops;
use itertools::Itertools;
use num_traits::{One, Zero};

use crate::base::{MatError, MatType};

// Row-major storage. Each row is an independently owned buffer, so
// `swap_rows` exchanges two slots without touching elements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat {
    rows: Vec<Vec<f64>>
}

impl MatType for Mat {
    fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }
}

impl Mat {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        Self { rows }
    }

    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = f64> {
        let chunks = data.into_iter().chunks(shape.1);
        let rows: Vec<Vec<f64>> = chunks.into_iter().map(|c| c.collect()).collect();

        debug_assert_eq!(rows.len(), shape.0);

        Self::from_rows(rows)
    }

    pub fn zero(shape: (usize, usize)) -> Self {
        let (m, n) = shape;
        Self { rows: vec![vec![0.0; n]; m] }
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|e| e.2.is_zero())
    }

    pub fn id(size: usize) -> Self {
        let mut mat = Self::zero((size, size));
        for i in 0..size {
            mat[(i, i)] = 1.0;
        }
        mat
    }

    pub fn is_id(&self) -> bool {
        self.is_square() && self.iter().all(|(i, j, a)|
            i == j && a.is_one() ||
            i != j && a.is_zero()
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &f64)> {
        self.rows.iter().enumerate().flat_map(|(i, row)|
            row.iter().enumerate().map(move |(j, a)| (i, j, a))
        )
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn submat(&self, rows: Range<usize>, cols: Range<usize>) -> Mat {
        let (i0, i1) = (rows.start, rows.end);
        let (j0, j1) = (cols.start, cols.end);

        assert!(i0 <= i1 && i1 <= self.nrows());
        assert!(j0 <= j1 && j1 <= self.ncols());

        let rows = self.rows[i0..i1].iter().map(|row|
            row[j0..j1].to_vec()
        ).collect();

        Mat { rows }
    }

    pub fn submat_rows(&self, rows: Range<usize>) -> Mat {
        let n = self.ncols();
        self.submat(rows, 0..n)
    }

    pub fn submat_cols(&self, cols: Range<usize>) -> Mat {
        let m = self.nrows();
        self.submat(0..m, cols)
    }
}

// elementary row operations, used by the elimination in `gauss`.
impl Mat {
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    pub fn mul_row(&mut self, i: usize, r: f64) {
        for a in self.rows[i].iter_mut() {
            *a *= r;
        }
    }

    pub fn div_row(&mut self, i: usize, r: f64) {
        for a in self.rows[i].iter_mut() {
            *a /= r;
        }
    }

    // row(j) += row(i) * r
    pub fn add_row_to(&mut self, i: usize, j: usize, r: f64) {
        assert_ne!(i, j);

        let src = std::mem::take(&mut self.rows[i]);
        for (a, b) in self.rows[j].iter_mut().zip(src.iter()) {
            *a += b * r;
        }
        self.rows[i] = src;
    }
}

impl Mat {
    pub fn multiply(&self, rhs: &Mat) -> Result<Mat, MatError> {
        let (_, k) = self.check_shape()?;
        let (l, _) = rhs.check_shape()?;

        if k != l {
            return Err(MatError::DimensionMismatch)
        }

        #[cfg(feature = "multithread")]
        if crate::config::is_multithread_enabled() {
            return Ok(self.mul_rows_m(rhs));
        }

        Ok(self.mul_rows_s(rhs))
    }

    fn mul_rows_s(&self, rhs: &Mat) -> Mat {
        let rows = (0..self.nrows()).map(|i|
            self.mul_row_of(rhs, i)
        ).collect();
        Mat { rows }
    }

    #[cfg(feature = "multithread")]
    fn mul_rows_m(&self, rhs: &Mat) -> Mat {
        use rayon::prelude::*;
        let rows = (0..self.nrows()).into_par_iter().map(|i|
            self.mul_row_of(rhs, i)
        ).collect();
        Mat { rows }
    }

    fn mul_row_of(&self, rhs: &Mat, i: usize) -> Vec<f64> {
        (0..rhs.ncols()).map(|j|
            (0..self.ncols()).map(|k| self[(i, k)] * rhs[(k, j)]).sum()
        ).collect()
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.rows[i][j]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.rows[i][j]
    }
}

impl fmt::Display for Mat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

impl Neg for &Mat {
    type Output = Mat;
    fn neg(self) -> Self::Output {
        let rows = self.rows.iter().map(|row|
            row.iter().map(|a| -a).collect()
        ).collect();
        Mat { rows }
    }
}

impl Neg for Mat {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

#[auto_ops]
impl AddAssign<&Mat> for Mat {
    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape());
        for (row, rhs_row) in self.rows.iter_mut().zip(rhs.rows.iter()) {
            for (a, b) in row.iter_mut().zip(rhs_row.iter()) {
                *a += b;
            }
        }
    }
}

#[auto_ops]
impl SubAssign<&Mat> for Mat {
    fn sub_assign(&mut self, rhs: &Self) {
        assert_eq!(self.shape(), rhs.shape());
        for (row, rhs_row) in self.rows.iter_mut().zip(rhs.rows.iter()) {
            for (a, b) in row.iter_mut().zip(rhs_row.iter()) {
                *a -= b;
            }
        }
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b Mat> for &'a Mat {
    type Output = Mat;
    fn mul(self, rhs: &'b Mat) -> Self::Output {
        match self.multiply(rhs) {
            Ok(res) => res,
            Err(e)  => panic!("{e}")
        }
    }
}

#[cfg(test)]
impl Mat {
    pub fn rand(shape: (usize, usize), range: Range<f64>) -> Self {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        let (m, n) = shape;

        Self::from_data(shape, (0..m * n).map(|_|
            rng.gen_range(range.clone())
        ))
    }
}

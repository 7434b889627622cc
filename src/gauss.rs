use log::{debug, trace};
use num_traits::Zero;

use crate::base::{MatError, MatType};
use crate::mat::Mat;

// Gauss-Jordan inversion on the augmented matrix [a | id]. The pivot for
// column i is the first row at or below i with a nonzero entry; there is no
// magnitude-based pivoting.
pub fn inv(a: &Mat) -> Result<Mat, MatError> {
    let aug = augment(a)?;

    debug!("start gauss-jordan: {:?}.", a.shape());
    trace!("{}", aug);

    let mut calc = GaussJordan::new(aug);
    calc.process()?;

    debug!("gauss-jordan done.");

    Ok(calc.extract())
}

// Solves a * x = b as inv(a) * b.
pub fn solve(a: &Mat, b: &Mat) -> Result<Mat, MatError> {
    let ainv = inv(a)?;
    ainv.multiply(b)
}

fn augment(a: &Mat) -> Result<Mat, MatError> {
    let n = a.check_square()?;

    let rows = (0..n).map(|i|
        a.row(i).iter().copied().chain(
            (0..n).map(|k| if k == i { 1.0 } else { 0.0 })
        ).collect()
    ).collect();

    Ok(Mat::from_rows(rows))
}

struct GaussJordan {
    target: Mat,
    size: usize
}

impl GaussJordan {
    fn new(target: Mat) -> Self {
        let size = target.nrows();
        Self { target, size }
    }

    fn process(&mut self) -> Result<(), MatError> {
        for i in 0..self.size {
            self.swap_for_pivot(i)?;
            self.normalize(i)?;
        }

        for i in (0..self.size - 1).rev() {
            self.eliminate_upper(i);
        }

        Ok(())
    }

    fn select_pivot(&self, i: usize) -> Option<usize> {
        (i..self.size).find(|&j| !self.target[(j, i)].is_zero())
    }

    fn swap_for_pivot(&mut self, i: usize) -> Result<(), MatError> {
        let Some(p) = self.select_pivot(i) else {
            return Err(MatError::SingularMatrix)
        };

        if p > i {
            self.target.swap_rows(i, p);
            trace!("swap-rows: ({i}, {p})\n{}", self.target);
        }

        Ok(())
    }

    // clears the columns before the diagonal using the already normalized
    // rows above, then scales the pivot to exactly 1.
    fn normalize(&mut self, i: usize) -> Result<(), MatError> {
        for j in 0..i {
            let multiple = self.target[(i, j)];
            if multiple.is_zero() { continue }
            self.target.add_row_to(j, i, -multiple);
        }

        let divisor = self.target[(i, i)];
        if divisor.is_zero() {
            // the raw pivot was nonzero but the reduction annihilated it
            return Err(MatError::SingularMatrix)
        }
        self.target.div_row(i, divisor);

        trace!("normalize: {i} (pivot {divisor})\n{}", self.target);
        Ok(())
    }

    // clears the entries right of the diagonal in row i using the fully
    // reduced rows below it.
    fn eliminate_upper(&mut self, i: usize) {
        for j in i + 1..self.size {
            let multiple = self.target[(i, j)];
            if multiple.is_zero() { continue }
            self.target.add_row_to(j, i, -multiple);
        }

        trace!("eliminate-upper: {i}\n{}", self.target);
    }

    fn extract(self) -> Mat {
        let n = self.size;
        self.target.submat_cols(n..2 * n)
    }
}

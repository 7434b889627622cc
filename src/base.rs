use derive_more::Display;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum MatError {
    #[display("matrix has no rows")]
    EmptyMatrix,
    #[display("incompatible dimensions")]
    DimensionMismatch,
    #[display("no nonzero pivot available")]
    SingularMatrix,
}

impl std::error::Error for MatError {}

pub trait MatType {
    fn shape(&self) -> (usize, usize);

    fn nrows(&self) -> usize { self.shape().0 }
    fn ncols(&self) -> usize { self.shape().1 }

    fn is_square(&self) -> bool {
        let (m, n) = self.shape();
        m == n
    }

    fn check_shape(&self) -> Result<(usize, usize), MatError> {
        let (m, n) = self.shape();
        if m == 0 || n == 0 {
            return Err(MatError::EmptyMatrix)
        }
        Ok((m, n))
    }

    fn check_square(&self) -> Result<usize, MatError> {
        let (m, n) = self.check_shape()?;
        if m != n {
            return Err(MatError::DimensionMismatch)
        }
        Ok(m)
    }
}

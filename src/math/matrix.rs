use super::angle::Rad;
use super::vector::Vector;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use std::ops;

/// A column based matrix type that is generic over its type and size.
/// Where `M` is the number of columns and `N` the number of rows.
///
/// Element `(col, row)` lives at index `N * col + row` of [`Matrix::as_slice`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<T, const M: usize, const N: usize = M> {
    cols: [Vector<T, N>; M],
}

impl<T: Default + Copy, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Creates a matrix with every element set to the default value.
    pub fn zero() -> Self {
        Self { cols: [Vector::<T, N>::default(); M] }
    }

    /// Creates a matrix from `M * N` values listed column after column.
    ///
    /// ```
    /// use engine3d::math::Matrix2;
    ///
    /// let m = Matrix2::from_flat([1., 2., 3., 4.]);
    /// assert_eq!(m[(1, 0)], 3.);
    /// ```
    ///
    /// ```compile_fail
    /// use engine3d::math::Matrix2;
    ///
    /// let _ = Matrix2::from_flat([1., 2., 3.]);
    /// ```
    pub fn from_flat<const L: usize>(values: [T; L]) -> Self {
        const { assert!(L == M * N, "bad number of values") };

        let mut out = Self::zero();
        for (i, value) in values.into_iter().enumerate() {
            out.cols[i / N][i % N] = value;
        }
        out
    }
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// All elements in column major order, borrowed from the matrix's own storage.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY
        // `Vector<T, N>` is `repr(C)` around a single `[T; N]`, so `[Vector<T, N>; M]`
        // has the exact layout of `M * N` contiguous `T`.
        unsafe { std::slice::from_raw_parts(self.cols.as_ptr().cast::<T>(), M * N) }
    }

    /// Raw pointer to the column major data, e.g. to hand to a graphics API.
    pub fn as_ptr(&self) -> *const T {
        self.cols.as_ptr().cast::<T>()
    }
}

impl<T: Default + Copy, const M: usize> Matrix<T, M, M> {
    /// Creates a diagonal matrix with `value` on its main diagonal and zeroes elsewhere.
    pub fn diag(value: T) -> Self {
        let mut out = Self::zero();
        for i in 0..M {
            out.cols[i][i] = value;
        }
        out
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) {
        for i in 1..M {
            for j in 0..i {
                let tmp = self[i][j];
                self[i][j] = self[j][i];
                self[j][i] = tmp;
            }
        }
    }

    /// Returns a transposed matrix.
    pub fn transposed(mut self) -> Self {
        self.transpose();
        self
    }

    /// Returns the matrix without column `col` and row `row`.
    pub fn minor<const P: usize>(&self, col: usize, row: usize) -> Matrix<T, P> {
        const { assert!(P + 1 == M, "bad minor dimension") };

        let mut out = Matrix::zero();
        for (out_col, c) in (0..M).filter(|&c| c != col).enumerate() {
            for (out_row, r) in (0..M).filter(|&r| r != row).enumerate() {
                out[out_col][out_row] = self[c][r];
            }
        }
        out
    }
}

impl<T: Default + Copy + From<bool>, const M: usize> Matrix<T, M, M> {
    /// Creates a unit matrix where the unit is derived from `true`.
    pub fn unit() -> Self {
        Self::diag(true.into())
    }

    /// Copies the upper left corner into a matrix of dimension `P`.
    ///
    /// Growing pads the new rows and columns like the unit matrix, shrinking
    /// drops the trailing rows and columns.
    pub fn resize<const P: usize>(self) -> Matrix<T, P> {
        let mut out = Matrix::unit();
        for i in 0..M.min(P) {
            for j in 0..M.min(P) {
                out[i][j] = self[i][j];
            }
        }
        out
    }
}

impl<T: Default + Copy + From<bool>, const M: usize> Matrix<T, M> {
    /// Creates a translation matrix from a translation vector.
    /// The dimension of the vector must be one less than the dimension of the matrix.
    ///
    /// #Examples
    ///
    /// ```
    /// use engine3d::math::matrix::Matrix;
    ///
    /// let _ = Matrix::<_, 3, 3>::from_translation([1, 2].into());
    /// ```
    ///
    /// ```compile_fail
    /// use engine3d::math::matrix::Matrix;
    ///
    /// let _ = Matrix::<_, 2, 2>::from_translation([1, 2].into());
    /// ```
    pub fn from_translation<const P: usize>(vec: Vector<T, P>) -> Self {
        const { assert!(P + 1 == M, "bad vector dimension") };

        let mut out = Self::unit();
        for i in 0..P {
            out[M - 1][i] = vec[i];
        }
        out
    }

    /// Creates a uniform scaling matrix.
    pub fn from_scale(scale: T) -> Self {
        let mut out = Self::diag(scale);
        out[M - 1][M - 1] = true.into();
        out
    }

    /// Creates a diagonal matrix from a diagonal.
    pub fn from_diag(diag: Vector<T, M>) -> Self {
        let mut out = Self::zero();
        for i in 0..M {
            out[i][i] = diag[i];
        }
        out
    }
}

impl Matrix<f32, 2> {
    pub fn determinant(&self) -> f32 {
        self[0][0] * self[1][1] - self[1][0] * self[0][1]
    }
}

impl Matrix<f32, 3> {
    /// Cofactor expansion along the first element of every column.
    pub fn determinant(&self) -> f32 {
        (0..3).map(|col| self[col][0] * self.cofactor(col, 0)).sum()
    }

    /// The signed determinant of the minor at `(col, row)`.
    pub fn cofactor(&self, col: usize, row: usize) -> f32 {
        let det = self.minor::<2>(col, row).determinant();
        if (col + row) % 2 == 0 { det } else { -det }
    }
}

impl Matrix<f32, 4> {
    /// Cofactor expansion along the first element of every column.
    pub fn determinant(&self) -> f32 {
        (0..4).map(|col| self[col][0] * self.cofactor(col, 0)).sum()
    }

    /// The signed determinant of the minor at `(col, row)`.
    pub fn cofactor(&self, col: usize, row: usize) -> f32 {
        let det = self.minor::<3>(col, row).determinant();
        if (col + row) % 2 == 0 { det } else { -det }
    }

    /// Creates a view matrix for an eye at `eye` looking at `at`, using `up` for orientation.
    ///
    /// The rows of the upper 3x3 block hold the eye's basis with the z axis pointing
    /// from `eye` to `at`.
    pub fn look_at(eye: Vector<f32, 3>, at: Vector<f32, 3>, up: Vector<f32, 3>) -> Self {
        let z = (at - eye).normalized();
        let x = up.cross(z).normalized();
        let y = z.cross(x);
        Self::from([
            [x[0], y[0], z[0], 0.],
            [x[1], y[1], z[1], 0.],
            [x[2], y[2], z[2], 0.],
            [-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.],
        ])
    }

    /// Creates a rotation matrix around `x` axis.
    pub fn from_angle_x<A: Into<Rad<f32>>>(angle: A) -> Self {
        let (s, c) = angle.into().0.sin_cos();
        Self::from([
            [1., 0., 0., 0.],
            [0.,  c,  s, 0.],
            [0., -s,  c, 0.],
            [0., 0., 0., 1.],
        ])
    }

    /// Creates a rotation matrix around `y` axis.
    pub fn from_angle_y<A: Into<Rad<f32>>>(angle: A) -> Self {
        let (s, c) = angle.into().0.sin_cos();
        Self::from([
            [ c, 0., -s, 0.],
            [0., 1., 0., 0.],
            [ s, 0.,  c, 0.],
            [0., 0., 0., 1.],
        ])
    }

    /// Creates a rotation matrix around `z` axis.
    pub fn from_angle_z<A: Into<Rad<f32>>>(angle: A) -> Self {
        let (s, c) = angle.into().0.sin_cos();
        Self::from([
            [ c,  s, 0., 0.],
            [-s,  c, 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ])
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Matrix<f32, 2> {}
    impl Sealed for super::Matrix<f32, 3> {}
    impl Sealed for super::Matrix<f32, 4> {}
}

/// Square matrices that can be inverted, reached through [`crate::math::inverse`].
///
/// Only implemented for the `f32` matrices of dimension 2, 3 and 4.
pub trait Invertible: sealed::Sealed + Sized {
    /// Returns the inverse.
    ///
    /// The matrix must not be singular, otherwise the result is filled with
    /// infinities and NaNs.
    fn inverse(&self) -> Self;

    /// Returns the inverse or `None` if the determinant is zero.
    fn try_inverse(&self) -> Option<Self>;
}

impl Invertible for Matrix<f32, 2> {
    fn inverse(&self) -> Self {
        let adjugate = Self::from([
            [self[1][1], -self[0][1]],
            [-self[1][0], self[0][0]],
        ]);
        (1. / self.determinant()) * adjugate
    }

    fn try_inverse(&self) -> Option<Self> {
        (self.determinant() != 0.).then(|| self.inverse())
    }
}

/// Inverts through the adjugate, the transposed matrix of cofactors.
macro_rules! impl_invertible_by_adjugate {
    ($($dim:literal),+) => {
        $(
            impl Invertible for Matrix<f32, $dim> {
                fn inverse(&self) -> Self {
                    let mut cofactors = Self::zero();
                    for col in 0..$dim {
                        for row in 0..$dim {
                            cofactors[col][row] = self.cofactor(col, row);
                        }
                    }
                    (1. / self.determinant()) * cofactors.transposed()
                }

                fn try_inverse(&self) -> Option<Self> {
                    (self.determinant() != 0.).then(|| self.inverse())
                }
            }
        )+
    };
}

impl_invertible_by_adjugate!(3, 4);

impl<T: ops::AddAssign, const M: usize, const N: usize> ops::Add for Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: ops::AddAssign, const M: usize, const N: usize> ops::AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.cols.iter_mut().zip(rhs.cols) {
            *a += b;
        }
    }
}

impl<T: ops::SubAssign, const M: usize, const N: usize> ops::Sub for Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: ops::SubAssign, const M: usize, const N: usize> ops::SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.cols.iter_mut().zip(rhs.cols) {
            *a -= b;
        }
    }
}

impl<T, const M: usize, const N: usize, const P: usize> ops::Mul<Matrix<T, M, N>> for Matrix<T, N, P>
where
    T: Default + Copy + ops::AddAssign + ops::Mul<Output = T>,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, M, N>) -> Self::Output {
        let mut out = Self::Output::zero();
        for i in 0..M {
            for j in 0..P {
                for k in 0..N {
                    out.cols[i][j] += self.cols[k][j] * rhs.cols[i][k];
                }
            }
        }
        out
    }
}

impl<T, const M: usize> ops::MulAssign for Matrix<T, M, M>
where
    T: Default + Copy + ops::AddAssign + ops::Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T, const M: usize, const N: usize> ops::Mul<Vector<T, M>> for Matrix<T, M, N>
where
    T: Default + Copy + ops::AddAssign + ops::Mul<Output = T>,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, M>) -> Self::Output {
        let mut out = Self::Output::default();
        for i in 0..N {
            for k in 0..M {
                out[i] += self.cols[k][i] * rhs[k];
            }
        }
        out
    }
}

impl<T: Copy + ops::MulAssign, const M: usize, const N: usize> ops::Mul<T> for Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Copy + ops::MulAssign, const M: usize, const N: usize> ops::MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, rhs: T) {
        for col in self.cols.iter_mut() {
            *col *= rhs;
        }
    }
}

impl<const M: usize, const N: usize> ops::Mul<Matrix<f32, M, N>> for f32 {
    type Output = Matrix<f32, M, N>;

    fn mul(self, rhs: Matrix<f32, M, N>) -> Self::Output {
        rhs * self
    }
}

impl<T, const M: usize, const N: usize> From<Matrix<T, M, N>> for [Vector<T, N>; M] {
    fn from(val: Matrix<T, M, N>) -> Self {
        val.cols
    }
}

impl<T, const M: usize, const N: usize> From<Matrix<T, M, N>> for [[T; N]; M] {
    fn from(val: Matrix<T, M, N>) -> Self {
        val.cols.map(|col| col.into())
    }
}

impl<T, const M: usize, const N: usize> From<[Vector<T, N>; M]> for Matrix<T, M, N> {
    fn from(cols: [Vector<T, N>; M]) -> Self {
        Self { cols }
    }
}

impl<T, const M: usize, const N: usize> From<[[T; N]; M]> for Matrix<T, M, N> {
    fn from(cols: [[T; N]; M]) -> Self {
        Self { cols: cols.map(|col| col.into()) }
    }
}

/// Implements `From` between square matrices of the given dimensions through [`Matrix::resize`].
macro_rules! impl_from_resize {
    ($($from:literal => $to:literal),+) => {
        $(
            impl<T: Default + Copy + From<bool>> From<Matrix<T, $from>> for Matrix<T, $to> {
                fn from(val: Matrix<T, $from>) -> Self {
                    val.resize()
                }
            }
        )+
    };
}

impl_from_resize!(2 => 3, 3 => 2, 3 => 4, 4 => 3, 2 => 4, 4 => 2);

impl<T, const M: usize, const N: usize> ops::Index<usize> for Matrix<T, M, N> {
    type Output = Vector<T, N>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.cols[idx]
    }
}

impl<T, const M: usize, const N: usize> ops::IndexMut<usize> for Matrix<T, M, N> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.cols[idx]
    }
}

/// Indexes a single element by `(col, row)`.
impl<T, const M: usize, const N: usize> ops::Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    fn index(&self, (col, row): (usize, usize)) -> &Self::Output {
        &self.cols[col][row]
    }
}

impl<T, const M: usize, const N: usize> ops::IndexMut<(usize, usize)> for Matrix<T, M, N> {
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut Self::Output {
        &mut self.cols[col][row]
    }
}

/// The unit matrix.
impl<T: Default + Copy + From<bool>, const M: usize> Default for Matrix<T, M, M> {
    fn default() -> Self {
        Self::unit()
    }
}

impl<T: AbsDiffEq, const M: usize, const N: usize> AbsDiffEq for Matrix<T, M, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.cols.iter()
            .zip(&other.cols)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const M: usize, const N: usize> RelativeEq for Matrix<T, M, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.cols.iter()
            .zip(&other.cols)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const M: usize, const N: usize> UlpsEq for Matrix<T, M, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.cols.iter()
            .zip(&other.cols)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Deg;

    use approx::assert_abs_diff_eq;

    fn sample3() -> Matrix<f32, 3> {
        Matrix::from([[2., 0., 1.], [1., 3., 2.], [1., 1., 4.]])
    }

    fn sample4() -> Matrix<f32, 4> {
        Matrix::from([
            [4., 0., 0., 1.],
            [0., 3., 1., 0.],
            [2., 0., 2., 0.],
            [1., 1., 0., 5.],
        ])
    }

    #[test]
    fn it_works() {
        let a: Matrix<i32, 2> = Matrix::from([
            Vector::from([1, 2]),
            Vector::from([3, 4]),
        ]);
        let b: Matrix<i32, 2> = Matrix::from([[1, 2], [3, 4]]);
        assert_eq!(Vector::from([1, 2]), a[0]);
        assert_eq!(Vector::from([3, 4]), a[1]);
        assert_eq!(a, b);
        assert_eq!(a, Matrix::from_flat([1, 2, 3, 4]));
    }

    #[test]
    fn column_major_layout() {
        let m = Matrix::<i32, 3>::from_flat([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        for col in 0..3 {
            for row in 0..3 {
                let value = m[(col, row)];
                assert_eq!(value, (3 * col + row) as i32);
                assert_eq!(m.as_slice()[3 * col + row], value);
            }
        }
        assert_eq!(m.as_ptr(), m.as_slice().as_ptr());
    }

    #[test]
    fn default_is_unit() {
        let m = Matrix::<f32, 4>::default();
        assert_eq!(m, Matrix::unit());
        assert_eq!(m, Matrix::diag(1.));
        assert_eq!(m[(3, 3)], 1.);
        assert_eq!(m[(3, 0)], 0.);
        assert_eq!(Matrix::<f32, 2>::diag(3.), Matrix::from([[3., 0.], [0., 3.]]));
    }

    #[test]
    fn add() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::from([[5, 6], [7, 8]]);
        let c = Matrix::from([[6, 8], [10, 12]]);
        assert_eq!(a + b, c);
        assert_eq!(c - b, a);

        let mut d = a;
        d += b;
        d -= a;
        assert_eq!(d, b);
    }

    #[test]
    fn multiply() {
        let a = Matrix::from([[1, 4], [2, 5], [3, 6]]);
        let b = Matrix::from([[-1, 2, 3], [4, 5, 6]]);
        let c = Matrix::from([[12, 24], [32, 77]]);
        assert_eq!(a * b, c);
        let c = Matrix::from([[15, 22, 27], [18, 29, 36], [21, 36, 45]]);
        assert_eq!(b * a, c);
    }

    #[test]
    fn mul_assign() {
        let a = Matrix::from([[1, 2], [3, 4]]);
        let b = Matrix::from([[0, 1], [1, 0]]);
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
        assert_eq!(c, Matrix::from([[3, 4], [1, 2]]));
    }

    #[test]
    fn mul_vec() {
        let m = Matrix::from([[1, 2], [3, 4]]);
        let v = Vector::from([1, 2]);
        assert_eq!(m * v, [7, 10].into());

        let v = Vector::from([1., -2., 3., 0.5]);
        assert_eq!(Matrix::<f32, 4>::unit() * v, v);
    }

    #[test]
    fn mul_scalar() {
        let m = sample3();
        let expected = Matrix::from([[4., 0., 2.], [2., 6., 4.], [2., 2., 8.]]);
        assert_eq!(2. * m, expected);
        assert_eq!(m * 2., expected);
        let mut n = m;
        n *= 2.;
        assert_eq!(n, expected);
    }

    #[test]
    fn from_translation() {
        let a = Matrix::<_, 4, 4>::from_translation([1, 2, 3].into());
        let b = Matrix::from([[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [1, 2, 3, 1]]);
        assert_eq!(a, b);
    }

    #[test]
    fn from_scale() {
        let a = Matrix::<_, 4, 4>::from_scale(3);
        let b = Matrix::from([[3, 0, 0, 0], [0, 3, 0, 0], [0, 0, 3, 0], [0, 0, 0, 1]]);
        assert_eq!(a, b);
        let c = Matrix::<_, 3, 3>::from_diag([1, 2, 3].into());
        assert_eq!(c, Matrix::from([[1, 0, 0], [0, 2, 0], [0, 0, 3]]));
    }

    #[test]
    fn transpose() {
        let mut a = Matrix::from([[1, 4, 7], [2, 5, 8], [3, 6, 9]]);
        let b = Matrix::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        a.transpose();
        assert_eq!(a, b);

        let m = Matrix::<i32, 4>::from_flat([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        let t = m.transposed();
        for col in 0..4 {
            for row in 0..4 {
                assert_eq!(t[(col, row)], m[(row, col)]);
            }
        }
        assert_eq!(t.transposed(), m);
    }

    #[test]
    fn minor() {
        let m = Matrix::<i32, 3>::from_flat([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(m.minor::<2>(0, 0), Matrix::from([[4, 5], [7, 8]]));
        assert_eq!(m.minor::<2>(1, 2), Matrix::from([[0, 1], [6, 7]]));
    }

    #[test]
    fn determinant() {
        let m2 = Matrix::<f32, 2>::from([[1., 2.], [3., 4.]]);
        assert_eq!(m2.determinant(), -2.);
        assert_eq!(sample3().determinant(), 18.);
        assert_eq!(sample4().determinant(), 112.);
        assert_eq!(Matrix::<f32, 4>::unit().determinant(), 1.);
        assert_eq!(Matrix::<f32, 3>::diag(2.).determinant(), 8.);
    }

    #[test]
    fn inverse() {
        let m2 = Matrix::<f32, 2>::from([[4., 2.], [7., 6.]]);
        let inv2 = m2.inverse();
        assert_abs_diff_eq!(inv2, Matrix::from([[0.6, -0.2], [-0.7, 0.4]]), epsilon = 1e-6);
        assert_abs_diff_eq!(m2 * inv2, Matrix::unit(), epsilon = 1e-6);

        let m3 = sample3();
        assert_abs_diff_eq!(m3 * m3.inverse(), Matrix::unit(), epsilon = 1e-6);
        assert_abs_diff_eq!(m3.inverse().inverse(), m3, epsilon = 1e-5);

        let m4 = sample4();
        assert_abs_diff_eq!(m4 * m4.inverse(), Matrix::unit(), epsilon = 1e-6);
        assert_abs_diff_eq!(m4.inverse() * m4, Matrix::unit(), epsilon = 1e-6);
        assert_abs_diff_eq!(m4.inverse().inverse(), m4, epsilon = 1e-5);
    }

    #[test]
    fn singular() {
        let m = Matrix::<f32, 3>::from([[1., 2., 3.], [2., 4., 6.], [0., 1., 0.]]);
        assert_eq!(m.determinant(), 0.);
        assert_eq!(m.try_inverse(), None);
        assert!(m.inverse().as_slice().iter().any(|x| !x.is_finite()));
        assert!(sample4().try_inverse().is_some());
    }

    #[test]
    fn resize() {
        let m3 = Matrix::<f32, 3>::from_flat([1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        let m4: Matrix<f32, 4> = m3.into();
        assert_eq!(m4, Matrix::from([
            [1., 2., 3., 0.],
            [4., 5., 6., 0.],
            [7., 8., 9., 0.],
            [0., 0., 0., 1.],
        ]));
        let back: Matrix<f32, 3> = m4.into();
        assert_eq!(back, m3);

        let m2: Matrix<f32, 2> = m3.into();
        assert_eq!(m2, Matrix::from([[1., 2.], [4., 5.]]));
        let m4: Matrix<f32, 4> = m2.into();
        assert_eq!(m4[(2, 2)], 1.);
        assert_eq!(m4[(1, 1)], 5.);
    }

    #[test]
    fn rotations() {
        let v = Vector::from([1., 0., 0., 1.]);
        assert_abs_diff_eq!(Matrix::from_angle_z(Deg(90.)) * v, Vector::from([0., 1., 0., 1.]), epsilon = 1e-6);
        let v = Vector::from([0., 1., 0., 1.]);
        assert_abs_diff_eq!(Matrix::from_angle_x(Deg(90.)) * v, Vector::from([0., 0., 1., 1.]), epsilon = 1e-6);
        let v = Vector::from([0., 0., 1., 1.]);
        assert_abs_diff_eq!(Matrix::from_angle_y(Deg(90.)) * v, Vector::from([1., 0., 0., 1.]), epsilon = 1e-6);
        assert_eq!(Matrix::from_angle_x(Rad(0.)), Matrix::<f32, 4>::unit());
    }

    #[test]
    fn look_at() {
        let eye = Vector::from([1., 2., 3.]);
        let at = Vector::from([1., 2., -2.]);
        let view = Matrix::look_at(eye, at, Vector::from([0., 1., 0.]));
        assert_abs_diff_eq!(view * eye.extend(1.), Vector::from([0., 0., 0., 1.]), epsilon = 1e-6);
        assert_abs_diff_eq!(view * at.extend(1.), Vector::from([0., 0., 5., 1.]), epsilon = 1e-5);
        assert_abs_diff_eq!(view.determinant(), 1., epsilon = 1e-6);
    }
}

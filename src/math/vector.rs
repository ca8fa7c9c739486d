use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use std::ops;

/// A fixed sized vector that is generic over its type and size.
///
/// The components are stored contiguously, so [`Vector::as_slice`] can be handed
/// to a graphics API as is.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Vector<T, const N: usize> {
    array: [T; N],
}

/// Generates a getter and a mutable getter for every name aliasing the component at `$idx`.
macro_rules! component_accessors {
    ($idx:literal => $($get:ident, $get_mut:ident);+) => {
        $(
            #[doc = concat!("Gets component ", stringify!($idx), " of a Vector with at least ", stringify!($idx), " + 1 dimensions.")]
            pub fn $get(&self) -> T {
                const { assert!(N > $idx, "not enough dimensions") }
                self.array[$idx]
            }

            #[doc = concat!("Mutable reference to the component also read by [`Vector::", stringify!($get), "`].")]
            pub fn $get_mut(&mut self) -> &mut T {
                const { assert!(N > $idx, "not enough dimensions") }
                &mut self.array[$idx]
            }
        )+
    };
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a vector filled with `value`.
    pub const fn new(value: T) -> Self {
        Self { array: [value; N] }
    }

    /// Creates a vector initialized with `values`.
    pub const fn new_init(values: [T; N]) -> Self {
        Self { array: values }
    }

    component_accessors!(0 => x, x_mut; r, r_mut; s, s_mut);
    component_accessors!(1 => y, y_mut; g, g_mut; t, t_mut);
    component_accessors!(2 => z, z_mut; b, b_mut; p, p_mut);
    component_accessors!(3 => w, w_mut; a, a_mut; q, q_mut);

    /// The components in order, borrowed from the vector's own storage.
    pub fn as_slice(&self) -> &[T] {
        &self.array
    }

    /// Raw pointer to the first of the `N` contiguous components.
    pub fn as_ptr(&self) -> *const T {
        self.array.as_ptr()
    }
}

impl<T: Copy + Default, const N: usize> Vector<T, N> {
    /// Copies the leading components into a vector of `P` dimensions,
    /// filling any extra component with the default value.
    pub fn resize<const P: usize>(self) -> Vector<T, P> {
        let mut out = Vector::default();
        for i in 0..N.min(P) {
            out[i] = self[i];
        }
        out
    }
}

impl<T: Copy> Vector<T, 2> {
    /// Appends `z` as the third component.
    pub fn extend(self, z: T) -> Vector<T, 3> {
        let [x, y] = self.array;
        Vector::from([x, y, z])
    }
}

impl<T: Copy> Vector<T, 3> {
    /// Appends `w` as the fourth component.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.array;
        Vector::from([x, y, z, w])
    }

    /// Drops the third component.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.array;
        Vector::from([x, y])
    }
}

impl<T: Copy> Vector<T, 4> {
    /// Drops the fourth component.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.array;
        Vector::from([x, y, z])
    }
}

impl<T: ops::Mul<Output = T> + std::iter::Sum, const N: usize> Vector<T, N> {
    pub fn sum(self) -> T {
        self.array.into_iter().sum::<T>()
    }

    pub fn dot(self, rhs: Self) -> T {
        self.array.into_iter()
            .zip(rhs.array)
            .map(|(a, b)| a * b)
            .sum::<T>()
    }
}

impl<const N: usize> Vector<f32, N> {
    /// Calculates the euclidian magnitude of a vector.
    pub fn magnitude(&self) -> f32 {
        self.array.iter().map(|&x| x * x).sum::<f32>().sqrt()
    }

    /// Divides every component by the magnitude, in place.
    ///
    /// The vector must not be the zero vector, otherwise every component
    /// ends up as NaN. See [`Vector::try_normalize`] for a checked version.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        for x in self.array.iter_mut() {
            *x /= mag;
        }
        self
    }

    /// Returns a normalized vector pointing in the same direction.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns a normalized vector or `None` for a zero length vector.
    pub fn try_normalize(self) -> Option<Self> {
        if self.magnitude() == 0. {
            return None;
        }
        Some(self.normalized())
    }
}

impl<T> Vector<T, 3>
where
    T: Copy + ops::Mul<Output = T> + ops::Sub<Output = T>,
{
    pub fn cross(self, rhs: Self) -> Self {
        Self { array: [
            self.array[1] * rhs.array[2] - self.array[2] * rhs.array[1],
            self.array[2] * rhs.array[0] - self.array[0] * rhs.array[2],
            self.array[0] * rhs.array[1] - self.array[1] * rhs.array[0],
        ] }
    }
}

impl<T: ops::Neg<Output = T>, const N: usize> ops::Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { array: self.array.map(|x| -x) }
    }
}

impl<T: ops::AddAssign, const N: usize> ops::Add for Vector<T, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: ops::AddAssign, const N: usize> ops::AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.array.iter_mut().zip(rhs.array) {
            *a += b;
        }
    }
}

impl<T: ops::SubAssign, const N: usize> ops::Sub for Vector<T, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: ops::SubAssign, const N: usize> ops::SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.array.iter_mut().zip(rhs.array) {
            *a -= b;
        }
    }
}

impl<T: ops::MulAssign, const N: usize> ops::Mul<Self> for Vector<T, N> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: ops::MulAssign, const N: usize> ops::MulAssign<Self> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        for (a, b) in self.array.iter_mut().zip(rhs.array) {
            *a *= b;
        }
    }
}

impl<T: Copy + ops::Mul<Output = T>, const N: usize> ops::Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self { array: self.array.map(|x| x * rhs) }
    }
}

impl<T: Copy + ops::MulAssign, const N: usize> ops::MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for a in self.array.iter_mut() {
            *a *= rhs;
        }
    }
}

impl<T: ops::DivAssign, const N: usize> ops::Div<Self> for Vector<T, N> {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: ops::DivAssign, const N: usize> ops::DivAssign<Self> for Vector<T, N> {
    fn div_assign(&mut self, rhs: Self) {
        for (a, b) in self.array.iter_mut().zip(rhs.array) {
            *a /= b;
        }
    }
}

impl<T: Copy + ops::Div<Output = T>, const N: usize> ops::Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self { array: self.array.map(|x| x / rhs) }
    }
}

impl<T: Copy + ops::DivAssign, const N: usize> ops::DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        for a in self.array.iter_mut() {
            *a /= rhs;
        }
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(val: Vector<T, N>) -> Self {
        val.array
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(array: [T; N]) -> Self {
        Self { array }
    }
}

/// Drops the `w` component.
impl<T: Copy> From<Vector<T, 4>> for Vector<T, 3> {
    fn from(val: Vector<T, 4>) -> Self {
        val.truncate()
    }
}

/// Treats the vector as a point and appends `w = 1`.
impl<T: Copy + From<bool>> From<Vector<T, 3>> for Vector<T, 4> {
    fn from(val: Vector<T, 3>) -> Self {
        val.extend(true.into())
    }
}

impl<T, const N: usize> ops::Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.array[idx]
    }
}

impl<T, const N: usize> ops::IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.array[idx]
    }
}

impl<T: Default + Copy, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self { array: [T::default(); N] }
    }
}

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.array.iter()
            .zip(&other.array)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.array.iter()
            .zip(&other.array)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const N: usize> UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.array.iter()
            .zip(&other.array)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

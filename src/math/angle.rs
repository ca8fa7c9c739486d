use std::ops;

/// The value of π used for every angle conversion.
///
/// Kept at this fixed precision so conversions match the shaders' constant bit for bit.
#[allow(clippy::approx_constant, clippy::excessive_precision)]
pub const PI: f32 = 3.14159265359;

/// Converts `radians` to degrees.
pub fn degrees(radians: f32) -> f32 {
    radians * 180. / PI
}

/// Converts `degrees` to radians.
pub fn radians(degrees: f32) -> f32 {
    degrees * PI / 180.
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rad<T>(pub T);

impl From<Deg<f32>> for Rad<f32> {
    fn from(value: Deg<f32>) -> Self {
        Rad(radians(value.0))
    }
}

impl<T: Default> Default for Rad<T> {
    fn default() -> Self {
        Rad(T::default())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Deg<T>(pub T);

impl From<Rad<f32>> for Deg<f32> {
    fn from(value: Rad<f32>) -> Self {
        Deg(degrees(value.0))
    }
}

impl<T: Default> Default for Deg<T> {
    fn default() -> Self {
        Deg(T::default())
    }
}

impl<T: ops::Add> ops::Add for Deg<T> {
    type Output = Deg<T::Output>;

    fn add(self, rhs: Self) -> Self::Output {
        Deg(self.0 + rhs.0)
    }
}

impl<T: ops::AddAssign> ops::AddAssign for Deg<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: ops::Neg> ops::Neg for Deg<T> {
    type Output = Deg<T::Output>;

    fn neg(self) -> Self::Output {
        Deg(-self.0)
    }
}

impl<T: ops::Mul> ops::Mul<T> for Deg<T> {
    type Output = Deg<T::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Deg(self.0 * rhs)
    }
}

impl<T: ops::Div> ops::Div<T> for Deg<T> {
    type Output = Deg<T::Output>;

    fn div(self, rhs: T) -> Self::Output {
        Deg(self.0 / rhs)
    }
}

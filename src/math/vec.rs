use std::ops::{Add, Div, Mul, Neg, Sub};

/*
Requirements for Memory Compatibility with the renderer:
   1. Standard layout (like C structs).
   2. Three tightly packed f32 components, no padding.
   3. Can be safely cast to [f32; 3] or bytes.
*/

/// A 3-component single precision vector.
///
/// Value type: every arithmetic operation returns a new vector. The only
/// in-place mutation is [`Vec3::set_xyz`].
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// Creates a vector from three scalars.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    /// Sets all three components to `value`.
    pub fn set_xyz(&mut self, value: f32) {
        self.x = value;
        self.y = value;
        self.z = value;
    }

    /// Sum of componentwise products.
    pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Right-handed cross product `a x b`.
    pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
        Vec3 {
            x: a.y * b.z - a.z * b.y,
            y: a.z * b.x - a.x * b.z,
            z: a.x * b.y - a.y * b.x,
        }
    }

    /// Length of `v`, derived by inverting the fast reciprocal square root
    /// estimate rather than calling `sqrt`.
    pub fn len(v: &Vec3) -> f32 {
        1.0 / fast_inverse_sqrt(v.x * v.x + v.y * v.y + v.z * v.z)
    }

    /// Returns `v / len(v)`.
    ///
    /// A zero vector is not guarded. The reciprocal estimate for 0 is a large
    /// finite number, so the zero vector comes back unchanged.
    pub fn normalise(v: Vec3) -> Vec3 {
        v / Vec3::len(&v)
    }

    /// Method form of [`Vec3::dot`].
    pub fn dot_with(&self, other: &Vec3) -> f32 {
        Vec3::dot(self, other)
    }

    /// Method form of [`Vec3::cross`].
    pub fn cross_with(&self, other: &Vec3) -> Vec3 {
        Vec3::cross(self, other)
    }

    /// Method form of [`Vec3::len`].
    pub fn length(&self) -> f32 {
        Vec3::len(self)
    }

    /// Method form of [`Vec3::normalise`].
    pub fn normalised(&self) -> Vec3 {
        Vec3::normalise(*self)
    }

    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }
}

/// Approximates `1 / sqrt(number)` with the classic bit-level initial guess
/// followed by two Newton-Raphson steps.
///
/// Negative or non-finite input produces garbage.
fn fast_inverse_sqrt(number: f32) -> f32 {
    const THREE_HALFS: f32 = 1.5;

    let x2 = number * 0.5;
    let i = 0x5f37_59df_u32.wrapping_sub(number.to_bits() >> 1);
    let mut y = f32::from_bits(i);
    y *= THREE_HALFS - x2 * y * y;
    y *= THREE_HALFS - x2 * y * y;
    y
}

impl From<[f32; 3]> for Vec3 {
    fn from(values: [f32; 3]) -> Self {
        Vec3::new(values[0], values[1], values[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(vec: Vec3) -> Self {
        [vec.x, vec.y, vec.z]
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

// No zero check: IEEE-754 inf/NaN propagate.
impl Div<f32> for Vec3 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Vec3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

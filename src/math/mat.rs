use std::fmt;
use std::ops::Mul;

use super::{MathError, Vec3};

/// Number of rows (and columns).
const SIZE: usize = 4;

/// A 4x4 single precision matrix stored in column-major order.
///
/// Entry `(row, col)` lives at flat index `col * 4 + row`. The buffer is handed
/// to the renderer verbatim as a column-major uniform, so the layout must not
/// change.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4([f32; 16]);

impl Default for Mat4 {
    /// Identity.
    fn default() -> Self {
        Mat4::identity()
    }
}

impl Mat4 {
    pub fn identity() -> Mat4 {
        Mat4::from_diagonal(1.0)
    }

    /// `d` on all four diagonal entries, zero elsewhere.
    pub fn from_diagonal(d: f32) -> Mat4 {
        Mat4([
            d, 0.0, 0.0, 0.0, //
            0.0, d, 0.0, 0.0, //
            0.0, 0.0, d, 0.0, //
            0.0, 0.0, 0.0, d,
        ])
    }

    /// Flat column-major buffer, for handing to the renderer.
    pub fn ptr(&self) -> &[f32; 16] {
        &self.0
    }

    /// Raw bytes of the column-major buffer (64 bytes).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.0[col * SIZE + row]
    }

    /// Standard product `self * b`.
    ///
    /// With column vectors the rightmost factor is applied first.
    pub fn multiply(&self, b: &Mat4) -> Mat4 {
        self.multiply_slice(&b.0)
    }

    fn multiply_slice(&self, b: &[f32; 16]) -> Mat4 {
        let a = &self.0;
        let mut result = [0.0; 16];
        for i in 0..SIZE {
            for j in 0..SIZE {
                result[i * SIZE + j] = (0..SIZE).map(|k| a[k * SIZE + j] * b[i * SIZE + k]).sum();
            }
        }
        Mat4(result)
    }

    /// Applies the matrix to a homogeneous column vector.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, cell) in out.iter_mut().enumerate() {
            *cell = (0..SIZE).map(|col| self.get(row, col) * v[col]).sum();
        }
        out
    }

    pub fn transpose(&self) -> Mat4 {
        let old = &self.0;
        let mut new = [0.0; 16];
        for i in 0..SIZE {
            for j in 0..SIZE {
                new[i * SIZE + j] = old[j * SIZE + i];
            }
        }
        Mat4(new)
    }

    /// Cofactor expansion along 2x2 sub-determinants.
    pub fn determinant(&self) -> f32 {
        let (s, c) = self.sub_determinants();
        expand(&s, &c)
    }

    /// General inverse via the adjugate.
    ///
    /// # Errors
    /// [`MathError::Singular`] when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Mat4, MathError> {
        let m = |row: usize, col: usize| self.get(row, col);
        let (s, c) = self.sub_determinants();

        let det = expand(&s, &c);
        if det == 0.0 {
            return Err(MathError::Singular);
        }
        let inv_det = 1.0 / det;

        // Adjugate laid out by (row, col) of the inverse.
        let adj = [
            [
                m(1, 1) * c[5] - m(1, 2) * c[4] + m(1, 3) * c[3],
                -m(0, 1) * c[5] + m(0, 2) * c[4] - m(0, 3) * c[3],
                m(3, 1) * s[5] - m(3, 2) * s[4] + m(3, 3) * s[3],
                -m(2, 1) * s[5] + m(2, 2) * s[4] - m(2, 3) * s[3],
            ],
            [
                -m(1, 0) * c[5] + m(1, 2) * c[2] - m(1, 3) * c[1],
                m(0, 0) * c[5] - m(0, 2) * c[2] + m(0, 3) * c[1],
                -m(3, 0) * s[5] + m(3, 2) * s[2] - m(3, 3) * s[1],
                m(2, 0) * s[5] - m(2, 2) * s[2] + m(2, 3) * s[1],
            ],
            [
                m(1, 0) * c[4] - m(1, 1) * c[2] + m(1, 3) * c[0],
                -m(0, 0) * c[4] + m(0, 1) * c[2] - m(0, 3) * c[0],
                m(3, 0) * s[4] - m(3, 1) * s[2] + m(3, 3) * s[0],
                -m(2, 0) * s[4] + m(2, 1) * s[2] - m(2, 3) * s[0],
            ],
            [
                -m(1, 0) * c[3] + m(1, 1) * c[1] - m(1, 2) * c[0],
                m(0, 0) * c[3] - m(0, 1) * c[1] + m(0, 2) * c[0],
                -m(3, 0) * s[3] + m(3, 1) * s[1] - m(3, 2) * s[0],
                m(2, 0) * s[3] - m(2, 1) * s[1] + m(2, 2) * s[0],
            ],
        ];

        let mut result = [0.0; 16];
        for (row, cols) in adj.iter().enumerate() {
            for (col, value) in cols.iter().enumerate() {
                result[col * SIZE + row] = value * inv_det;
            }
        }
        Ok(Mat4(result))
    }

    /// 2x2 determinants of the top two rows (`s`) and bottom two rows (`c`).
    fn sub_determinants(&self) -> ([f32; 6], [f32; 6]) {
        let m = |row: usize, col: usize| self.get(row, col);
        let s = [
            m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1),
            m(0, 0) * m(1, 2) - m(1, 0) * m(0, 2),
            m(0, 0) * m(1, 3) - m(1, 0) * m(0, 3),
            m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2),
            m(0, 1) * m(1, 3) - m(1, 1) * m(0, 3),
            m(0, 2) * m(1, 3) - m(1, 2) * m(0, 3),
        ];
        let c = [
            m(2, 0) * m(3, 1) - m(3, 0) * m(2, 1),
            m(2, 0) * m(3, 2) - m(3, 0) * m(2, 2),
            m(2, 0) * m(3, 3) - m(3, 0) * m(2, 3),
            m(2, 1) * m(3, 2) - m(3, 1) * m(2, 2),
            m(2, 1) * m(3, 3) - m(3, 1) * m(2, 3),
            m(2, 2) * m(3, 3) - m(3, 2) * m(2, 3),
        ];
        (s, c)
    }

    /// Copies the upper-left 3x3 block of `m` (column-major) into `out`.
    ///
    /// Used to derive the normal matrix from a model-view matrix.
    pub fn get_ptr_mat3x3(m: &Mat4, out: &mut [f32; 9]) {
        let src = m.ptr();
        for col in 0..3 {
            out[col * 3..col * 3 + 3].copy_from_slice(&src[col * SIZE..col * SIZE + 3]);
        }
    }

    pub fn upper_left_3x3(&self) -> [f32; 9] {
        let mut out = [0.0; 9];
        Mat4::get_ptr_mat3x3(self, &mut out);
        out
    }

    /// Writes the matrix row by row to stdout.
    pub fn print(&self) {
        println!("{self}");
    }

    pub fn scaling(v: &Vec3) -> Mat4 {
        Mat4([
            v.x, 0.0, 0.0, 0.0, //
            0.0, v.y, 0.0, 0.0, //
            0.0, 0.0, v.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Translation by `v`, stored in the last column (flat indices 12..15).
    pub fn translation(v: &Vec3) -> Mat4 {
        Mat4([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            v.x, v.y, v.z, 1.0,
        ])
    }

    /// Rotation by `theta_rad` about `axis` (Rodrigues' formula).
    ///
    /// `axis` must already be unit length; it is not normalised here.
    pub fn rotation(axis: &Vec3, theta_rad: f32) -> Mat4 {
        let c = theta_rad.cos();
        let s = theta_rad.sin();
        let t = 1.0 - c;
        let Vec3 { x, y, z } = *axis;
        Mat4([
            x * x * t + c,
            y * x * t + z * s,
            x * z * t - y * s,
            0.0,
            x * y * t - z * s,
            y * y * t + c,
            y * z * t + x * s,
            0.0,
            x * z * t + y * s,
            y * z * t - x * s,
            z * z * t + c,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// View matrix looking from `eye` towards `target`.
    ///
    /// Rows 0..3 hold the right, up and forward axes, with `-dot(axis, eye)` in
    /// the translation column. `up` parallel to the view direction is not
    /// guarded and collapses the right and up rows to zero.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = Vec3::normalise(eye - target);
        let right = Vec3::normalise(Vec3::cross(&up, &forward));
        let up = Vec3::cross(&forward, &right);
        Mat4([
            right.x,
            up.x,
            forward.x,
            0.0,
            right.y,
            up.y,
            forward.y,
            0.0,
            right.z,
            up.z,
            forward.z,
            0.0,
            -Vec3::dot(&right, &eye),
            -Vec3::dot(&up, &eye),
            -Vec3::dot(&forward, &eye),
            1.0,
        ])
    }

    /// Symmetric-frustum perspective projection, OpenGL clip conventions.
    pub fn perspective_projection(near: f32, far: f32, aspect: f32, fov_rad: f32) -> Mat4 {
        let tan = (fov_rad / 2.0).tan();
        Mat4([
            1.0 / (aspect * tan),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0 / tan,
            0.0,
            0.0,
            0.0,
            0.0,
            -(far + near) / (far - near),
            -1.0,
            0.0,
            0.0,
            -2.0 * far * near / (far - near),
            0.0,
        ])
    }

    /// Parallel projection parameterised by a field of view angle.
    ///
    /// Not a textbook orthographic matrix: the x/y scale comes from
    /// `near * tan(fov / 2)` and column 2 keeps a `-1` in the w row.
    pub fn orthographic_style_projection(near: f32, far: f32, aspect: f32, fov_rad: f32) -> Mat4 {
        let tan = (fov_rad / 2.0).tan();
        Mat4([
            1.0 / (near * tan),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0 / (near * aspect * tan),
            0.0,
            0.0,
            0.0,
            0.0,
            -2.0 / (far - near),
            -1.0,
            0.0,
            0.0,
            -(far + near) / (far - near),
            1.0,
        ])
    }
}

fn expand(s: &[f32; 6], c: &[f32; 6]) -> f32 {
    s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}

impl Mul<&[f32; 16]> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: &[f32; 16]) -> Mat4 {
        self.multiply_slice(rhs)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(buffer: [f32; 16]) -> Self {
        Mat4(buffer)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(matrix: Mat4) -> Self {
        matrix.0
    }
}

impl TryFrom<&[f32]> for Mat4 {
    type Error = MathError;

    /// Copies a column-major buffer verbatim; it must hold exactly 16 floats.
    fn try_from(buffer: &[f32]) -> Result<Self, Self::Error> {
        let array: [f32; 16] = buffer.try_into().map_err(|_| MathError::BufferLength {
            expected: 16,
            found: buffer.len(),
        })?;
        Ok(Mat4(array))
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                write!(f, "{} ", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

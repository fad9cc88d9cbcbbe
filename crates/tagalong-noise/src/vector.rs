//! Small vector value types shared by every sampler.
//!
//! All operations are elementwise unless the name says otherwise (`dot`).
//! `Vec2`, `Vec3` and `Vec4` expose the same method set so the 2D and 3D code
//! paths read alike.

macro_rules! impl_vector {
    ($name:ident { $($field:ident),+ }) => {
        #[allow(clippy::should_implement_trait)]
        impl $name {
            /// Build a vector from its components.
            #[inline]
            pub const fn new($($field: f64),+) -> Self {
                Self { $($field),+ }
            }

            /// All components set to `v`.
            #[inline]
            pub const fn splat(v: f64) -> Self {
                Self { $($field: v),+ }
            }

            #[inline]
            pub fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }

            #[inline]
            pub fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }

            /// Hadamard (componentwise) product.
            #[inline]
            pub fn mul(self, other: Self) -> Self {
                Self { $($field: self.$field * other.$field),+ }
            }

            #[inline]
            pub fn scale(self, f: f64) -> Self {
                Self { $($field: self.$field * f),+ }
            }

            #[inline]
            pub fn add_scalar(self, f: f64) -> Self {
                Self { $($field: self.$field + f),+ }
            }

            #[inline]
            pub fn dot(self, other: Self) -> f64 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Floor toward negative infinity.
            #[inline]
            pub fn floor(self) -> Self {
                Self { $($field: self.$field.floor()),+ }
            }

            #[inline]
            pub fn abs(self) -> Self {
                Self { $($field: self.$field.abs()),+ }
            }

            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self { $($field: self.$field.min(other.$field)),+ }
            }

            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self { $($field: self.$field.max(other.$field)),+ }
            }

            /// `1.0` where `x >= edge`, else `0.0`.
            #[inline]
            pub fn step(edge: Self, x: Self) -> Self {
                Self { $($field: step(edge.$field, x.$field)),+ }
            }

            /// Apply `f` to every component.
            #[inline]
            pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
                Self { $($field: f(self.$field)),+ }
            }
        }
    };
}

/// Two-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Three-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Four-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl_vector!(Vec2 { x, y });
impl_vector!(Vec3 { x, y, z });
impl_vector!(Vec4 { x, y, z, w });

impl Vec3 {
    /// Components rotated left: `(y, z, x)`.
    #[inline]
    pub fn yzx(self) -> Self {
        Self::new(self.y, self.z, self.x)
    }

    /// Components rotated right: `(z, x, y)`.
    #[inline]
    pub fn zxy(self) -> Self {
        Self::new(self.z, self.x, self.y)
    }
}

impl Vec4 {
    /// Components reordered as `(x, z, y, w)`.
    #[inline]
    pub fn xzyw(self) -> Self {
        Self::new(self.x, self.z, self.y, self.w)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 4]> for Vec4 {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }
}

/// `1.0` if `x >= edge`, else `0.0`.
#[inline]
pub fn step(edge: f64, x: f64) -> f64 {
    if x >= edge {
        1.0
    } else {
        0.0
    }
}

/// Linear blend `x * (1 - a) + y * a`.
#[inline]
pub fn mix(x: f64, y: f64, a: f64) -> f64 {
    x * (1.0 - a) + y * a
}

/// Fractional part relative to the floor, always in `[0, 1)` for finite input.
#[inline]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

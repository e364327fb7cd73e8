//! Strongly-typed numeric primitives for label geometry (zero-cost newtypes).
//!
//! Physical layout happens in millimetres. Font sizes arrive in points and
//! divider strokes in CSS pixels; both are converted to millimetres before
//! they meet the layout math, and only a [`Scaler`] turns millimetres into
//! output units.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// CSS pixels per millimetre at 96 dpi, rounded the way browsers' preview math does.
pub const PX_PER_MM: f64 = 3.78;

/// Millimetres per typographic point (1pt = 1/72 in).
pub const MM_PER_PT: f64 = 25.4 / 72.0;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Length in millimetres (canonical physical unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Mm(pub f64);

impl Mm {
    pub const ZERO: Mm = Mm(0.0);

    /// Create a length from millimetres (const-friendly, unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub const fn mm(val: f64) -> Mm {
        Mm(val)
    }

    /// Create a length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Mm, NumericError> {
        check_finite(val).map(Mm)
    }

    /// Create a non-negative length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Mm, NumericError> {
        let val = check_finite(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Mm(val))
        }
    }

    #[inline]
    pub fn min(self, other: Mm) -> Mm {
        Mm(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Mm) -> Mm {
        Mm(self.0.max(other.0))
    }

    /// Clamp into `[lo, hi]`. NaN collapses to `lo`.
    #[inline]
    pub fn clamp(self, lo: Mm, hi: Mm) -> Mm {
        if self.0.is_nan() {
            lo
        } else {
            Mm(self.0.clamp(lo.0, hi.0))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Mm {
    type Output = Mm;
    fn add(self, rhs: Mm) -> Mm {
        Mm(self.0 + rhs.0)
    }
}
impl Sub for Mm {
    type Output = Mm;
    fn sub(self, rhs: Mm) -> Mm {
        Mm(self.0 - rhs.0)
    }
}
impl Mul<f64> for Mm {
    type Output = Mm;
    fn mul(self, rhs: f64) -> Mm {
        Mm(self.0 * rhs)
    }
}
impl Div<f64> for Mm {
    type Output = Mm;
    fn div(self, rhs: f64) -> Mm {
        Mm(self.0 / rhs)
    }
}
impl Neg for Mm {
    type Output = Mm;
    fn neg(self) -> Mm {
        Mm(-self.0)
    }
}
impl AddAssign for Mm {
    fn add_assign(&mut self, rhs: Mm) {
        self.0 += rhs.0;
    }
}
impl SubAssign for Mm {
    fn sub_assign(&mut self, rhs: Mm) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Mm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Typographic points (font and icon sizes)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Pt(pub f64);

impl Pt {
    #[inline]
    pub fn to_mm(self) -> Mm {
        Mm(self.0 * MM_PER_PT)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Pt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CSS pixels (divider thickness and dash patterns are authored in these)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    #[inline]
    pub fn to_mm(self) -> Mm {
        Mm(self.0 / PX_PER_MM)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A percentage in `0..=100` space (not clamped by construction; see `clamp`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Percent(pub f64);

impl Percent {
    #[inline]
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }

    /// This percentage of a length
    #[inline]
    pub fn of(self, len: Mm) -> Mm {
        len * self.fraction()
    }

    /// Clamp into `[lo, hi]`. NaN collapses to `lo`.
    #[inline]
    pub fn clamp(self, lo: f64, hi: f64) -> Percent {
        if self.0.is_nan() {
            Percent(lo)
        } else {
            Percent(self.0.clamp(lo, hi))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One of the four cardinal rotations.
///
/// Stepping is modular over the four values, so a rotation can never leave
/// the set. Serialized as the bare number of degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [Rotation::Deg0, Rotation::Deg90, Rotation::Deg180, Rotation::Deg270];

    #[inline]
    fn index(self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    #[inline]
    fn from_index(i: usize) -> Rotation {
        Self::ALL[i % 4]
    }

    /// Parse an exact cardinal angle. Anything else is `None`.
    pub fn from_degrees(deg: u16) -> Option<Rotation> {
        match deg {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    #[inline]
    pub fn degrees(self) -> u16 {
        self.index() as u16 * 90
    }

    #[inline]
    pub fn clockwise(self) -> Rotation {
        Self::from_index(self.index() + 1)
    }

    #[inline]
    pub fn counter_clockwise(self) -> Rotation {
        Self::from_index(self.index() + 3)
    }

    /// Apply `other` after `self`.
    #[inline]
    pub fn then(self, other: Rotation) -> Rotation {
        Self::from_index(self.index() + other.index())
    }

    /// True for 90° and 270°, i.e. when the axes swap.
    #[inline]
    pub fn is_quarter_turn(self) -> bool {
        self.index() % 2 == 1
    }

    #[inline]
    pub fn radians(self) -> f64 {
        f64::from(self.degrees()).to_radians()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Serialize for Rotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Rotation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // null reads as 0, same as a missing key
        let deg = Option::<u16>::deserialize(deserializer)?.unwrap_or(0);
        Rotation::from_degrees(deg).ok_or_else(|| {
            serde::de::Error::custom(format!("rotation must be 0, 90, 180 or 270, got {deg}"))
        })
    }
}

/// Convert millimetres → output units with a given scale.
///
/// Print output uses one unit per millimetre; previews use CSS pixels times
/// a zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    units_per_mm: f64,
}

impl Scaler {
    /// 1 output unit per millimetre.
    pub const PRINT: Scaler = Scaler { units_per_mm: 1.0 };

    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(units_per_mm: f64) -> Result<Self, NumericError> {
        let units_per_mm = check_finite(units_per_mm)?;
        if units_per_mm == 0.0 {
            Err(NumericError::Zero)
        } else if units_per_mm < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(Scaler { units_per_mm })
        }
    }

    /// Scaler for an on-screen preview at `zoom` (1.0 = 96 dpi actual size).
    pub fn preview(zoom: f64) -> Result<Self, NumericError> {
        let zoom = Self::try_new(zoom)?.units_per_mm;
        Ok(Scaler { units_per_mm: PX_PER_MM * zoom })
    }

    #[inline]
    pub fn units_per_mm(&self) -> f64 {
        self.units_per_mm
    }

    /// Convert a length in millimetres to raw output units.
    #[inline]
    pub fn len(&self, l: Mm) -> f64 {
        l.0 * self.units_per_mm
    }

    pub fn point(&self, p: Point<Mm>) -> Point<f64> {
        Point { x: self.len(p.x), y: self.len(p.y) }
    }

    pub fn size(&self, s: Size<Mm>) -> Size<f64> {
        Size { w: self.len(s.w), h: self.len(s.h) }
    }

    pub fn rect(&self, r: Rect<Mm>) -> Rect<f64> {
        Rect { origin: self.point(r.origin), size: self.size(r.size) }
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self {
        Size { w, h }
    }
}

impl<T: Copy> Size<T> {
    /// Swap width and height.
    pub fn transposed(self) -> Self {
        Size { w: self.h, h: self.w }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect<T> {
    pub origin: Point<T>,
    pub size: Size<T>,
}

impl<T> Rect<T> {
    pub fn new(origin: Point<T>, size: Size<T>) -> Self {
        Rect { origin, size }
    }
}

impl<T> Rect<T>
where
    T: Copy + Add<Output = T> + Div<f64, Output = T>,
{
    pub fn right(&self) -> T {
        self.origin.x + self.size.w
    }

    pub fn bottom(&self) -> T {
        self.origin.y + self.size.h
    }

    pub fn center(&self) -> Point<T> {
        Point {
            x: self.origin.x + self.size.w / 2.0,
            y: self.origin.y + self.size.h / 2.0,
        }
    }
}

/// Convenient aliases
pub type PtMm = Point<Mm>;
pub type RectMm = Rect<Mm>;
pub type SizeMm = Size<Mm>;

//! Axis-aligned affine transforms for glyph outlines.

/// A 2D point in font units (or whatever space a [`Transform`] maps to).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Scale followed by translation: `(x, y) -> (x * sx + tx, y * sy + ty)`.
///
/// Enough to place design-unit glyph outlines on a canvas (including the
/// y-flip) without carrying a full 2x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            sx: 1.0,
            sy: 1.0,
            tx,
            ty,
        }
    }

    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            sx,
            sy,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Compose two transforms: the result applies `self` first, then `other`.
    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            sx: self.sx * other.sx,
            sy: self.sy * other.sy,
            tx: self.tx * other.sx + other.tx,
            ty: self.ty * other.sy + other.ty,
        }
    }

    /// Translate before applying `self`.
    pub fn pre_translate(&self, tx: f32, ty: f32) -> Transform {
        Transform::translate(tx, ty).combine(self)
    }

    /// Translate after applying `self`.
    pub fn post_translate(&self, tx: f32, ty: f32) -> Transform {
        self.combine(&Transform::translate(tx, ty))
    }

    /// Scale before applying `self`.
    pub fn pre_scale(&self, sx: f32, sy: f32) -> Transform {
        Transform::scale(sx, sy).combine(self)
    }

    /// Scale after applying `self`.
    pub fn post_scale(&self, sx: f32, sy: f32) -> Transform {
        self.combine(&Transform::scale(sx, sy))
    }

    pub fn transform_point(&self, point: Point) -> Point {
        Point {
            x: point.x * self.sx + self.tx,
            y: point.y * self.sy + self.ty,
        }
    }

    /// Map every point in place.
    pub fn transform_points(&self, points: &mut [Point]) {
        for point in points {
            *point = self.transform_point(*point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Transform, b: &Transform) -> bool {
        const EPS: f32 = 1e-4;
        (a.sx - b.sx).abs() < EPS
            && (a.sy - b.sy).abs() < EPS
            && (a.tx - b.tx).abs() < EPS
            && (a.ty - b.ty).abs() < EPS
    }

    #[test]
    fn translate_then_scale_moves_origin() {
        let t = Transform::translate(1.0, 0.0).post_scale(2.0, 1.0);
        assert_eq!(t.transform_point(Point::new(0.0, 0.0)), Point::new(2.0, 0.0));
    }

    #[test]
    fn pre_scale_applies_scale_first() {
        let t = Transform::translate(1.0, 0.0).pre_scale(2.0, 1.0);
        assert_eq!(t.transform_point(Point::new(1.0, 0.0)), Point::new(3.0, 0.0));
    }

    #[test]
    fn pre_translate_applies_translation_first() {
        let t = Transform::scale(2.0, -2.0).pre_translate(1.0, 1.0);
        assert_eq!(t.transform_point(Point::new(0.0, 0.0)), Point::new(2.0, -2.0));
        let t = Transform::scale(2.0, -2.0).post_translate(1.0, 1.0);
        assert_eq!(t.transform_point(Point::new(0.0, 0.0)), Point::new(1.0, 1.0));
    }

    #[test]
    fn identity_is_neutral() {
        let t = Transform {
            sx: 3.0,
            sy: -0.5,
            tx: 7.0,
            ty: 1.25,
        };
        assert_eq!(Transform::default().combine(&t), t);
        assert_eq!(t.combine(&Transform::identity()), t);
    }

    #[test]
    fn combine_is_associative() {
        let samples = [
            Transform::translate(1.0, -2.0),
            Transform::scale(0.5, 3.0),
            Transform {
                sx: -1.5,
                sy: 2.0,
                tx: 10.0,
                ty: 0.25,
            },
            Transform {
                sx: 0.01,
                sy: -0.01,
                tx: 100.0,
                ty: 75.0,
            },
        ];
        for a in &samples {
            for b in &samples {
                for c in &samples {
                    let left = a.combine(b).combine(c);
                    let right = a.combine(&b.combine(c));
                    assert!(approx_eq(&left, &right), "{left:?} != {right:?}");
                }
            }
        }
    }

    #[test]
    fn combined_transform_matches_sequential_application() {
        let a = Transform::scale(2.0, -1.0).post_translate(3.0, 4.0);
        let b = Transform::translate(-1.0, 0.5).post_scale(0.5, 2.0);
        let p = Point::new(1.5, -2.0);
        let sequential = b.transform_point(a.transform_point(p));
        let combined = a.combine(&b).transform_point(p);
        assert!((sequential.x - combined.x).abs() < 1e-5);
        assert!((sequential.y - combined.y).abs() < 1e-5);
    }

    #[test]
    fn transform_points_in_place() {
        let mut points = vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)];
        Transform::scale(2.0, 2.0)
            .post_translate(1.0, 1.0)
            .transform_points(&mut points);
        assert_eq!(points, vec![Point::new(1.0, 1.0), Point::new(3.0, 5.0)]);
    }
}

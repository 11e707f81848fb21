//! Glyph outlines as verb/point streams.

use crate::geometry::{Point, Transform};

/// Drawing verb of an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathVerb {
    MoveTo,
    LineTo,
    QuadTo,
    CubicTo,
    Close,
}

impl PathVerb {
    /// Number of points this verb consumes from [`Path::points`].
    pub const fn num_points(self) -> usize {
        match self {
            PathVerb::MoveTo | PathVerb::LineTo => 1,
            PathVerb::QuadTo => 2,
            PathVerb::CubicTo => 3,
            PathVerb::Close => 0,
        }
    }
}

/// Receiver for the flat command stream of an outline decomposer.
///
/// `coords` holds interleaved `x, y` values; only the first
/// `coordinate_count` entries belong to this command.
pub trait OutlineSink {
    fn path_command(&mut self, verb: PathVerb, coords: &[f32], coordinate_count: usize);
}

/// A decoded drawing command with its points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    CubicTo(Point, Point, Point),
    Close,
}

/// Vector outline stored as parallel verb and point sequences.
///
/// Each verb owns the next [`PathVerb::num_points`] entries of `points`;
/// the two sequences always partition exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub verbs: Vec<PathVerb>,
    pub points: Vec<Point>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn iter(&self) -> PathIter<'_> {
        PathIter {
            path: self,
            verb_index: 0,
            point_index: 0,
        }
    }

    /// Map every point of the outline in place.
    pub fn transform(&mut self, transform: &Transform) {
        transform.transform_points(&mut self.points);
    }
}

impl OutlineSink for Path {
    /// Append one command from a flat coordinate buffer.
    ///
    /// Panics if `coordinate_count` disagrees with the verb's point count
    /// or exceeds the buffer.
    fn path_command(&mut self, verb: PathVerb, coords: &[f32], coordinate_count: usize) {
        assert_eq!(
            coordinate_count,
            verb.num_points() * 2,
            "outline decomposer reported {coordinate_count} coordinates for {verb:?}"
        );
        assert!(
            coordinate_count <= coords.len(),
            "coordinate count {coordinate_count} exceeds buffer of {}",
            coords.len()
        );
        self.verbs.push(verb);
        self.points.extend(
            coords[..coordinate_count]
                .chunks_exact(2)
                .map(|pair| Point::new(pair[0], pair[1])),
        );
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathCommand;
    type IntoIter = PathIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the commands of a [`Path`].
#[derive(Debug, Clone)]
pub struct PathIter<'a> {
    path: &'a Path,
    verb_index: usize,
    point_index: usize,
}

impl Iterator for PathIter<'_> {
    type Item = PathCommand;

    fn next(&mut self) -> Option<Self::Item> {
        let verb = *self.path.verbs.get(self.verb_index)?;
        let count = verb.num_points();
        let points = self
            .path
            .points
            .get(self.point_index..self.point_index + count)?;
        self.verb_index += 1;
        self.point_index += count;
        Some(match verb {
            PathVerb::MoveTo => PathCommand::MoveTo(points[0]),
            PathVerb::LineTo => PathCommand::LineTo(points[0]),
            PathVerb::QuadTo => PathCommand::QuadTo(points[0], points[1]),
            PathVerb::CubicTo => PathCommand::CubicTo(points[0], points[1], points[2]),
            PathVerb::Close => PathCommand::Close,
        })
    }
}

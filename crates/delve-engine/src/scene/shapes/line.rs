use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Independent line segment (hairline) draw payload.
///
/// Segments are not joined; a list of them is drawn as a line list.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, color: Color) -> Self {
        Self { start, end, color }
    }
}

impl DrawList {
    /// Records a single line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, start: Vec2, end: Vec2, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(start, end, color)));
    }

    /// Records a batch of segments sharing one color and z-index.
    pub fn push_lines<I>(&mut self, z: ZIndex, segments: I, color: Color)
    where
        I: IntoIterator<Item = (Vec2, Vec2)>,
    {
        for (start, end) in segments {
            self.push_line(z, start, end, color);
        }
    }
}

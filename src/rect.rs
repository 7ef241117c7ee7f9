//! Axis-aligned rectangles, used as the viewport onto world space.

use num_traits::Num;

use crate::point::Point;

/// A rectangle given by its top-left and bottom-right corners.
///
/// Corner ordering is not checked. A rectangle is never changed in place; every
/// operation returns a new value, so a snapshot can be read from many threads at once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect<T> {
    top_left: Point<T>,
    bottom_right: Point<T>,
}

impl<T: Num + Copy> Rect<T> {
    pub fn from_corners(top_left: Point<T>, bottom_right: Point<T>) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// `size` is the full extent; it is halved on either side of `centre`.
    pub fn from_centre_and_size(centre: Point<T>, size: Point<T>) -> Self {
        let half = size.halved();
        Self::from_corners(centre - half, centre + half)
    }

    pub fn top_left(&self) -> Point<T> {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point<T> {
        self.bottom_right
    }

    pub fn size(&self) -> Point<T> {
        self.bottom_right - self.top_left
    }

    pub fn half_size(&self) -> Point<T> {
        self.size().halved()
    }

    pub fn centre(&self) -> Point<T> {
        self.top_left + self.half_size()
    }

    pub fn resized_around_centre(&self, new_size: Point<T>) -> Self {
        Self::from_centre_and_size(self.centre(), new_size)
    }

    pub fn recentred(&self, new_centre: Point<T>) -> Self {
        Self::from_centre_and_size(new_centre, self.size())
    }

    /**
    Map a position given as proportions of the rectangle to a point inside it.

    `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right. Each axis of
    the size is scaled by its own proportion. Proportions outside `[0, 1]` are
    not clamped and extrapolate along the same line, which scroll gestures
    rely on when they report a position just outside the grid.
    */
    pub fn to_world(&self, x_proportion: T, y_proportion: T) -> Point<T> {
        self.top_left + self.size().scale_components(Point::new(x_proportion, y_proportion))
    }
}

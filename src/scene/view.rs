/*!
 * View
 * Position and animation target of a visible entity
 *
 * Motion is a flag, not concurrency: the position moves a fixed step toward
 * its target each time `move_towards_target` is called.
 */

use crate::core::types::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct View {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
    pub target_x: Option<Coord>,
    pub target_y: Option<Coord>,
}

impl View {
    #[must_use]
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
            target_x: None,
            target_y: None,
        }
    }

    /// Place immediately, dropping any pending target
    pub fn set_xy(&mut self, x: Coord, y: Coord) {
        self.x = x;
        self.y = y;
        self.target_x = None;
        self.target_y = None;
    }

    /// Replace any previous target
    pub fn set_target_xy(&mut self, x: Coord, y: Coord) {
        self.target_x = Some(x);
        self.target_y = Some(y);
    }

    #[inline]
    #[must_use]
    pub const fn is_in_motion(&self) -> bool {
        self.target_x.is_some() || self.target_y.is_some()
    }

    /// Step at most `speed` along each axis; targets clear once reached
    pub fn move_towards_target(&mut self, speed: Coord) {
        if let Some(tx) = self.target_x {
            self.x = step_towards(self.x, tx, speed);
            if self.x == tx {
                self.target_x = None;
            }
        }
        if let Some(ty) = self.target_y {
            self.y = step_towards(self.y, ty, speed);
            if self.y == ty {
                self.target_y = None;
            }
        }
    }
}

fn step_towards(current: Coord, target: Coord, speed: Coord) -> Coord {
    if current < target {
        (current + speed).min(target)
    } else {
        (current - speed).max(target)
    }
}

// Copyright (C) 2020-2026 Andy Kurnia.

pub const ROWS: i8 = 15;
pub const COLS: i8 = 15;
pub const NUM_SQUARES: usize = (ROWS as usize) * (COLS as usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    #[inline(always)]
    pub fn orthogonal(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    // (row step, col step)
    #[inline(always)]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Location {
    pub row: i8,
    pub col: i8,
}

pub const CENTER: Location = Location { row: 7, col: 7 };

impl Location {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline(always)]
    pub fn on_board(self) -> bool {
        (0..ROWS).contains(&self.row) && (0..COLS).contains(&self.col)
    }

    // row-major index, only meaningful when on_board().
    #[inline(always)]
    pub fn index(self) -> usize {
        ((self.row as isize) * (COLS as isize) + (self.col as isize)) as usize
    }

    // wraps rather than overflowing on locations far off the board.
    #[inline(always)]
    pub fn step(self, direction: Direction, n: i8) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row.wrapping_add(dr.wrapping_mul(n)),
            col: self.col.wrapping_add(dc.wrapping_mul(n)),
        }
    }

    // the lane this location lies on, and its position within that lane.
    #[inline(always)]
    pub fn lane_and_idx(self, direction: Direction) -> (i8, i8) {
        match direction {
            Direction::Horizontal => (self.row, self.col),
            Direction::Vertical => (self.col, self.row),
        }
    }

    #[inline(always)]
    pub fn from_lane_and_idx(direction: Direction, lane: i8, idx: i8) -> Self {
        match direction {
            Direction::Horizontal => Self { row: lane, col: idx },
            Direction::Vertical => Self { row: idx, col: lane },
        }
    }
}

// row number then column letter, as labelled on the printed board.
impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.on_board() {
            write!(f, "{}{}", self.row + 1, (b'A' + self.col as u8) as char)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl std::ops::Add<Direction> for Location {
    type Output = Location;

    #[inline(always)]
    fn add(self, direction: Direction) -> Location {
        self.step(direction, 1)
    }
}

impl std::ops::Sub<Direction> for Location {
    type Output = Location;

    #[inline(always)]
    fn sub(self, direction: Direction) -> Location {
        self.step(direction, -1)
    }
}

// number of squares along a lane in this direction.
#[inline(always)]
pub fn lane_len(direction: Direction) -> i8 {
    match direction {
        Direction::Horizontal => COLS,
        Direction::Vertical => ROWS,
    }
}

// number of lanes in this direction.
#[inline(always)]
pub fn num_lanes(direction: Direction) -> i8 {
    match direction {
        Direction::Horizontal => ROWS,
        Direction::Vertical => COLS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_from_the_extremes_stays_off_board() {
        let far_left = Location::new(7, i8::MIN);
        assert!(!(far_left - Direction::Horizontal).on_board());
        assert!(!(far_left + Direction::Horizontal).on_board());
        let far_down = Location::new(i8::MAX, 7);
        assert!(!(far_down + Direction::Vertical).on_board());
        assert_eq!(CENTER.step(Direction::Vertical, -7), Location::new(0, 7));
    }
}

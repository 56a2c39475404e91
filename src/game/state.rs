use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// Move position one cell in a direction
    pub fn translate(&self, direction: Direction) -> Self {
        let (d_row, d_column) = direction.delta();
        self.moved_by(d_row, d_column)
    }
}

/// Message for the one invariant `Snake` relies on
const NON_EMPTY: &str = "snake body is never empty";

/// The snake body, head at the front and tail at the back.
///
/// The body always holds at least one segment: `new` pushes the head
/// first, `from_segments` refuses an empty list, and `advance` pops the
/// tail only to push a new head.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Lay out a straight snake of `length` cells trailing behind `head`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut segment = head;

        body.push_back(segment);
        for _ in 1..length {
            segment = segment.translate(back);
            body.push_back(segment);
        }

        Self { body }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        *self.body.front().expect(NON_EMPTY)
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        *self.body.back().expect(NON_EMPTY)
    }

    /// Add a new head without moving the tail (the snake grows by one)
    pub fn grow(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }

    /// Shift the snake onto `new_head`, returning the vacated tail cell
    pub fn advance(&mut self, new_head: Position) -> Position {
        let vacated = self.tail();
        self.body.pop_back();
        self.body.push_front(new_head);
        vacated
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Position> + Clone + '_ {
        self.body.iter().copied()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never true, see the type docs)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

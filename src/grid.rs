// Occupancy grid construction
//
// Turns a board snapshot into a flat traversability map for the search
// engine. Two stages: the base builder marks every snake head and body
// segment blocked, and the head-to-head extension additionally blocks
// cells a not-weaker opponent could contest next turn.

use log::info;

use crate::types::{Battlesnake, Board, Coord};

/// Boolean traversability map over the board, row-major `y*width+x`.
/// Built fresh for each search; never shared across move requests.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds the base occupancy grid: every head and body segment of
    /// every snake is blocked. A board with zero snakes yields an
    /// all-clear grid.
    ///
    /// Validates the board at this boundary: non-positive or over-limit
    /// dimensions and out-of-bounds snake coordinates are rejected
    /// before they can corrupt search state.
    pub fn from_board(board: &Board, max_width: i32, max_height: i32) -> Result<Self, String> {
        if board.width <= 0 || board.height <= 0 {
            return Err(format!(
                "Invalid board dimensions: {}x{}",
                board.width, board.height
            ));
        }
        if board.width > max_width || board.height > max_height {
            return Err(format!(
                "Board {}x{} exceeds configured limit {}x{}",
                board.width, board.height, max_width, max_height
            ));
        }

        let mut grid = Grid {
            width: board.width,
            height: board.height,
            cells: vec![false; (board.width * board.height) as usize],
        };

        for snake in &board.snakes {
            grid.block_checked(&snake.head, &snake.id)?;
            for segment in &snake.body {
                grid.block_checked(segment, &snake.id)?;
            }
        }

        Ok(grid)
    }

    /// Extends the grid for the snake about to plan a move: blocks
    /// every cell that is both one of `you`'s four candidate next
    /// cells and adjacent to the head of an opponent whose length is
    /// greater than or equal to `you`'s. Moving into such a cell risks
    /// losing a head-to-head collision next turn, so it is treated as
    /// occupied for planning. Strictly shorter opponents contribute
    /// nothing.
    pub fn extend_for_snake(&mut self, board: &Board, you: &Battlesnake) {
        let candidates = self.neighbors(&you.head);

        for snake in &board.snakes {
            if snake.id == you.id {
                continue;
            }
            if snake.length < you.length {
                continue;
            }
            for contested in self.neighbors(&snake.head) {
                if candidates.contains(&contested) {
                    info!(
                        "Avoiding head-to-head at ({}, {}) against {}",
                        contested.x, contested.y, snake.name
                    );
                    self.block(&contested);
                }
            }
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// True when the cell is occupied or contested. Callers must only
    /// pass in-bounds coordinates.
    pub fn is_blocked(&self, coord: &Coord) -> bool {
        self.cells[self.index(coord)]
    }

    pub fn block(&mut self, coord: &Coord) {
        let i = self.index(coord);
        self.cells[i] = true;
    }

    /// The in-bounds subset of a cell's four orthogonal neighbors.
    pub fn neighbors(&self, coord: &Coord) -> Vec<Coord> {
        let mut result = Vec::with_capacity(4);
        if coord.x > 0 {
            result.push(Coord { x: coord.x - 1, y: coord.y });
        }
        if coord.x < self.width - 1 {
            result.push(Coord { x: coord.x + 1, y: coord.y });
        }
        if coord.y > 0 {
            result.push(Coord { x: coord.x, y: coord.y - 1 });
        }
        if coord.y < self.height - 1 {
            result.push(Coord { x: coord.x, y: coord.y + 1 });
        }
        result
    }

    fn index(&self, coord: &Coord) -> usize {
        (coord.y * self.width + coord.x) as usize
    }

    fn block_checked(&mut self, coord: &Coord, snake_id: &str) -> Result<(), String> {
        if !self.in_bounds(coord) {
            return Err(format!(
                "Snake {} has segment ({}, {}) outside {}x{} board",
                snake_id, coord.x, coord.y, self.width, self.height
            ));
        }
        self.block(coord);
        Ok(())
    }
}

// Move decision engine
//
// For every (snake, food) pair the bot runs an A* search over that
// snake's own occupancy grid, ranks the snakes per food by distance,
// and picks the food where our snake holds the best relative standing.
// The whole pipeline is synchronous and allocates fresh state per
// request, so concurrent move requests never share anything beyond the
// immutable config.

use log::{error, info, warn};
use serde_json::{json, Value};

use crate::config::Config;
use crate::grid::Grid;
use crate::search::{shortest_path, DEFAULT_DIRECTION};
use crate::types::{Battlesnake, Board, Direction, Game};

/// One competitor's result in the race to a single food item.
#[derive(Debug, Clone, Copy)]
struct FoodRank {
    dist: i8,
    index: usize,
    first_move: Direction,
}

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    config: Config,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    pub fn new(config: Config) -> Self {
        Bot { config }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "apiversion": "1",
            "author": self.config.appearance.author,
            "color": self.config.appearance.color,
            "head": self.config.appearance.head,
            "tail": self.config.appearance.tail,
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, _game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME START");
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, _game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME OVER");
    }

    /// Computes and returns the next move for our snake.
    /// Corresponds to POST /move endpoint.
    ///
    /// Always produces a legal-looking direction: board validation
    /// failures and degenerate states degrade to a fallback move
    /// instead of propagating an error to the game protocol.
    pub fn get_move(&self, _game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        let chosen_move = match self.choose_astar_move(board, you) {
            Ok(direction) => direction,
            Err(e) => {
                error!("Turn {}: move selection failed ({}); using fallback", turn, e);
                self.fallback_move(board, you)
            }
        };

        info!("Turn {}: chose {}", turn, chosen_move.as_str());

        json!({ "move": chosen_move.as_str() })
    }

    /// Ranks every snake's race to every food and returns the move
    /// toward the food where our snake's relative standing is best.
    fn choose_astar_move(&self, board: &Board, you: &Battlesnake) -> Result<Direction, String> {
        if board.food.is_empty() {
            warn!("No food on the board; falling back to first open cell");
            return Ok(self.fallback_move(board, you));
        }

        let you_index = board
            .snakes
            .iter()
            .position(|s| s.id == you.id)
            .ok_or_else(|| format!("Snake {} is not on the board", you.id))?;

        let rankings = self.rank_snakes_by_distance(board)?;

        // Our rank position per food, 0 = leading the race.
        let mut standings = Vec::with_capacity(rankings.len());
        for (i, row) in rankings.iter().enumerate() {
            if self.config.diagnostics.log_rankings {
                info!("Rankings for food {}: {:?}", i, row);
            }
            let position = row
                .iter()
                .position(|rank| rank.index == you_index)
                .ok_or_else(|| {
                    format!("Snake index {} missing from ranking row {}", you_index, i)
                })?;
            standings.push(position);
        }

        let mut best = 0;
        for candidate in 1..rankings.len() {
            if Self::better_target(&rankings, &standings, candidate, best) {
                best = candidate;
            }
        }

        Ok(rankings[best][standings[best]].first_move)
    }

    /// For each food item, the full field of snakes ordered by the
    /// distance they would have to travel to get there. Each search
    /// rebuilds the grid with the searching snake's own head-to-head
    /// extension, so contested cells are judged from its perspective.
    fn rank_snakes_by_distance(&self, board: &Board) -> Result<Vec<Vec<FoodRank>>, String> {
        let max_width = self.config.limits.max_board_width;
        let max_height = self.config.limits.max_board_height;

        let mut rankings = Vec::with_capacity(board.food.len());
        for food in &board.food {
            let mut row = Vec::with_capacity(board.snakes.len());
            for (index, snake) in board.snakes.iter().enumerate() {
                let mut grid = Grid::from_board(board, max_width, max_height)?;
                grid.extend_for_snake(board, snake);
                let result = shortest_path(&grid, &snake.head, food);
                row.push(FoodRank {
                    dist: result.cost,
                    index,
                    first_move: result.first_move,
                });
            }
            row.sort_unstable_by_key(|rank| rank.dist);
            rankings.push(row);
        }
        Ok(rankings)
    }

    /// True when food `a` is a better target than food `b`: a lower
    /// rank position wins outright; on equal positions the closer race
    /// wins, measured as our distance gap behind the row's leader.
    fn better_target(
        rankings: &[Vec<FoodRank>],
        standings: &[usize],
        a: usize,
        b: usize,
    ) -> bool {
        if standings[a] != standings[b] {
            return standings[a] < standings[b];
        }
        Self::leader_gap(&rankings[a], standings[a]) < Self::leader_gap(&rankings[b], standings[b])
    }

    fn leader_gap(row: &[FoodRank], position: usize) -> i16 {
        row[position].dist as i16 - row[0].dist as i16
    }

    /// Last-resort move: the first of our four candidate cells that is
    /// in-bounds and unoccupied, or the default direction when none is.
    fn fallback_move(&self, board: &Board, you: &Battlesnake) -> Direction {
        if let Ok(grid) = Grid::from_board(
            board,
            self.config.limits.max_board_width,
            self.config.limits.max_board_height,
        ) {
            for dir in Direction::all() {
                let next = dir.apply(&you.head);
                if grid.in_bounds(&next) && !grid.is_blocked(&next) {
                    return dir;
                }
            }
        }
        DEFAULT_DIRECTION
    }
}

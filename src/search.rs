// Best-first shortest-path search over the occupancy grid
//
// A* with the Manhattan distance heuristic on the 4-connected board.
// Each node carries the direction of the very first step taken from
// the start, so the result can be reported without reconstructing the
// path. Unit step cost and an admissible heuristic make the first pop
// of the target optimal.

use log::warn;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::Grid;
use crate::types::{Coord, Direction};

/// Sentinel cost returned when the start has no legal first move.
/// Never a real distance; callers must prefer any alternative.
pub const UNREACHABLE_COST: i8 = 127;

/// Direction reported alongside the sentinel cost.
pub const DEFAULT_DIRECTION: Direction = Direction::Up;

/// Outcome of one search. `found` distinguishes an optimal result from
/// the best-effort fallback produced when the open set empties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathResult {
    pub cost: i8,
    pub first_move: Direction,
    pub found: bool,
}

/// Open-set entry, ordered by heuristic-plus-cost. The first-move tag
/// is stamped on the start's direct successors and then inherited
/// unchanged by everything expanded beneath them.
#[derive(Debug, Clone, Copy)]
struct Entry {
    dist: i8,
    cost: i8,
    pos: Coord,
    first_move: Direction,
}

impl Entry {
    fn new(pos: Coord, target: &Coord, cost: i8, first_move: Direction) -> Self {
        Entry {
            dist: pos.manhattan(target),
            cost,
            pos,
            first_move,
        }
    }

    fn key(&self) -> i8 {
        self.dist.saturating_add(self.cost)
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the minimum key. Equal-key order
        // is unspecified.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

/// Tracks cells already enqueued during one search, parallel to the
/// occupancy grid.
struct Visited {
    width: i32,
    cells: Vec<bool>,
}

impl Visited {
    fn new(grid: &Grid) -> Self {
        Visited {
            width: grid.width(),
            cells: vec![false; (grid.width() * grid.height()) as usize],
        }
    }

    fn contains(&self, coord: &Coord) -> bool {
        self.cells[(coord.y * self.width + coord.x) as usize]
    }

    fn insert(&mut self, coord: &Coord) {
        self.cells[(coord.y * self.width + coord.x) as usize] = true;
    }
}

/// Finds the cheapest path from `start` to `target` and reports its
/// cost together with the first step to take.
///
/// When the target is unreachable the search degrades instead of
/// failing: it returns the heuristic distance and first move of a
/// neighbor generated by the last expansion (`found` = false), or the
/// sentinel cost and default direction when the start had no legal
/// first move at all.
pub fn shortest_path(grid: &Grid, start: &Coord, target: &Coord) -> PathResult {
    let mut open: BinaryHeap<Entry> = BinaryHeap::with_capacity(
        (grid.width() * grid.height()) as usize,
    );
    let mut visited = Visited::new(grid);
    visited.insert(start);

    // The start's own first-move tag is a placeholder; its direct
    // successors stamp their own direction below.
    let mut cur = Entry::new(*start, target, 0, DEFAULT_DIRECTION);
    let mut last_generated = successors(grid, &mut visited, &cur, target, None);
    for entry in last_generated.iter().flatten() {
        open.push(*entry);
    }

    while let Some(popped) = open.pop() {
        cur = popped;
        if cur.pos == *target {
            return PathResult {
                cost: cur.cost,
                first_move: cur.first_move,
                found: true,
            };
        }
        last_generated = successors(grid, &mut visited, &cur, target, Some(cur.first_move));
        for entry in last_generated.iter().flatten() {
            open.push(*entry);
        }
    }

    // Open set exhausted without reaching the target. Fall back to a
    // neighbor from the last examined expansion if one exists.
    for entry in last_generated.iter().flatten() {
        warn!(
            "No path from ({}, {}) to ({}, {}); degrading to best-effort move {}",
            start.x,
            start.y,
            target.x,
            target.y,
            entry.first_move.as_str()
        );
        return PathResult {
            cost: entry.dist,
            first_move: entry.first_move,
            found: false,
        };
    }

    warn!(
        "No legal move from ({}, {}); returning sentinel",
        start.x, start.y
    );
    PathResult {
        cost: UNREACHABLE_COST,
        first_move: DEFAULT_DIRECTION,
        found: false,
    }
}

/// Generates the in-bounds, unblocked, unvisited neighbors of `cur` in
/// fixed order Down, Up, Left, Right. Each generated cell is marked
/// visited immediately, so it is enqueued at most once. When
/// `inherited` is None (the start node), each successor stamps its own
/// direction as the first move; otherwise the parent's first move is
/// propagated unchanged.
fn successors(
    grid: &Grid,
    visited: &mut Visited,
    cur: &Entry,
    target: &Coord,
    inherited: Option<Direction>,
) -> [Option<Entry>; 4] {
    let mut generated: [Option<Entry>; 4] = [None; 4];
    let order = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    for (slot, dir) in order.iter().enumerate() {
        let next = dir.apply(&cur.pos);
        if !grid.in_bounds(&next) {
            continue;
        }
        if visited.contains(&next) || grid.is_blocked(&next) {
            continue;
        }
        visited.insert(&next);
        generated[slot] = Some(Entry::new(
            next,
            target,
            cur.cost.saturating_add(1),
            inherited.unwrap_or(*dir),
        ));
    }

    generated
}

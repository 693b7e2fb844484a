// Integration tests for the full move-selection pipeline
//
// Each test builds a complete board state by hand and drives it
// through Bot::get_move, the same entry point the /move handler uses.

use pathrank_snake::bot::Bot;
use pathrank_snake::config::Config;
use pathrank_snake::types::{Battlesnake, Board, Coord, Game};

fn make_snake(id: &str, body: &[(i32, i32)]) -> Battlesnake {
    let coords: Vec<Coord> = body.iter().map(|&(x, y)| Coord { x, y }).collect();
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health: 100,
        head: coords[0],
        length: coords.len() as i32,
        body: coords,
        latency: "0".to_string(),
        shout: None,
    }
}

fn make_game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: Default::default(),
        timeout: 500,
    }
}

fn make_bot() -> Bot {
    Bot::new(Config::default_hardcoded())
}

/// Alone on the board with one food item, the bot heads straight for
/// it: the cost of the race equals the Manhattan distance and the
/// first step points at the food.
#[test]
fn test_solo_snake_moves_toward_only_food() {
    let us = make_snake("us", &[(5, 5), (5, 4), (5, 3)]);
    let board = Board {
        width: 11,
        height: 11,
        food: vec![Coord { x: 5, y: 9 }],
        snakes: vec![us.clone()],
        hazards: vec![],
    };

    let response = make_bot().get_move(&make_game(), &1, &board, &us);
    assert_eq!(response["move"].as_str().unwrap(), "up");
}

/// An equal-length opponent sits one cell past the shared neighbor
/// (5, 6). Stepping up would risk losing a head-to-head next turn, so
/// the contested cell is treated as occupied and the bot detours
/// around it.
#[test]
fn test_avoids_losing_head_to_head() {
    let us = make_snake("us", &[(5, 5), (5, 4)]);
    let opp = make_snake("opp", &[(5, 7), (5, 8)]);
    let board = Board {
        width: 11,
        height: 11,
        food: vec![Coord { x: 5, y: 9 }],
        snakes: vec![us.clone(), opp],
        hazards: vec![],
    };

    let response = make_bot().get_move(&make_game(), &1, &board, &us);
    let chosen = response["move"].as_str().unwrap();
    assert!(
        chosen == "left" || chosen == "right",
        "expected a detour around the contested cell, got {}",
        chosen
    );
}

/// A strictly shorter opponent poses no head-to-head threat; the bot
/// keeps the direct route.
#[test]
fn test_ignores_shorter_opponent_near_head() {
    let us = make_snake("us", &[(5, 5), (5, 4), (5, 3)]);
    let opp = make_snake("opp", &[(4, 6), (3, 6)]);
    let board = Board {
        width: 11,
        height: 11,
        food: vec![Coord { x: 5, y: 9 }],
        snakes: vec![us.clone(), opp],
        hazards: vec![],
    };

    let response = make_bot().get_move(&make_game(), &1, &board, &us);
    assert_eq!(response["move"].as_str().unwrap(), "up");
}

/// With two foods and a faster opponent on one of them, the bot takes
/// the race it can win.
#[test]
fn test_prefers_race_it_leads() {
    let us = make_snake("us", &[(5, 5), (5, 4)]);
    let opp = make_snake("opp", &[(1, 1), (1, 0)]);
    let board = Board {
        width: 11,
        height: 11,
        food: vec![Coord { x: 1, y: 3 }, Coord { x: 5, y: 7 }],
        snakes: vec![us.clone(), opp],
        hazards: vec![],
    };

    let response = make_bot().get_move(&make_game(), &1, &board, &us);
    assert_eq!(response["move"].as_str().unwrap(), "up");
}

/// Identical snapshots produce identical decisions.
#[test]
fn test_identical_snapshots_yield_identical_moves() {
    let us = make_snake("us", &[(2, 2), (2, 1)]);
    let opp = make_snake("opp", &[(8, 8), (8, 9)]);
    let board = Board {
        width: 11,
        height: 11,
        food: vec![
            Coord { x: 0, y: 5 },
            Coord { x: 5, y: 0 },
            Coord { x: 10, y: 10 },
        ],
        snakes: vec![us.clone(), opp],
        hazards: vec![],
    };

    let bot = make_bot();
    let first = bot.get_move(&make_game(), &7, &board, &us);
    let second = bot.get_move(&make_game(), &7, &board, &us);
    assert_eq!(first, second);
}

use serde::{Deserialize, Serialize};

use crate::env::Vec2D;
use crate::game::Maze;
use crate::search::{Heuristic, Position, Score};

/// Heuristics for the maze game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum MazeHeuristic {
    /// Only the game score.
    #[default]
    Score,
    Better(BetterHeuristic),
}

impl Heuristic<Maze> for MazeHeuristic {
    fn eval(&self, maze: &Maze) -> f64 {
        match self {
            MazeHeuristic::Score => Score.eval(maze),
            MazeHeuristic::Better(heuristic) => heuristic.eval(maze),
        }
    }
}

/// Rewards being close to food, capsules and ghosts, as well as ghosts being
/// scared, on top of the game score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BetterHeuristic {
    food: f64,
    ghost: f64,
    capsule: f64,
}

impl Default for BetterHeuristic {
    fn default() -> Self {
        Self {
            food: 20.0,
            ghost: 15.0,
            capsule: 10.0,
        }
    }
}

impl Heuristic<Maze> for BetterHeuristic {
    fn eval(&self, maze: &Maze) -> f64 {
        if maze.is_lose() {
            return f64::NEG_INFINITY;
        }
        if maze.is_win() {
            return f64::INFINITY;
        }

        let food = closest(maze.food().map(|p| manhattan(p, maze.pacman)));
        let ghost = closest(maze.ghosts.iter().map(|g| (g.pos - maze.pacman).euclidean()));
        let capsule = closest(maze.capsules().map(|p| manhattan(p, maze.pacman)));
        let scared = maze.ghosts.iter().map(|g| g.scared as f64).sum::<f64>();

        self.food * inverse(food)
            + self.ghost * inverse(ghost)
            + self.capsule * inverse(capsule)
            + scared
            + maze.score
    }
}

pub(crate) fn manhattan(a: Vec2D, b: Vec2D) -> f64 {
    (a - b).manhattan() as f64
}

/// Smallest distance, `None` if there is nothing.
pub(crate) fn closest(distances: impl Iterator<Item = f64>) -> Option<f64> {
    distances.min_by(f64::total_cmp)
}

/// Missing targets do not count, distances below one are clamped.
fn inverse(distance: Option<f64>) -> f64 {
    distance.map_or(0.0, |d| 1.0 / d.max(1.0))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::Direction;

    #[test]
    fn better_heuristic() {
        let maze = Maze::parse(
            r#"
            %%%%%%%%
            %P  . G%
            %o%%%%%%
            %%%%%%%%"#,
        )
        .unwrap();
        let h = BetterHeuristic::default();
        // food 3 away, ghost 5 away, capsule 1 away
        let expected = 20.0 / 3.0 + 15.0 / 5.0 + 10.0;
        assert!((h.eval(&maze) - expected).abs() < 1e-9);

        let scared = maze.successor(0, Direction::Down);
        // the capsule is gone, 40 scared moves, 1 point lost
        let expected = 20.0 / 4.0 + 15.0 / 26f64.sqrt() + 40.0 - 1.0;
        assert!((h.eval(&scared) - expected).abs() < 1e-9);
    }

    #[test]
    fn better_heuristic_terminal() {
        let maze = Maze::parse("%%%%\n%P.%\n%%%%").unwrap();
        let won = maze.successor(0, Direction::Right);
        assert_eq!(BetterHeuristic::default().eval(&won), f64::INFINITY);

        let maze = Maze::parse("%%%%%\n%PG.%\n%%%%%").unwrap();
        let lost = maze.successor(0, Direction::Right);
        assert_eq!(BetterHeuristic::default().eval(&lost), f64::NEG_INFINITY);
        assert_eq!(MazeHeuristic::Score.eval(&lost), lost.score);
    }

    #[test]
    fn heuristic_config() {
        let h: MazeHeuristic = serde_json::from_str(r#"{"Better":{"food":5.0}}"#).unwrap();
        assert_eq!(
            h,
            MazeHeuristic::Better(BetterHeuristic {
                food: 5.0,
                ..Default::default()
            })
        );
        assert!(serde_json::from_str::<MazeHeuristic>(r#"{"Better":{"fod":5.0}}"#).is_err());
        let h: MazeHeuristic = serde_json::from_str(r#""Score""#).unwrap();
        assert_eq!(h, MazeHeuristic::Score);
    }
}

use rand::{rngs::SmallRng, seq::IteratorRandom, SeedableRng};

use crate::search::Position;
use crate::{Error, Result};

/// Chooses uniformly between the legal actions.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn choose<P: Position>(&self, position: &P, agent: usize) -> Result<P::Action> {
        let mut rng = SmallRng::from_entropy();
        position
            .legal_actions(agent)
            .into_iter()
            .choose(&mut rng)
            .ok_or(Error::NoDecision)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::Maze;

    #[test]
    fn random_moves() {
        let maze = Maze::parse(
            r#"
            %%%%%%
            %P .G%
            %% %%%
            %%%%%%"#,
        )
        .unwrap();
        for _ in 0..20 {
            let dir = RandomAgent.choose(&maze, 0).unwrap();
            assert!(maze.legal_actions(0).contains(&dir));
        }
        let ghost = maze.legal_actions(1);
        assert!(ghost.contains(&RandomAgent.choose(&maze, 1).unwrap()));

        let won = Maze::parse("%%%%\n%P %\n%%%%").unwrap();
        assert!(matches!(RandomAgent.choose(&won, 0), Err(Error::NoDecision)));
    }
}

use std::fmt::{self, Debug};

use owo_colors::{OwoColorize, Style};

use super::{Cell, Grid};
use crate::env::{Direction, MoveRequest, Vec2D};
use crate::search::Position;
use crate::{Error, Result};

/// Points lost for every pacman move.
pub const TIME_PENALTY: f64 = 1.0;
pub const FOOD_SCORE: f64 = 10.0;
pub const GHOST_SCORE: f64 = 200.0;
/// Bonus for eating the last food.
pub const WIN_SCORE: f64 = 500.0;
/// Penalty for being caught.
pub const LOSE_SCORE: f64 = 500.0;
/// Number of ghost moves a capsule scares the ghosts.
pub const SCARED_TIME: u32 = 40;

/// The state of a maze game.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Outcome {
    None,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub pos: Vec2D,
    /// Where the ghost respawns after being eaten.
    pub start: Vec2D,
    /// Last move, ghosts do not turn around if they can avoid it.
    pub dir: Direction,
    /// Remaining moves the ghost is scared.
    pub scared: u32,
}

impl Ghost {
    pub fn new(pos: Vec2D) -> Ghost {
        Ghost {
            pos,
            start: pos,
            dir: Direction::Stop,
            scared: 0,
        }
    }
}

/// Pacman (agent 0) collects food in a maze while the ghosts (agents 1..)
/// hunt him.
#[derive(Clone, PartialEq)]
pub struct Maze {
    pub grid: Grid,
    pub pacman: Vec2D,
    pub ghosts: Vec<Ghost>,
    pub score: f64,
    outcome: Outcome,
}

impl Maze {
    /// Parses a textual layout.
    ///
    /// `%` are walls, `.` food, `o` capsules, `P` is pacman and `G` a ghost.
    /// Ghosts are numbered in reading order. Blank lines around the layout
    /// and the indentation shared by all rows are ignored, any other space
    /// is a free cell.
    pub fn parse(txt: &str) -> Result<Maze> {
        let lines = layout_rows(txt);
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        let mut grid = Grid::new(width, height);
        let mut pacman = None;
        let mut ghosts = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(Error::InvalidLayout {
                    line: row + 1,
                    expected: width,
                    got,
                });
            }

            let y = (height - row - 1) as i16;
            for (x, c) in line.chars().enumerate() {
                let p = Vec2D::new(x as _, y);
                grid[p] = match c {
                    '%' => Cell::Wall,
                    '.' => Cell::Food,
                    'o' => Cell::Capsule,
                    'P' => {
                        if pacman.replace(p).is_some() {
                            return Err(Error::MultiplePacman);
                        }
                        Cell::Free
                    }
                    'G' => {
                        ghosts.push(Ghost::new(p));
                        Cell::Free
                    }
                    _ => Cell::Free,
                };
            }
        }

        let pacman = pacman.ok_or(Error::MissingPacman)?;
        let outcome = if grid.count(Cell::Food) == 0 {
            Outcome::Won
        } else {
            Outcome::None
        };
        Ok(Maze {
            grid,
            pacman,
            ghosts,
            score: 0.0,
            outcome,
        })
    }

    /// Loads the game state from the provided request.
    pub fn from_request(request: &MoveRequest) -> Result<Maze> {
        let mut maze = Maze::parse(&request.layout)?;
        maze.score = request.score;
        for (ghost, &scared) in maze.ghosts.iter_mut().zip(&request.scared) {
            ghost.scared = scared;
        }
        Ok(maze)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Remaining food.
    pub fn food(&self) -> impl Iterator<Item = Vec2D> + '_ {
        self.grid.positions(Cell::Food)
    }

    pub fn capsules(&self) -> impl Iterator<Item = Vec2D> + '_ {
        self.grid.positions(Cell::Capsule)
    }

    /// Returns the legal moves of an agent, pacman may stop, ghosts may not.
    /// Ghosts only turn around in dead ends. Finished games have no moves.
    pub fn valid_moves(&self, agent: usize) -> Vec<Direction> {
        if self.outcome != Outcome::None {
            return Vec::new();
        }

        if agent == 0 {
            let mut moves = Direction::iter()
                .filter(|&d| self.grid.passable(self.pacman.apply(d)))
                .collect::<Vec<_>>();
            moves.push(Direction::Stop);
            moves
        } else {
            let Some(ghost) = self.ghosts.get(agent - 1) else {
                return Vec::new();
            };
            let mut moves = Direction::iter()
                .filter(|&d| self.grid.passable(ghost.pos.apply(d)))
                .collect::<Vec<_>>();
            if moves.len() > 1 {
                let reverse = ghost.dir.invert();
                moves.retain(|&d| d != reverse);
            }
            moves
        }
    }

    /// Executes a move of one agent.
    /// This method also checks for eating and collisions with the ghosts.
    pub fn step(&mut self, agent: usize, dir: Direction) {
        assert!(
            self.valid_moves(agent).contains(&dir),
            "illegal move {dir:?} of agent {agent}"
        );

        if agent == 0 {
            self.pacman = self.pacman.apply(dir);
            self.score -= TIME_PENALTY;

            match self.grid[self.pacman] {
                Cell::Food => {
                    self.grid[self.pacman] = Cell::Free;
                    self.score += FOOD_SCORE;
                    if self.grid.count(Cell::Food) == 0 {
                        self.score += WIN_SCORE;
                        self.outcome = Outcome::Won;
                    }
                }
                Cell::Capsule => {
                    self.grid[self.pacman] = Cell::Free;
                    for ghost in &mut self.ghosts {
                        ghost.scared = SCARED_TIME;
                    }
                }
                _ => {}
            }

            for i in 0..self.ghosts.len() {
                self.collide(i);
            }
        } else {
            let ghost = &mut self.ghosts[agent - 1];
            ghost.pos = ghost.pos.apply(dir);
            ghost.dir = dir;
            ghost.scared = ghost.scared.saturating_sub(1);

            self.collide(agent - 1);
        }
    }

    fn collide(&mut self, i: usize) {
        let ghost = &mut self.ghosts[i];
        if self.outcome != Outcome::None || ghost.pos != self.pacman {
            return;
        }

        if ghost.scared > 0 {
            self.score += GHOST_SCORE;
            *ghost = Ghost::new(ghost.start);
        } else {
            self.score -= LOSE_SCORE;
            self.outcome = Outcome::Lost;
        }
    }
}

/// Rows of a layout without surrounding blank lines and shared indentation.
fn layout_rows(txt: &str) -> Vec<&str> {
    let lines = txt.lines().collect::<Vec<_>>();
    let blank = |l: &&str| l.trim().is_empty();
    let Some(start) = lines.iter().position(|l| !blank(l)) else {
        return Vec::new();
    };
    let end = lines.iter().rposition(|l| !blank(l)).map_or(start, |i| i + 1);
    let lines = &lines[start..end];

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);
    lines
        .iter()
        .map(|&l| l.get(indent..).unwrap_or_default())
        .collect()
}

impl Position for Maze {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, agent: usize) -> Vec<Direction> {
        self.valid_moves(agent)
    }

    fn successor(&self, agent: usize, action: Direction) -> Maze {
        let mut maze = self.clone();
        maze.step(agent, action);
        maze
    }

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }

    fn is_lose(&self) -> bool {
        self.outcome == Outcome::Lost
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn ghost_style(ghost: &Ghost) -> Style {
            if ghost.scared > 0 {
                Style::new().white()
            } else {
                Style::new().red()
            }
        }

        writeln!(f, "Maze {{")?;

        for y in (0..self.grid.height as i16).rev() {
            write!(f, "  ")?;
            for x in 0..self.grid.width as i16 {
                let p = Vec2D::new(x, y);
                if p == self.pacman {
                    write!(f, "{}", "P".yellow())?;
                } else if let Some(ghost) = self.ghosts.iter().find(|g| g.pos == p) {
                    write!(f, "{}", "G".style(ghost_style(ghost)))?;
                } else {
                    match self.grid[p] {
                        Cell::Wall => write!(f, "{}", "%".blue())?,
                        Cell::Capsule => write!(f, "{}", "o".bright_white())?,
                        cell => write!(f, "{cell:?}")?,
                    }
                }
            }
            writeln!(f)?;
        }

        write!(f, "  Ghosts: [")?;
        for (i, ghost) in self.ghosts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}: {})", i + 1, ghost.scared)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "  Score: {} {:?}", self.score, self.outcome)?;

        writeln!(f, "}}")
    }
}

use std::ops::{Index, IndexMut};

use crate::env::Vec2D;

/// Represents a single tile of the maze
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Free,
    Wall,
    Food,
    /// Eating it scares the ghosts
    Capsule,
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Cell::Free => write!(f, " "),
            Cell::Wall => write!(f, "%"),
            Cell::Food => write!(f, "."),
            Cell::Capsule => write!(f, "o"),
        }
    }
}

/// The static tiles of the maze, y = 0 is the bottom row.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn has(&self, p: Vec2D) -> bool {
        0 <= p.x && p.x < self.width as _ && 0 <= p.y && p.y < self.height as _
    }

    /// Inside the grid and not a wall.
    pub fn passable(&self, p: Vec2D) -> bool {
        self.has(p) && self[p] != Cell::Wall
    }

    /// All positions of the given cell type.
    pub fn positions(&self, cell: Cell) -> impl Iterator<Item = Vec2D> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == cell)
            .map(|(i, _)| Vec2D::new((i % self.width) as _, (i / self.width) as _))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }
}

impl Index<Vec2D> for Grid {
    type Output = Cell;

    fn index(&self, p: Vec2D) -> &Self::Output {
        assert!(self.has(p), "{p:?} is outside of the grid");
        &self.cells[p.x as usize + p.y as usize * self.width]
    }
}

impl IndexMut<Vec2D> for Grid {
    fn index_mut(&mut self, p: Vec2D) -> &mut Self::Output {
        assert!(self.has(p), "{p:?} is outside of the grid");
        &mut self.cells[p.x as usize + p.y as usize * self.width]
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {{")?;
        for y in (0..self.height as i16).rev() {
            write!(f, "  ")?;
            for x in 0..self.width as i16 {
                write!(f, "{:?}", self[Vec2D::new(x, y)])?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")?;
        Ok(())
    }
}

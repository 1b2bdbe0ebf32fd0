//! World grid module - the fixed tile map
//!
//! The grid is a 10x10 array of region codes stored as a flat, row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..9 (top to bottom).
//! Queries never fail: out-of-bounds coordinates and empty cells both resolve
//! to [`RegionCode::SENTINEL`].

use log::warn;

use crate::region::RegionRegistry;
use crate::types::{RegionCode, GRID_HEIGHT, GRID_WIDTH};

/// Total number of tiles on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// A stored grid cell: `None` is an empty (void) tile.
pub type Cell = Option<RegionCode>;

/// Starter map, north at the top.
pub const DEFAULT_LAYOUT: &str = "
    MA MA MA MA MA MA MA EG EG EG
    MA MA MA MA MA MA MA EG EG EG
    XX MA MA MA MA MA KE EG EG EG
    XX XX MA MA MA KE KE EG EG EG
    XX XX XX KE KE KE KE EG EG EG
    XX XX XX KE KE TZ TZ TZ EG EG
    XX XX XX KE TZ TZ TZ TZ EG EG
    XX XX XX KE TZ TZ TZ TZ ZA ZA
    XX XX XX XX TZ TZ TZ ZA ZA ZA
    XX XX XX XX TZ TZ ZA ZA ZA ZA
";

/// The world map - 10 columns x 10 rows, immutable after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl WorldGrid {
    /// Create a grid with every tile empty
    pub fn empty() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Create a grid from typed rows (`rows[y][x]`)
    pub fn from_rows(rows: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) -> Self {
        let mut grid = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            let start = y * GRID_WIDTH as usize;
            grid.cells[start..start + GRID_WIDTH as usize].copy_from_slice(row);
        }
        grid
    }

    /// Parse a text layout.
    ///
    /// Each non-blank line is a row of whitespace-separated two-letter codes;
    /// `..` or `--` marks an empty tile. Missing tiles stay empty, extra rows and
    /// columns are ignored, and malformed tokens become empty tiles. Codes are
    /// stored as written even if no registry knows them.
    ///
    /// # Examples
    ///
    /// ```
    /// use border_blaster_core::WorldGrid;
    /// use border_blaster_types::RegionCode;
    ///
    /// let grid = WorldGrid::parse("EG .. KE");
    /// assert_eq!(grid.region_at(0, 0).as_str(), "EG");
    /// assert_eq!(grid.region_at(1, 0), RegionCode::SENTINEL);
    /// assert_eq!(grid.region_at(-1, 0), RegionCode::SENTINEL);
    /// ```
    pub fn parse(layout: &str) -> Self {
        let mut grid = Self::empty();
        let rows = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(GRID_HEIGHT as usize);

        for (y, line) in rows.enumerate() {
            for (x, token) in line.split_whitespace().take(GRID_WIDTH as usize).enumerate() {
                let cell = match token {
                    ".." | "--" => None,
                    _ => {
                        let code = RegionCode::parse(token);
                        if code.is_none() {
                            warn!("layout token {token:?} at ({x}, {y}) is not a region code");
                        }
                        code
                    }
                };
                grid.cells[y * GRID_WIDTH as usize + x] = cell;
            }
        }
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    /// Get width of the grid
    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    /// Get height of the grid
    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    pub fn in_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_some()
    }

    /// Raw stored cell at (x, y)
    /// Returns None if out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Region code at (x, y); the sentinel for empty or out-of-bounds tiles.
    pub fn region_at(&self, x: i8, y: i8) -> RegionCode {
        self.cell(x, y)
            .flatten()
            .unwrap_or(RegionCode::SENTINEL)
    }

    /// Every tile in row-major order as `(x, y, region_at(x, y))`.
    pub fn tiles(&self) -> impl Iterator<Item = (i8, i8, RegionCode)> + '_ {
        self.cells.iter().enumerate().map(|(i, cell)| {
            let x = (i % GRID_WIDTH as usize) as i8;
            let y = (i / GRID_WIDTH as usize) as i8;
            (x, y, cell.unwrap_or(RegionCode::SENTINEL))
        })
    }

    /// Tiles holding a code the registry does not know.
    ///
    /// Such tiles are still valid; they display as the sentinel region.
    pub fn unresolved_cells<'a>(
        &'a self,
        registry: &'a RegionRegistry,
    ) -> impl Iterator<Item = (i8, i8, RegionCode)> + 'a {
        self.tiles()
            .filter(move |&(_, _, code)| !registry.contains(code))
    }
}

impl Default for WorldGrid {
    fn default() -> Self {
        Self::parse(DEFAULT_LAYOUT)
    }
}

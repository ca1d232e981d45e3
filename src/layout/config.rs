//! Classroom shapes.

use crate::error::SeatingError;
use crate::model::{Seat, Table};

/// Grouped classroom: `rows` × `groups` tables of `seats_per_group` seats.
///
/// # Examples
///
/// ```
/// use seatwise::layout::ClassroomConfig;
///
/// let config = ClassroomConfig::new(6, 5, 2);
/// assert_eq!(config.capacity(), 60);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ClassroomConfig {
    /// Columns of tables.
    pub groups: usize,
    pub rows: usize,
    /// Seats per table.
    pub seats_per_group: usize,
}

impl Default for ClassroomConfig {
    fn default() -> Self {
        Self {
            groups: 6,
            rows: 5,
            seats_per_group: 2,
        }
    }
}

impl ClassroomConfig {
    pub fn new(groups: usize, rows: usize, seats_per_group: usize) -> Self {
        Self {
            groups,
            rows,
            seats_per_group,
        }
    }

    pub fn capacity(&self) -> usize {
        self.groups * self.rows * self.seats_per_group
    }

    pub fn validate(&self) -> Result<(), SeatingError> {
        if self.groups == 0 || self.rows == 0 || self.seats_per_group == 0 {
            return Err(SeatingError::InvalidClassroom(format!(
                "groups, rows and seats per group must be positive, got {}x{}x{}",
                self.groups, self.rows, self.seats_per_group
            )));
        }
        Ok(())
    }

    /// Tables in row-major order. Table `(row, group)` has id
    /// `row * groups + group`; its seats occupy grid columns
    /// `group * seats_per_group ..`.
    fn build_tables(&self) -> Vec<Table> {
        let mut tables = Vec::with_capacity(self.rows * self.groups);
        for row in 0..self.rows {
            for group in 0..self.groups {
                let id = row * self.groups + group;
                let mut table = Table::new(id);
                table.seats = (0..self.seats_per_group)
                    .map(|k| Seat::empty(row, group * self.seats_per_group + k, id))
                    .collect();
                tables.push(table);
            }
        }
        tables
    }
}

/// Flat grid of `rows` × `cols` seats cut into consecutive tables of
/// `seats_per_table` seats in row-major order. The last table may be short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub seats_per_table: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 8,
            seats_per_table: 4,
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize, seats_per_table: usize) -> Self {
        Self {
            rows,
            cols,
            seats_per_table,
        }
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    pub fn validate(&self) -> Result<(), SeatingError> {
        if self.rows == 0 || self.cols == 0 || self.seats_per_table == 0 {
            return Err(SeatingError::InvalidClassroom(format!(
                "rows, cols and seats per table must be positive, got {}x{}x{}",
                self.rows, self.cols, self.seats_per_table
            )));
        }
        Ok(())
    }

    fn build_tables(&self) -> Vec<Table> {
        let table_count = self.capacity().div_ceil(self.seats_per_table);
        let mut tables: Vec<Table> = (0..table_count).map(Table::new).collect();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let id = (row * self.cols + col) / self.seats_per_table;
                tables[id].seats.push(Seat::empty(row, col, id));
            }
        }
        tables
    }
}

/// The physical shape a run seats students into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum ClassroomLayout {
    Groups(ClassroomConfig),
    Grid(GridConfig),
}

impl Default for ClassroomLayout {
    fn default() -> Self {
        ClassroomLayout::Groups(ClassroomConfig::default())
    }
}

impl From<ClassroomConfig> for ClassroomLayout {
    fn from(config: ClassroomConfig) -> Self {
        ClassroomLayout::Groups(config)
    }
}

impl From<GridConfig> for ClassroomLayout {
    fn from(config: GridConfig) -> Self {
        ClassroomLayout::Grid(config)
    }
}

impl ClassroomLayout {
    /// Total number of seats.
    pub fn capacity(&self) -> usize {
        match self {
            ClassroomLayout::Groups(c) => c.capacity(),
            ClassroomLayout::Grid(g) => g.capacity(),
        }
    }

    pub fn validate(&self) -> Result<(), SeatingError> {
        match self {
            ClassroomLayout::Groups(c) => c.validate(),
            ClassroomLayout::Grid(g) => g.validate(),
        }
    }

    /// Builds the empty tables for this layout, ids `0..n` in row-major order.
    pub fn build_tables(&self) -> Vec<Table> {
        match self {
            ClassroomLayout::Groups(c) => c.build_tables(),
            ClassroomLayout::Grid(g) => g.build_tables(),
        }
    }
}

//! All game entity types: plain data plus the small lookups the engine needs.
//!
//! The grid stores only static terrain.  The player, adversaries and bullets
//! live in a separate occupancy layer on `GameState` and are looked up by
//! coordinate, so an occupant never hides what a cell really is.

// ── Terrain ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Path,
    /// Single-use pickup; reverts to `Path` once collected.
    Food,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from `Up`.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// (row, col) offset of one step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub const fn step(self, pos: Position) -> Position {
        let (dr, dc) = self.delta();
        Position::new(pos.row + dr, pos.col + dc)
    }
}

/// Rectangular terrain map, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// A grid of solid wall, the starting point for maze generation.
    pub fn filled(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            cells: vec![CellKind::Wall; len],
        }
    }

    /// Build a grid from rows of ASCII art: `#` wall, `*` food, `E` exit,
    /// anything else path.  Handy for hand-made layouts.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = Self::filled(width, height);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let kind = match ch {
                    '#' => CellKind::Wall,
                    '*' => CellKind::Food,
                    'E' => CellKind::Exit,
                    _ => CellKind::Path,
                };
                grid.set(Position::new(r as i32, c as i32), kind);
            }
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.height && pos.col >= 0 && pos.col < self.width
    }

    fn index(&self, pos: Position) -> usize {
        (pos.row * self.width + pos.col) as usize
    }

    /// Kind at `pos`, or `None` when out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        self.in_bounds(pos).then(|| self.cells[self.index(pos)])
    }

    /// Overwrite the kind at `pos`.  Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Position, kind: CellKind) {
        if self.in_bounds(pos) {
            let i = self.index(pos);
            self.cells[i] = kind;
        }
    }

    pub fn is_kind(&self, pos: Position, kind: CellKind) -> bool {
        self.get(pos) == Some(kind)
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(k) if k != CellKind::Wall)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (Position::new(i as i32 / width, i as i32 % width), kind))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }
}

// ── Occupants ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Position,
    /// Updated on every accepted move; shots travel this way.
    pub facing: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adversary {
    pub pos: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub pos: Position,
    pub dir: Direction,
}

// ── Stats, status & per-tick signals ──────────────────────────────────────────

pub const STARTING_LIVES: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Never decreases.
    pub score: u32,
    pub lives: u32,
    pub ammo: u32,
    pub level: u32,
    pub width: i32,
    pub height: i32,
}

impl Stats {
    pub fn new(width: i32, height: i32, lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            ammo: 0,
            level: 1,
            width,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// The exit was reached; the level must be regenerated before the next tick.
    LevelComplete,
    /// Terminal.
    GameOver,
}

/// Outcome of one call to `compute::step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Continue,
    LevelComplete,
    GameOver,
}

/// Player input for one tick.  "No input" is `None::<Intent>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Shoot,
}

impl Intent {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Intent::MoveUp => Some(Direction::Up),
            Intent::MoveDown => Some(Direction::Down),
            Intent::MoveLeft => Some(Direction::Left),
            Intent::MoveRight => Some(Direction::Right),
            Intent::Shoot => None,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire mutable world.  Owned by the driver and handed to the engine by
/// exclusive reference once per tick.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub player: Player,
    pub exit: Position,
    /// Processing order matters: earlier adversaries move first.
    pub adversaries: Vec<Adversary>,
    /// Overlay only; never written into `grid`.
    pub bullets: Vec<Bullet>,
    pub stats: Stats,
    pub status: GameStatus,
    /// Ticks since adversaries last moved.  Persists across levels.
    pub adversary_clock: u32,
}

impl GameState {
    /// Index of the adversary standing on `pos`, if any.
    pub fn adversary_at(&self, pos: Position) -> Option<usize> {
        self.adversaries.iter().position(|a| a.pos == pos)
    }

    pub fn bullet_at(&self, pos: Position) -> Option<&Bullet> {
        self.bullets.iter().find(|b| b.pos == pos)
    }

    /// `Path` cell holding no adversary.  No border check: generated boards
    /// keep the border solid wall.  The player's own cell counts as free;
    /// callers that must avoid it check separately.
    pub fn is_free_path(&self, pos: Position) -> bool {
        self.grid.is_kind(pos, CellKind::Path) && self.adversary_at(pos).is_none()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: &self.grid,
            player: &self.player,
            adversaries: &self.adversaries,
            bullets: &self.bullets,
            stats: &self.stats,
            status: self.status,
        }
    }
}

/// Read-only view of everything a renderer needs.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub player: &'a Player,
    pub adversaries: &'a [Adversary],
    pub bullets: &'a [Bullet],
    pub stats: &'a Stats,
    pub status: GameStatus,
}

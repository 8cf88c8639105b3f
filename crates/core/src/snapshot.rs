use crate::pieces::{CellOffset, Piece};
use crate::types::{BlockColor, Cell, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub shape: &'static [CellOffset],
    pub name: &'static str,
    pub color: BlockColor,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            shape: value.shape(),
            name: value.name(),
            color: value.color(),
            x: value.x,
            y: value.y,
        }
    }
}

impl PieceSnapshot {
    /// Grid coordinates the piece covers at its anchor
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .iter()
            .map(move |&(dx, dy)| (self.x.wrapping_add(dx), self.y.wrapping_add(dy)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub piece: PieceSnapshot,
    /// Whether the piece fits at its current anchor
    pub placeable: bool,
    pub score: u32,
    pub rows_cleared: u32,
    pub columns_cleared: u32,
    pub pieces_placed: u32,
    pub running: bool,
    pub seed: Option<u64>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[None; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.piece = PieceSnapshot::from(Piece::new(&[(0, 0)], BlockColor::SteelBlue));
        self.placeable = true;
        self.score = 0;
        self.rows_cleared = 0;
        self.columns_cleared = 0;
        self.pieces_placed = 0;
        self.running = true;
        self.seed = None;
    }

    pub fn game_over(&self) -> bool {
        !self.running
    }

    /// FNV-1a 64-bit hash over everything a frame shows
    ///
    /// Two snapshots that render identically hash identically.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a::new();
        for row in &self.grid {
            for cell in row {
                h.write_u8(cell.map(BlockColor::code).unwrap_or(0));
            }
        }
        for &(dx, dy) in self.piece.shape {
            h.write_u8(dx as u8);
            h.write_u8(dy as u8);
        }
        h.write_u8(self.piece.color.code());
        h.write_u8(self.piece.x as u8);
        h.write_u8(self.piece.y as u8);
        h.write_u8(self.placeable as u8);
        for counter in [
            self.score,
            self.rows_cleared,
            self.columns_cleared,
            self.pieces_placed,
        ] {
            for b in counter.to_le_bytes() {
                h.write_u8(b);
            }
        }
        h.write_u8(self.running as u8);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[None; GRID_SIZE as usize]; GRID_SIZE as usize],
            piece: PieceSnapshot::from(Piece::new(&[(0, 0)], BlockColor::SteelBlue)),
            placeable: true,
            score: 0,
            rows_cleared: 0,
            columns_cleared: 0,
            pieces_placed: 0,
            running: true,
            seed: None,
        };
        s.clear();
        s
    }
}

struct Fnv1a(u64);

impl Fnv1a {
    fn new() -> Self {
        Self(0xcbf29ce484222325)
    }

    fn write_u8(&mut self, b: u8) {
        self.0 ^= b as u64;
        self.0 = self.0.wrapping_mul(0x00000100000001B3);
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

//! Pieces module - shape catalog and the active piece
//!
//! A piece is an ordered list of cell offsets relative to its anchor, a color
//! tag, and the anchor itself. Shape and color are fixed at construction; only
//! the anchor moves.

use rand::Rng;

use crate::types::{BlockColor, PALETTE, SPAWN_ANCHOR};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// A named entry in the shape catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub name: &'static str,
    pub cells: &'static [CellOffset],
}

/// Every shape a spawned piece can take.
///
/// Entries 2 and 3 are the same vertical domino. The repeat doubles that
/// shape's spawn weight and is kept on purpose.
pub const SHAPE_CATALOG: [ShapeTemplate; 11] = [
    ShapeTemplate {
        name: "1x1",
        cells: &[(0, 0)],
    },
    ShapeTemplate {
        name: "1x2",
        cells: &[(0, 0), (1, 0)],
    },
    ShapeTemplate {
        name: "2x1",
        cells: &[(0, 0), (0, 1)],
    },
    ShapeTemplate {
        name: "2x1",
        cells: &[(0, 0), (0, 1)],
    },
    ShapeTemplate {
        name: "2x2",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    ShapeTemplate {
        name: "1x3",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    ShapeTemplate {
        name: "1x4",
        cells: &[(0, 0), (1, 0), (2, 0), (3, 0)],
    },
    ShapeTemplate {
        name: "1x6",
        cells: &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)],
    },
    ShapeTemplate {
        name: "3x1",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    ShapeTemplate {
        name: "L3",
        cells: &[(0, 0), (1, 0), (1, 1)],
    },
    ShapeTemplate {
        name: "L4",
        cells: &[(0, 0), (1, 0), (1, 1), (1, 2)],
    },
];

/// The piece currently being dragged or placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    shape: &'static [CellOffset],
    name: &'static str,
    color: BlockColor,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor
    pub fn new(shape: &'static [CellOffset], color: BlockColor) -> Self {
        Self {
            shape,
            name: "custom",
            color,
            x: SPAWN_ANCHOR.0,
            y: SPAWN_ANCHOR.1,
        }
    }

    /// Create a piece from a catalog template
    pub fn from_template(template: &ShapeTemplate, color: BlockColor) -> Self {
        Self {
            name: template.name,
            ..Self::new(template.cells, color)
        }
    }

    /// Pick a shape and a color uniformly at random, anchored at (0, 0)
    pub fn spawn_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let template = &SHAPE_CATALOG[rng.gen_range(0..SHAPE_CATALOG.len())];
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        Self::from_template(template, color)
    }

    pub fn shape(&self) -> &'static [CellOffset] {
        self.shape
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn color(&self) -> BlockColor {
        self.color
    }

    pub fn anchor(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Move the anchor without any validation
    pub fn move_to(&mut self, x: i8, y: i8) {
        self.x = x;
        self.y = y;
    }

    pub fn reset_anchor(&mut self) {
        self.move_to(SPAWN_ANCHOR.0, SPAWN_ANCHOR.1);
    }

    /// Grid coordinates covered by the shape with its anchor at `anchor`
    ///
    /// Uses wrapping arithmetic so far-off anchors never overflow; such
    /// cells land out of bounds and fail validation.
    pub fn cells_at(&self, anchor: (i8, i8)) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .iter()
            .map(move |&(dx, dy)| (anchor.0.wrapping_add(dx), anchor.1.wrapping_add(dy)))
    }

    /// Grid coordinates covered at the current anchor
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.cells_at(self.anchor())
    }

    /// Bounding box (width, height) of the shape
    pub fn extent(&self) -> (i8, i8) {
        let w = self.shape.iter().map(|&(dx, _)| dx + 1).max().unwrap_or(0);
        let h = self.shape.iter().map(|&(_, dy)| dy + 1).max().unwrap_or(0);
        (w, h)
    }
}

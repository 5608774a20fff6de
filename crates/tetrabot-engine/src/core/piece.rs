use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

/// Offset of one piece cell relative to the piece origin, as `(dx, dy)`.
///
/// `dy` grows downward, matching [`Position`].
pub type CellOffset = (i32, i32);

/// Location of a piece origin on the board.
///
/// `x` is the column and `y` the row, with `y = 0` at the top of the board.
/// Either coordinate may lie off the board while the planner tries placements;
/// only in-bounds cells are ever stamped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    #[must_use]
    pub const fn left(self) -> Self {
        self.offset(-1, 0)
    }

    #[must_use]
    pub const fn right(self) -> Self {
        self.offset(1, 0)
    }

    #[must_use]
    pub const fn down(self) -> Self {
        self.offset(0, 1)
    }
}

/// An active piece: its kind, rotation state, and the cells of that rotation.
///
/// The cached cells always equal [`PieceKind::shape_at`] for the current rotation.
/// They are recomputed eagerly by [`Piece::rotate`] and [`Piece::rotate_back`] and
/// cannot be changed any other way.
///
/// Rotations never check legality; callers test the rotated piece against a
/// [`Board`](super::board::Board) themselves.
///
/// # Example
///
/// ```
/// use tetrabot_engine::{Piece, PieceKind};
///
/// let mut piece = Piece::new(PieceKind::T);
/// piece.rotate();
/// assert_eq!(piece.rotation().as_u8(), 1);
/// piece.rotate_back();
/// assert_eq!(piece, Piece::new(PieceKind::T));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    rotation: PieceRotation,
    cells: [CellOffset; 4],
}

impl Piece {
    /// Creates a piece of the given kind in its spawn rotation.
    #[must_use]
    pub fn new(kind: PieceKind) -> Self {
        Self::with_rotation(kind, PieceRotation::default())
    }

    #[must_use]
    pub fn with_rotation(kind: PieceKind, rotation: PieceRotation) -> Self {
        Self {
            kind,
            rotation,
            cells: kind.shape_at(rotation),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> PieceRotation {
        self.rotation
    }

    #[must_use]
    pub fn cells(&self) -> &[CellOffset; 4] {
        &self.cells
    }

    /// Advances the rotation by one step clockwise.
    pub fn rotate(&mut self) {
        self.set_rotation(self.rotation.rotated_right());
    }

    /// Undoes one [`Piece::rotate`].
    pub fn rotate_back(&mut self) {
        self.set_rotation(self.rotation.rotated_left());
    }

    fn set_rotation(&mut self, rotation: PieceRotation) {
        self.rotation = rotation;
        self.cells = self.kind.shape_at(rotation);
    }

    /// Returns the absolute cells covered when the piece origin is at `position`.
    pub fn occupied_positions(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| position.offset(dx, dy))
    }
}

/// Rotation state of a piece, always in `0..4`.
///
/// Rotation operations wrap around modulo 4.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceRotation(u8);

impl PieceRotation {
    /// All four rotation states in ascending order.
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    /// Creates a rotation state, wrapping `n` modulo 4.
    #[must_use]
    pub const fn new(n: u8) -> Self {
        Self(n % 4)
    }

    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn rotated_left(self) -> Self {
        Self((self.0 + 3) % 4)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The seven tetromino kinds.
///
/// The discriminant is the kind's ordinal; locked cells store `ordinal + 1`
/// (see [`PieceKind::color`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All kinds in ordinal order.
    pub const ALL: [Self; Self::LEN] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Returns the cells of this kind in the given rotation.
    #[must_use]
    pub const fn shape_at(self, rotation: PieceRotation) -> [CellOffset; 4] {
        PIECE_SHAPES[self as usize][rotation.as_usize()]
    }

    /// Returns the value stored in a board cell locked by this kind (`1..=7`).
    #[must_use]
    pub const fn color(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`PieceKind::color`].
    #[must_use]
    pub const fn from_color(color: u8) -> Option<Self> {
        match color {
            1..=7 => Some(Self::ALL[(color - 1) as usize]),
            _ => None,
        }
    }
}

type PieceShape = [CellOffset; 4];

// Hand-authored per rotation; there is no generic rotation transform.
const PIECE_SHAPES: [[PieceShape; 4]; PieceKind::LEN] = {
    const I_H: PieceShape = [(0, 0), (1, 0), (2, 0), (3, 0)];
    const I_V: PieceShape = [(0, 0), (0, 1), (0, 2), (0, 3)];
    const O: PieceShape = [(0, 0), (1, 0), (0, 1), (1, 1)];
    const S_H: PieceShape = [(1, 0), (2, 0), (0, 1), (1, 1)];
    const S_V: PieceShape = [(1, 0), (1, 1), (2, 1), (2, 2)];
    const Z_H: PieceShape = [(0, 0), (1, 0), (1, 1), (2, 1)];
    const Z_V: PieceShape = [(2, 0), (1, 1), (2, 1), (1, 2)];
    [
        // I-piece
        [I_H, I_V, I_H, I_V],
        // O-piece
        [O, O, O, O],
        // T-piece
        [
            [(1, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (2, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (1, 2)],
            [(1, 0), (0, 1), (1, 1), (1, 2)],
        ],
        // S-piece
        [S_H, S_V, S_H, S_V],
        // Z-piece
        [Z_H, Z_V, Z_H, Z_V],
        // J-piece
        [
            [(0, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (1, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (2, 2)],
            [(1, 0), (1, 1), (0, 2), (1, 2)],
        ],
        // L-piece
        [
            [(2, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (1, 2), (2, 2)],
            [(0, 1), (1, 1), (2, 1), (0, 2)],
            [(0, 0), (1, 0), (1, 1), (1, 2)],
        ],
    ]
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_shape_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for rotation in PieceRotation::ALL {
                let cells: HashSet<_> = kind.shape_at(rotation).into_iter().collect();
                assert_eq!(cells.len(), 4, "{kind:?} rotation {rotation:?}");
            }
        }
    }

    #[test]
    fn test_o_piece_is_rotation_invariant() {
        let base = PieceKind::O.shape_at(PieceRotation::default());
        for rotation in PieceRotation::ALL {
            assert_eq!(PieceKind::O.shape_at(rotation), base);
        }
    }

    #[test]
    fn test_i_s_z_alternate_between_two_shapes() {
        for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
            let [r0, r1, r2, r3] = PieceRotation::ALL.map(|r| kind.shape_at(r));
            assert_eq!(r0, r2, "{kind:?}");
            assert_eq!(r1, r3, "{kind:?}");
            assert_ne!(r0, r1, "{kind:?}");
        }
    }

    #[test]
    fn test_t_j_l_have_four_distinct_shapes() {
        for kind in [PieceKind::T, PieceKind::J, PieceKind::L] {
            let shapes: HashSet<_> = PieceRotation::ALL
                .into_iter()
                .map(|r| kind.shape_at(r))
                .collect();
            assert_eq!(shapes.len(), 4, "{kind:?}");
        }
    }

    #[test]
    fn test_offsets_are_non_negative() {
        for kind in PieceKind::ALL {
            for rotation in PieceRotation::ALL {
                for (dx, dy) in kind.shape_at(rotation) {
                    assert!(dx >= 0 && dy >= 0, "{kind:?} {rotation:?}");
                }
            }
        }
    }

    #[test]
    fn test_rotate_then_rotate_back_round_trips() {
        for kind in PieceKind::ALL {
            for rotation in PieceRotation::ALL {
                let original = Piece::with_rotation(kind, rotation);
                let mut piece = original;
                piece.rotate();
                piece.rotate_back();
                assert_eq!(piece, original);

                piece.rotate_back();
                piece.rotate();
                assert_eq!(piece, original);
            }
        }
    }

    #[test]
    fn test_rotation_keeps_cells_in_sync() {
        let mut piece = Piece::new(PieceKind::L);
        for expected in [1, 2, 3, 0, 1] {
            piece.rotate();
            assert_eq!(piece.rotation().as_u8(), expected);
            assert_eq!(*piece.cells(), PieceKind::L.shape_at(piece.rotation()));
        }
        piece.rotate_back();
        assert_eq!(piece.rotation().as_u8(), 0);
        assert_eq!(*piece.cells(), PieceKind::L.shape_at(piece.rotation()));
    }

    #[test]
    fn test_occupied_positions_are_offset_by_position() {
        let piece = Piece::new(PieceKind::O);
        let cells: Vec<_> = piece.occupied_positions(Position::new(4, 7)).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(4, 7),
                Position::new(5, 7),
                Position::new(4, 8),
                Position::new(5, 8),
            ]
        );
    }

    #[test]
    fn test_color_matches_ordinal() {
        for (ordinal, kind) in PieceKind::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(kind.color()), ordinal + 1);
            assert_eq!(PieceKind::from_color(kind.color()), Some(kind));
        }
        assert_eq!(PieceKind::from_color(0), None);
        assert_eq!(PieceKind::from_color(8), None);
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(PieceRotation::new(5), PieceRotation::new(1));
        assert_eq!(PieceRotation::new(0).rotated_left().as_u8(), 3);
        assert_eq!(PieceRotation::new(3).rotated_right().as_u8(), 0);
    }
}

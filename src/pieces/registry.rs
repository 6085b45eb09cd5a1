use std::collections::HashMap;

use crate::pieces::CutImpulse;
use crate::query::{CutLine, CutResult};
use crate::shape::TriMesh;

/// Identifies a piece in a [`PieceSet`], independently of insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(u64);

/// One cloth fragment tracked by a [`PieceSet`].
#[derive(Clone, Debug)]
pub struct Piece {
    mesh: TriMesh,
    initial_impulse: Option<CutImpulse>,
    processing: bool,
}

impl Piece {
    /// The geometry of this piece.
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// The initial impulse to apply when this piece's rigid body is created,
    /// if it was born from a cut.
    pub fn initial_impulse(&self) -> Option<CutImpulse> {
        self.initial_impulse
    }

    /// Is a cut gesture currently in flight for this piece?
    pub fn is_processing(&self) -> bool {
        self.processing
    }
}

/// The outcome of resolving a cut gesture against a [`PieceSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CutOutcome {
    /// The piece was atomically replaced by the two given new pieces.
    Replaced {
        /// The piece on the left of the cut line.
        left: PieceId,
        /// The piece on the right of the cut line.
        right: PieceId,
    },
    /// The cut failed; the piece is untouched and may be cut again.
    Retryable,
    /// The piece is unknown or had no cut in flight.
    Ignored,
}

/// Owns every live piece and serializes concurrent cut gestures through a
/// per-piece processing latch.
#[derive(Clone, Debug, Default)]
pub struct PieceSet {
    pieces: HashMap<PieceId, Piece>,
    next_id: u64,
}

impl PieceSet {
    /// Creates an empty piece set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new piece with no initial impulse and returns its id.
    pub fn insert(&mut self, mesh: TriMesh) -> PieceId {
        self.insert_piece(Piece {
            mesh,
            initial_impulse: None,
            processing: false,
        })
    }

    fn insert_piece(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        let _ = self.pieces.insert(id, piece);
        id
    }

    /// The piece identified by `id`, if it is still live.
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// The number of live pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterates over every live piece.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces.iter().map(|(id, piece)| (*id, piece))
    }

    /// Acquires the processing latch of `id`, claiming it for one cut
    /// gesture.
    ///
    /// Returns `false` if the piece is unknown or a cut is already in flight
    /// for it; the new gesture must then be ignored.
    pub fn try_begin_cut(&mut self, id: PieceId) -> bool {
        match self.pieces.get_mut(&id) {
            Some(piece) if !piece.processing => {
                piece.processing = true;
                true
            }
            Some(_) => {
                log::debug!("ignoring cut gesture on {id:?}: a cut is already in flight");
                false
            }
            None => false,
        }
    }

    /// Consumes the engine's result for a latched piece.
    ///
    /// On a successful cut the old piece is removed and both new pieces are
    /// inserted in the same call, each carrying its initial outward impulse.
    /// On a failed cut the latch is released so the gesture can be retried.
    /// Resolving a piece that is unknown or not latched does nothing.
    pub fn resolve_cut(
        &mut self,
        id: PieceId,
        line: &CutLine,
        result: CutResult<TriMesh>,
    ) -> CutOutcome {
        match self.pieces.get(&id) {
            Some(piece) if piece.processing => {}
            _ => return CutOutcome::Ignored,
        }

        match result {
            CutResult::Pair(left, right) => {
                let impulses = CutImpulse::for_cut(line, &left, &right);
                let (left_impulse, right_impulse) = match impulses {
                    Some((li, ri)) => (Some(li), Some(ri)),
                    None => (None, None),
                };

                let _ = self.pieces.remove(&id);
                let left_id = self.insert_piece(Piece {
                    mesh: left,
                    initial_impulse: left_impulse,
                    processing: false,
                });
                let right_id = self.insert_piece(Piece {
                    mesh: right,
                    initial_impulse: right_impulse,
                    processing: false,
                });

                CutOutcome::Replaced {
                    left: left_id,
                    right: right_id,
                }
            }
            CutResult::Unchanged => {
                if let Some(piece) = self.pieces.get_mut(&id) {
                    piece.processing = false;
                }
                CutOutcome::Retryable
            }
        }
    }

    /// Takes the pending initial impulse of `id`, leaving none behind.
    ///
    /// The physics layer calls this once when it creates the piece's rigid
    /// body, so the impulse is applied exactly once.
    pub fn take_initial_impulse(&mut self, id: PieceId) -> Option<CutImpulse> {
        self.pieces
            .get_mut(&id)
            .and_then(|piece| piece.initial_impulse.take())
    }
}

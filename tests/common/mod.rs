//! Shared test fixtures: two small games implementing the `GameState`
//! adapter, plus assertion helpers.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use heron::game::{GameState, PlayerId};

pub const GRID_WIDTH: usize = 4;
pub const GRID_HEIGHT: usize = 4;

/// Isolation on a 4x4 grid with king moves. Each player occupies one cell;
/// a move steps to an adjacent open cell and burns the cell just left. The
/// side to move loses when it has no legal step.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridIsolation {
    blocked: u16,
    locs: [u8; 2],
    side: PlayerId,
    ply: u32,
}

impl GridIsolation {
    /// Fresh game: players in opposite corners, nothing burned.
    pub fn new() -> Self {
        GridIsolation {
            blocked: 0,
            locs: [0, (GRID_WIDTH * GRID_HEIGHT - 1) as u8],
            side: 0,
            ply: 0,
        }
    }

    /// Arbitrary mid-game position. The players' own cells are always kept
    /// open in the blocked mask.
    pub fn with_position(blocked: u16, locs: [u8; 2], side: PlayerId, ply: u32) -> Self {
        let blocked = blocked & !(1u16 << locs[0]) & !(1u16 << locs[1]);
        GridIsolation {
            blocked,
            locs,
            side,
            ply,
        }
    }

    fn open(&self, cell: u8) -> bool {
        self.blocked & (1u16 << cell) == 0 && cell != self.locs[0] && cell != self.locs[1]
    }

    fn neighbors(cell: u8) -> Vec<u8> {
        let x = (cell as usize % GRID_WIDTH) as i32;
        let y = (cell as usize / GRID_WIDTH) as i32;
        let mut out = Vec::with_capacity(8);
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x + dx;
                let ny = y + dy;
                if nx >= 0 && nx < GRID_WIDTH as i32 && ny >= 0 && ny < GRID_HEIGHT as i32 {
                    out.push((ny as usize * GRID_WIDTH + nx as usize) as u8);
                }
            }
        }
        out
    }
}

impl GameState for GridIsolation {
    type Action = u8; // destination cell

    fn actions(&self) -> Vec<u8> {
        Self::neighbors(self.locs[self.side])
            .into_iter()
            .filter(|&cell| self.open(cell))
            .collect()
    }

    fn result(&self, action: u8) -> Self {
        let mut next = self.clone();
        next.blocked |= 1u16 << next.locs[next.side];
        next.locs[next.side] = action;
        next.side = 1 - next.side;
        next.ply += 1;
        next
    }

    fn terminal_test(&self) -> bool {
        self.actions().is_empty()
    }

    fn utility(&self, player: PlayerId) -> f64 {
        // The stuck side (to move with no steps) loses.
        if player == self.side {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    fn player(&self) -> PlayerId {
        self.side
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }

    fn liberties(&self, player: PlayerId) -> usize {
        Self::neighbors(self.locs[player])
            .into_iter()
            .filter(|&cell| self.open(cell))
            .count()
    }
}

/// Take-away Nim: remove 1 or 2 tokens per turn. In the normal variant the
/// player taking the last token wins; in the misere variant they lose.
/// Small, deterministic, and with known optimal play (normal variant: leave a
/// multiple of 3), which makes it ideal for exact search assertions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Nim {
    pub remaining: u32,
    side: PlayerId,
    ply: u32,
    last_token_loses: bool,
}

impl Nim {
    pub fn normal(remaining: u32) -> Self {
        Nim {
            remaining,
            side: 0,
            ply: 0,
            last_token_loses: false,
        }
    }

    pub fn misere(remaining: u32) -> Self {
        Nim {
            remaining,
            side: 0,
            ply: 0,
            last_token_loses: true,
        }
    }
}

impl GameState for Nim {
    type Action = u32; // number of tokens to take

    fn actions(&self) -> Vec<u32> {
        (1..=self.remaining.min(2)).collect()
    }

    fn result(&self, action: u32) -> Self {
        let mut next = self.clone();
        next.remaining -= action;
        next.side = 1 - next.side;
        next.ply += 1;
        next
    }

    fn terminal_test(&self) -> bool {
        self.remaining == 0
    }

    fn utility(&self, player: PlayerId) -> f64 {
        // At a terminal state the previous mover took the last token.
        let last_mover = 1 - self.side;
        let winner = if self.last_token_loses {
            1 - last_mover
        } else {
            last_mover
        };
        if player == winner {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    }

    fn player(&self) -> PlayerId {
        self.side
    }

    fn ply_count(&self) -> u32 {
        self.ply
    }

    fn liberties(&self, _player: PlayerId) -> usize {
        self.remaining.min(2) as usize
    }
}

/// Assert that `action` is legal in `state`.
pub fn assert_legal<S: GameState>(state: &S, action: S::Action, context: &str) {
    assert!(
        state.actions().contains(&action),
        "{}: action {:?} not legal in this state",
        context,
        action
    );
}

use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Idle,
    OneSelected {
        first: TileIndex,
    },
    /// Transient, a matching pair is settled within the click that completed it.
    TwoSelectedMatch {
        first: TileIndex,
        second: TileIndex,
    },
    TwoSelectedMismatchPending {
        first: TileIndex,
        second: TileIndex,
        token: DelayToken,
    },
}

impl RoundState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_pair_pending(self) -> bool {
        matches!(
            self,
            Self::TwoSelectedMatch { .. } | Self::TwoSelectedMismatchPending { .. }
        )
    }

    pub const fn pending_token(self) -> Option<DelayToken> {
        match self {
            Self::TwoSelectedMismatchPending { token, .. } => Some(token),
            _ => None,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    FirstRevealed,
    Matched,
    Mismatched { token: DelayToken },
    Completed { moves: MoveCount },
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            FirstRevealed => true,
            Matched => true,
            Mismatched { .. } => true,
            Completed { .. } => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimeoutOutcome {
    Stale,
    Hidden { pair: [TileIndex; 2] },
}

impl TimeoutOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Hidden { .. })
    }
}

/// Owns the board and the selection state of the game in progress.
///
/// All input arrives through [`Self::on_tile_clicked`] and [`Self::on_mismatch_timeout`],
/// all output leaves through a [`GameUi`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedController")]
pub struct RoundController {
    board: Board,
    state: RoundState,
    move_count: MoveCount,
    delay_generation: u64,
}

/// Wire shape of [`RoundController`], the selection is checked against the board first.
#[derive(Deserialize)]
struct UncheckedController {
    board: Board,
    state: RoundState,
    move_count: MoveCount,
    delay_generation: u64,
}

impl TryFrom<UncheckedController> for RoundController {
    type Error = GameError;

    fn try_from(unchecked: UncheckedController) -> Result<Self> {
        let UncheckedController {
            board,
            state,
            move_count,
            delay_generation,
        } = unchecked;

        let selected_face_up = |index: TileIndex| -> Result<()> {
            if board.tile(index)?.flipped {
                Ok(())
            } else {
                Err(GameError::InvalidRoundState)
            }
        };

        match state {
            RoundState::Idle => {}
            RoundState::OneSelected { first } => selected_face_up(first)?,
            RoundState::TwoSelectedMismatchPending { first, second, .. } if first != second => {
                selected_face_up(first)?;
                selected_face_up(second)?;
            }
            RoundState::TwoSelectedMismatchPending { .. } | RoundState::TwoSelectedMatch { .. } => {
                return Err(GameError::InvalidRoundState);
            }
        }

        Ok(Self {
            board,
            state,
            move_count,
            delay_generation,
        })
    }
}

impl RoundController {
    /// Takes over `board` as dealt, nothing is rendered until [`Self::start_new_game`].
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            move_count: 0,
            delay_generation: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn move_count(&self) -> MoveCount {
        self.move_count
    }

    /// Whether clicks are currently refused while a mismatched pair waits to be hidden.
    pub fn is_input_gated(&self) -> bool {
        self.state.is_pair_pending()
    }

    pub fn on_tile_clicked(
        &mut self,
        index: TileIndex,
        ui: &mut impl GameUi,
    ) -> Result<ClickOutcome> {
        use RoundState::*;

        let index = self.board.validate_index(index)?;

        Ok(match self.state {
            TwoSelectedMatch { .. } | TwoSelectedMismatchPending { .. } => {
                log::trace!("ignoring click on {} while a pair is pending", index);
                ClickOutcome::Ignored
            }
            _ if self.board[index].flipped => {
                log::trace!("ignoring click on face-up tile {}", index);
                ClickOutcome::Ignored
            }
            OneSelected { first } if first == index => ClickOutcome::Ignored,
            Idle => {
                self.reveal(index, ui);
                self.state = OneSelected { first: index };
                ClickOutcome::FirstRevealed
            }
            OneSelected { first } => {
                self.reveal(index, ui);
                self.move_count = self.move_count.saturating_add(1);
                ui.show_moves_count(self.move_count);

                if self.board[first].value == self.board[index].value {
                    self.state = TwoSelectedMatch {
                        first,
                        second: index,
                    };
                    self.settle_match(first, index, ui)
                } else {
                    let token = self.next_delay_token();
                    log::debug!(
                        "mismatch {} ({}) / {} ({}), hiding in {}ms",
                        first,
                        self.board[first].value,
                        index,
                        self.board[index].value,
                        MISMATCH_DELAY_MS
                    );
                    self.state = TwoSelectedMismatchPending {
                        first,
                        second: index,
                        token,
                    };
                    ui.schedule_delay(MISMATCH_DELAY_MS, token);
                    ClickOutcome::Mismatched { token }
                }
            }
        })
    }

    pub fn on_mismatch_timeout(
        &mut self,
        token: DelayToken,
        ui: &mut impl GameUi,
    ) -> TimeoutOutcome {
        match self.state {
            RoundState::TwoSelectedMismatchPending {
                first,
                second,
                token: pending,
            } if pending == token => {
                for index in [first, second] {
                    self.board.set_flipped(index, false);
                    ui.render_tile(index, TileFace::Blank, true);
                }
                self.state = RoundState::Idle;
                TimeoutOutcome::Hidden {
                    pair: [first, second],
                }
            }
            _ => {
                log::trace!("stale mismatch timer {:?}", token);
                TimeoutOutcome::Stale
            }
        }
    }

    /// Clears the selection and the move counter and turns every tile face down.
    ///
    /// The dealt order is kept. A pending mismatch delay is cancelled.
    pub fn start_new_game(&mut self, ui: &mut impl GameUi) {
        if let Some(token) = self.state.pending_token() {
            ui.cancel_delay(token);
        }

        self.state = RoundState::Idle;
        self.move_count = 0;
        self.board.reset();

        for index in 0..self.board.len() {
            ui.render_tile(index, TileFace::Blank, true);
        }
        ui.show_moves_count(self.move_count);
    }

    fn reveal(&mut self, index: TileIndex, ui: &mut impl GameUi) {
        self.board.set_flipped(index, true);
        ui.render_tile(index, self.board[index].face(), false);
    }

    fn settle_match(
        &mut self,
        first: TileIndex,
        second: TileIndex,
        ui: &mut impl GameUi,
    ) -> ClickOutcome {
        log::debug!("matched {} and {} ({})", first, second, self.board[first].value);
        self.state = RoundState::Idle;

        if self.board.is_complete() {
            let moves = self.move_count;
            ui.show_completion_message(moves);
            self.start_new_game(ui);
            ClickOutcome::Completed { moves }
        } else {
            ClickOutcome::Matched
        }
    }

    fn next_delay_token(&mut self) -> DelayToken {
        self.delay_generation = self.delay_generation.wrapping_add(1);
        DelayToken::new(self.delay_generation)
    }
}

use crate::*;

/// Presentation layer driven by [`RoundController`].
///
/// Every method is an instruction; the controller never reads anything back from the UI.
pub trait GameUi {
    /// Show `face` on slot `index` and allow or refuse clicks on it.
    fn render_tile(&mut self, index: TileIndex, face: TileFace, enabled: bool);

    fn show_moves_count(&mut self, moves: MoveCount);

    /// Announce a finished board. A new game is started right after this returns.
    fn show_completion_message(&mut self, moves: MoveCount);

    /// Arrange for [`RoundController::on_mismatch_timeout`] to be called with `token` once
    /// `delay_ms` has elapsed.
    fn schedule_delay(&mut self, delay_ms: u32, token: DelayToken);

    fn cancel_delay(&mut self, token: DelayToken);
}

pub fn moves_label(moves: MoveCount) -> alloc::string::String {
    alloc::format!("Moves: {}", moves)
}

pub fn completion_message(moves: MoveCount) -> alloc::string::String {
    alloc::format!("Congratulations! You completed the game in {} moves.", moves)
}

pub const COMPLETION_TITLE: &str = "Game Complete";

pub const WINDOW_TITLE: &str = "Memory Game";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_carry_the_move_count() {
        assert_eq!(moves_label(0), "Moves: 0");
        assert_eq!(
            completion_message(11),
            "Congratulations! You completed the game in 11 moves."
        );
    }

    #[test]
    fn tile_face_text() {
        use alloc::string::ToString;

        assert_eq!(TileFace::Blank.to_string(), "");
        assert_eq!(TileFace::Value(7).to_string(), "7");
    }
}

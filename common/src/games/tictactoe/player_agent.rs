use std::thread;
use std::time::Duration;

use crate::games::SessionRng;
use crate::log;

use super::observer::MoveObserver;
use super::shared_state::SharedGameState;
use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerReport {
    pub mark: Mark,
    pub moves_made: usize,
    pub attempts: usize,
}

/// Plays one mark by proposing uniformly random cells whenever it is its turn.
pub struct PlayerAgent<'a, O: MoveObserver + ?Sized> {
    mark: Mark,
    game: &'a SharedGameState,
    rng: SessionRng,
    observer: &'a O,
    move_delay: Duration,
}

impl<'a, O: MoveObserver + ?Sized> PlayerAgent<'a, O> {
    pub fn new(mark: Mark, game: &'a SharedGameState, rng: SessionRng, observer: &'a O) -> Self {
        Self {
            mark,
            game,
            rng,
            observer,
            move_delay: Duration::ZERO,
        }
    }

    /// Pause after every attempt, accepted or not. Only paces console output.
    pub fn with_move_delay(mut self, move_delay: Duration) -> Self {
        self.move_delay = move_delay;
        self
    }

    /// Runs until the game is over and returns what this player did.
    pub fn play(mut self) -> PlayerReport {
        log!("Player {} ready (rng seed {})", self.mark, self.rng.seed());

        let mut report = PlayerReport {
            mark: self.mark,
            moves_made: 0,
            attempts: 0,
        };

        while !self.game.is_terminal() {
            self.game.block_until_turn_or_done(self.mark);
            if self.game.is_terminal() {
                break;
            }

            let mut moved = false;
            while !moved && !self.game.is_terminal() {
                let position = self.pick_cell();
                report.attempts += 1;

                if let Ok(state) = self.game.try_move(self.mark, position.row, position.col) {
                    moved = true;
                    report.moves_made += 1;
                    self.observer.on_move(self.mark, position, &state);
                }

                self.pause();
            }
        }

        log!(
            "Player {} done: {} moves in {} attempts",
            self.mark,
            report.moves_made,
            report.attempts
        );
        report
    }

    fn pick_cell(&mut self) -> Position {
        let row = self.rng.random_range(0..BOARD_SIZE);
        let col = self.rng.random_range(0..BOARD_SIZE);
        Position::new(row, col)
    }

    fn pause(&self) {
        if !self.move_delay.is_zero() {
            thread::sleep(self.move_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, TicTacToeGameState};
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        moves: Mutex<Vec<(Mark, Position, usize)>>,
    }

    impl MoveObserver for RecordingObserver {
        fn on_move(&self, mark: Mark, position: Position, state: &TicTacToeGameState) {
            self.moves.lock().push((mark, position, state.move_count));
        }
    }

    fn finished_game() -> SharedGameState {
        let game = SharedGameState::new();
        for (mark, row, col) in [
            (Mark::X, 0, 0),
            (Mark::O, 1, 0),
            (Mark::X, 1, 1),
            (Mark::O, 2, 0),
            (Mark::X, 2, 2),
        ] {
            assert!(game.attempt_move(mark, row, col));
        }
        game
    }

    #[test]
    fn test_agent_on_finished_game_makes_no_attempts() {
        let game = finished_game();
        let observer = RecordingObserver::default();

        let report = PlayerAgent::new(Mark::O, &game, SessionRng::new(1), &observer).play();

        assert_eq!(report.moves_made, 0);
        assert_eq!(report.attempts, 0);
        assert!(observer.moves.lock().is_empty());
        assert_eq!(game.get_outcome(), GameStatus::XWon);
    }

    #[test]
    fn test_two_agents_play_to_completion() {
        let game = SharedGameState::new();
        let observer = RecordingObserver::default();

        let (x, o) = thread::scope(|scope| {
            let x = scope.spawn(|| PlayerAgent::new(Mark::X, &game, SessionRng::new(10), &observer).play());
            let o = scope.spawn(|| PlayerAgent::new(Mark::O, &game, SessionRng::new(11), &observer).play());
            (x.join().unwrap(), o.join().unwrap())
        });

        let state = game.snapshot();
        assert!(state.status.is_terminal());
        assert_eq!(x.moves_made + o.moves_made, state.move_count);
        assert!(x.moves_made == o.moves_made || x.moves_made == o.moves_made + 1);
        assert!(x.attempts >= x.moves_made);
        assert!(o.attempts >= o.moves_made);

        let mut moves = observer.moves.lock().clone();
        moves.sort_by_key(|&(_, _, count)| count);
        assert_eq!(moves.len(), state.move_count);
        for (index, (mark, position, count)) in moves.iter().enumerate() {
            assert_eq!(*count, index + 1);
            let expected = if index % 2 == 0 { Mark::X } else { Mark::O };
            assert_eq!(*mark, expected);
            assert_eq!(state.board.get(*position), Some(*mark));
        }
    }

    #[test]
    fn test_agent_only_moves_on_its_turn() {
        let game = SharedGameState::new();
        let observer = RecordingObserver::default();

        thread::scope(|scope| {
            let o = scope.spawn(|| PlayerAgent::new(Mark::O, &game, SessionRng::new(3), &observer).play());

            thread::sleep(Duration::from_millis(50));
            assert_eq!(game.snapshot().move_count, 0);

            while !game.is_terminal() {
                game.block_until_turn_or_done(Mark::X);
                if let Some(cell) = game.snapshot().board.get_available_moves().first().copied() {
                    game.attempt_move(Mark::X, cell.row, cell.col);
                }
            }

            let report = o.join().unwrap();
            assert_eq!(report.mark, Mark::O);
            assert_eq!(report.moves_made, game.snapshot().board.count(Mark::O));
        });
    }
}

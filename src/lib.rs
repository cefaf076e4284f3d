//! Game core for a human-versus-computer tic-tac-toe match.
//!
//! The `logic` module holds the board, the rules and the game session;
//! the `engine` module picks the computer's moves at a chosen
//! difficulty; the `record` module is the persisted win/loss/draw
//! tally the hosting UI stores between sessions.
//!
//! Everything here is synchronous and free of I/O. The hosting UI owns
//! rendering, input and storage, and talks to the core through
//! [`logic::game::GameSession`], [`engine::MoveSelector`] and
//! [`record::RecordStore`].

pub mod engine;
pub mod logic;
pub mod record;

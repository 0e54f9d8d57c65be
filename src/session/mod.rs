//! Game sessions: the select/place turn protocol.
//!
//! A session owns its board (and through it the piece bag) and enforces
//! Quarto's turn structure: one player selects a piece, the *other*
//! player places it. Placement triggers win detection; the session then
//! either continues, records a win for the placing player, or records a
//! draw when the bag runs dry.
//!
//! ## Key Types
//!
//! - `GameSession`: the protocol state machine
//! - `PlacementOutcome`: `Continue` / `Win` / `Draw` per placement
//! - `SessionPhase`: where the protocol currently stands
//! - `MoveRecord`: one history entry per successful placement

pub mod game;

pub use game::{GameSession, MoveRecord, PlacementOutcome, SessionPhase, SessionResult};

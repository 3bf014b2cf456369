//! User interface and presentation
//!
//! This module contains presenters that format a round for the player,
//! keeping presentation apart from the state machine.

pub mod presenters;

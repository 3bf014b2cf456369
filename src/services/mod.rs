//! Game services
//!
//! This module contains the game rules: hint extraction, the forced
//! race/class disclosure rule, and the interactive session.

pub mod disclosure;
pub mod game;
pub mod hints;

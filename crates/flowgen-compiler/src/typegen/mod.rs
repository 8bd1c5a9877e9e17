//! Text generation from the emitted catalogue.

pub mod flow;

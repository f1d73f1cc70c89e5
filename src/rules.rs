//! Static tables the engine reads: the symbol dictionary, lottery games, the
//! tarot spread and the interpretation templates.
//!
//! Nothing in here is mutated after start-up. Name-keyed indexes are built
//! lazily on first use.

pub mod games;
pub mod symbols;
pub mod tarot;
pub mod templates;

#[cfg(test)]
mod tests;

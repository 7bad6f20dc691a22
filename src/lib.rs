//! A rules engine for heads-up no-limit Texas hold'em.
//!
//! The crate is split into two modules:
//!
//! * `core` holds the card primitives: values, suits, an ordered deck, and
//!   the seven-card hand ranking used at showdown.
//! * `engine` holds the betting-round state machine (`RoundState` →
//!   `TerminalState`), the `Agent` trait for decision makers, a match
//!   runner that plays agents against each other, and the fixed-layout
//!   wire structs used when a decision maker lives in another process.
//!
//! The state machine is persistent: every action produces a new immutable
//! state that links back to the one before it, so a full hand can be
//! replayed or audited by walking the chain.
pub mod core;
pub mod engine;

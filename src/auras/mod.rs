//! Aggregated player attributes (auras).
//!
//! Some player attributes are not stored: they are folded, on every read,
//! from the contributions of every aura source currently applying to the
//! player. Each `AuraSlot` has a fixed `Aggregation` policy.
//!
//! - `AuraSlot`, `Aggregation`: the slot set and how values combine
//! - `AuraSource`, `AuraBuff`: contributions, keyed by source entity
//! - `TargetableByAuras`: the read side, implemented by `Player`

pub mod slot;
pub mod source;

pub use slot::{Aggregation, AuraSlot};
pub use source::{AuraBuff, AuraSource, TargetableByAuras};

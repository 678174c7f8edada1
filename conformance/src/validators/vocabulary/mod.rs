//! Vocabulary table validators (inventory counts and registry invariants).

pub mod inventory;
pub mod invariants;

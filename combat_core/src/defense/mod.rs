//! Defense system - Dodge, Block, Armor reduction

mod armour;
mod block;
mod evasion;

pub use armour::{apply_defense_reduction, defense_reduction};
pub use block::{apply_block, block_chance};
pub use evasion::dodge_chance;

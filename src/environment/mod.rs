//! Environments and dungeons.
//!
//! An `Environment` is what the catalog/dungeon store hands the engine: all
//! card definitions of one world plus its dungeon lineups. Environments load
//! from the same JSON documents the authoring tool writes.

pub mod defaults;
pub mod dungeon;
pub mod world;

pub use dungeon::{Dungeon, DungeonId};
pub use world::{Environment, EnvironmentError};

pub mod config;
pub use config::*;

pub mod learned;
pub use learned::*;

pub mod qtable;
pub use qtable::*;

pub mod schedule;
pub use schedule::*;

pub mod trainer;
pub use trainer::*;

pub mod action;
pub use action::*;

pub mod arena;
pub use arena::*;

pub mod observation;
pub use observation::*;

pub mod outcome;
pub use outcome::*;

pub mod player;
pub use player::*;

pub mod policy;
pub use policy::*;

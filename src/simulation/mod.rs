pub mod hud;
mod input;
mod lander;
mod landscape;
pub mod math;
mod session;
mod snapshot;
mod terrain;
mod world;

pub use input::*;
pub use lander::*;
pub use landscape::*;
pub use session::*;
pub use snapshot::*;
pub use terrain::*;
pub use world::*;

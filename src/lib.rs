mod app;
mod error;
pub mod init;
mod simulation;

pub use app::*;
pub use error::*;
pub use simulation::*;

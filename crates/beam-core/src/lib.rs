pub mod activation;
pub mod config;
pub mod constants;
pub mod contact;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod path;
pub mod sampler;
pub mod scheduler;
pub mod theme;

pub use activation::*;
pub use config::*;
pub use constants::*;
pub use contact::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use path::*;
pub use sampler::*;
pub use scheduler::*;
pub use theme::*;

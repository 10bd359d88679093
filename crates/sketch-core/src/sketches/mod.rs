pub mod gallery;
pub mod rings;
pub mod soroban;
pub mod sun;
pub mod turbulence;

pub use gallery::Gallery;
pub use rings::{RingConfig, Rings};
pub use soroban::{Soroban, SorobanConfig};
pub use sun::Sun;
pub use turbulence::Turbulence;

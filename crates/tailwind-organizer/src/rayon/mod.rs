//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch organizing.

mod rayon_organizer;

pub use rayon_organizer::ParallelRayonOrganizer;

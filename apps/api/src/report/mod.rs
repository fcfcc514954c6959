//! Report domain — score banding, template substitution, PDF rendering and
//! the `/generate-pdf` endpoint.

pub mod assets;
pub mod generator;
pub mod handlers;
pub mod renderer;
pub mod score_band;

// Presentation layers over the analysis engine.

pub mod render;

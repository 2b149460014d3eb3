//! Domain models for the medscan system.

mod feedback;
mod hospital;
mod matching;
mod medicine;
mod scan;

pub use feedback::*;
pub use hospital::*;
pub use matching::*;
pub use medicine::*;
pub use scan::*;

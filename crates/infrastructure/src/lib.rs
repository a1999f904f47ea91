//! pacrunch Infrastructure Layer
pub mod dataset;
pub mod dns;
pub mod system;

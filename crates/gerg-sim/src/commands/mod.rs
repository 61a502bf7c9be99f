pub mod sample;
pub mod state;
pub mod stats;

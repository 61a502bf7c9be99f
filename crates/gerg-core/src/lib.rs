#![deny(missing_docs)]
#![doc = "Shared error types and deterministic randomness for the gerg network sampler."]

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, GergError};
pub use rng::{RngHandle, UniformSource};

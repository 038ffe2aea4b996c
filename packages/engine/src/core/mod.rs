//! Core building blocks shared by every system

pub mod random;

pub use random::WorldRng;

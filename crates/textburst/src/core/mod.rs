pub mod field;
pub mod particle;
pub mod rng;
pub mod schedule;
pub mod time;

#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod generator;
pub mod model;
pub mod random;
pub mod rationale;
pub mod sampler;
pub mod scheduler;
pub mod scorer;
pub mod text;
pub mod time;
pub mod verifier;

pub use error::Error;
pub use random::QuizRng;
pub use time::Clock;

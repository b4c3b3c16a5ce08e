pub mod service;

pub use service::{recommend, Decision, Strategies};

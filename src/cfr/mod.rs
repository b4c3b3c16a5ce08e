pub mod action;
pub mod dataset;
pub mod history;
pub mod infoset;
pub mod solver;
pub mod strategy;

pub use action::Action;
pub use dataset::Dataset;
pub use history::{canonical_key, History, PostflopHistory, PreflopHistory};
pub use solver::Solver;
pub use strategy::Strategy;

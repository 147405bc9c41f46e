pub mod audit;
pub mod data_core;
pub mod performance;
pub mod tree_walker;

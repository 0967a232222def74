pub mod audit;
pub mod disclosure;

pub mod bounds;
pub mod composite;
pub mod pipeline;
pub mod planner;
pub mod pow2;

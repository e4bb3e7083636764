pub mod arrow;
pub mod detection;
pub mod message;

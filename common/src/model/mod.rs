pub mod label;
pub mod node;

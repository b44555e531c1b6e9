pub mod alternatives;
pub mod product;
pub mod query;
pub mod tip;

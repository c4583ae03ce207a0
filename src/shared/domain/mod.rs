/// Shared domain seedwork
pub mod aggregate_root;

pub use aggregate_root::AggregateRoot;

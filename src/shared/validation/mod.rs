pub mod validation_chain;
pub mod validation_rules;

pub use validation_chain::ValidationChain;
pub use validation_rules::{DomainValidation, FieldRule};

pub mod combinators;
pub mod factory;

//! Builders for specific UI frameworks.

mod bootstrap;
mod bulma;

pub use self::{bootstrap::Bootstrap5, bulma::Bulma};

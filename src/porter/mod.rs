//! The porter agent and the redistribution protocol that drives it.

mod agent;
mod run;

pub use agent::Agent;
pub use run::Redistributor;

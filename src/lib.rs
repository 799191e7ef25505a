#[macro_use]
extern crate pest_derive;

pub use crate::expression::{Chunk, ChunkKind, EvaluationMode, Expression};
pub use crate::generator::{generate_script, ScriptGenerator};
pub use crate::task::{CompileTask, Declaration};

pub mod cache;
pub mod chart;
pub mod expression;
pub mod generator;
pub mod task;

#[cfg(test)]
mod tests;

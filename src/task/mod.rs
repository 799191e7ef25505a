use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::expression::Expression;

pub type Result<T> = std::result::Result<T, TaskError>;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Failed reading compile task {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed compile task: {0}")]
    Json(#[from] serde_json::Error),
}

/// A named parameter, field or variable and the class of its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub value_class: String,
}

impl Declaration {
    pub fn new(name: impl Into<String>, value_class: impl Into<String>) -> Declaration {
        Declaration {
            name: name.into(),
            value_class: value_class.into(),
        }
    }
}

/// Everything the script generator needs to know about one report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileTask {
    pub name: String,
    pub imports: Vec<String>,
    pub only_default_evaluation: bool,
    pub parameters: Vec<Declaration>,
    pub fields: Vec<Declaration>,
    pub variables: Vec<Declaration>,
    pub expressions: Vec<Expression>,
}

impl CompileTask {
    pub fn new(name: impl Into<String>) -> CompileTask {
        CompileTask {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_json(text: &str) -> Result<CompileTask> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<CompileTask> {
        let text = fs::read_to_string(path).map_err(|source| TaskError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let task = CompileTask::from_json(&text)?;
        info!(
            "Read compile task '{}' from {} ({} expressions)",
            task.name,
            path.display(),
            task.expressions.len()
        );
        Ok(task)
    }

    /// With repeated names the first declaration is the one that counts.
    pub fn parameter(&self, name: &str) -> Option<&Declaration> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&Declaration> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn variable(&self, name: &str) -> Option<&Declaration> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn expression_id(&self, expression: &Expression) -> i32 {
        expression.id
    }

    pub fn with_parameter(mut self, name: &str, value_class: &str) -> Self {
        self.parameters.push(Declaration::new(name, value_class));
        self
    }

    pub fn with_field(mut self, name: &str, value_class: &str) -> Self {
        self.fields.push(Declaration::new(name, value_class));
        self
    }

    pub fn with_variable(mut self, name: &str, value_class: &str) -> Self {
        self.variables.push(Declaration::new(name, value_class));
        self
    }

    pub fn with_expression(mut self, expression: Expression) -> Self {
        self.expressions.push(expression);
        self
    }
}

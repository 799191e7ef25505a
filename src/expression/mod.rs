use std::fmt;

use log::{error, trace};
use pest::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mode;

pub use mode::EvaluationMode;

#[derive(Parser)]
#[grammar = "expression/grammar.pest"]
struct ExpressionParser;

pub type Result<T> = std::result::Result<T, ExpressionError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Failed parsing expression text: {0}")]
    Parse(String),

    #[error("Expression {0} has neither text nor chunks")]
    MissingSource(i32),

    #[error("Expression {0} has both text and chunks")]
    AmbiguousSource(i32),

    #[error("Unknown evaluation mode: {0}")]
    UnknownEvaluationMode(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Text,
    Parameter,
    Field,
    Variable,
    Resource,
}

/// One typed fragment of an expression. `text` holds the literal source for
/// [`ChunkKind::Text`] and the referenced name or resource key otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub kind: ChunkKind,
    #[serde(default)]
    pub text: Option<String>,
}

impl Chunk {
    pub fn new(kind: ChunkKind, text: impl Into<String>) -> Chunk {
        Chunk {
            kind,
            text: Some(text.into()),
        }
    }

    pub fn literal(text: impl Into<String>) -> Chunk {
        Chunk::new(ChunkKind::Text, text)
    }

    pub fn parameter(name: impl Into<String>) -> Chunk {
        Chunk::new(ChunkKind::Parameter, name)
    }

    pub fn field(name: impl Into<String>) -> Chunk {
        Chunk::new(ChunkKind::Field, name)
    }

    pub fn variable(name: impl Into<String>) -> Chunk {
        Chunk::new(ChunkKind::Variable, name)
    }

    pub fn resource(key: impl Into<String>) -> Chunk {
        Chunk::new(ChunkKind::Resource, key)
    }

    /// Raw chunk text, empty when absent.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ChunkKind::Text => write!(f, "{}", self.text()),
            ChunkKind::Parameter => write!(f, "$P{{{}}}", self.text()),
            ChunkKind::Field => write!(f, "$F{{{}}}", self.text()),
            ChunkKind::Variable => write!(f, "$V{{{}}}", self.text()),
            ChunkKind::Resource => write!(f, "$R{{{}}}", self.text()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExpressionSource")]
pub struct Expression {
    pub id: i32,
    pub chunks: Vec<Chunk>,
}

impl Expression {
    pub fn new(id: i32, chunks: Vec<Chunk>) -> Expression {
        Expression { id, chunks }
    }

    pub fn parse(id: i32, source: &str) -> Result<Expression> {
        Ok(Expression {
            id,
            chunks: parse_chunks(source)?,
        })
    }

    /// Expression text the chunks were parsed from.
    pub fn text(&self) -> String {
        self.chunks.iter().map(|chunk| chunk.to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Tasks describe an expression either by its text or by explicit chunks.
#[derive(Deserialize)]
struct ExpressionSource {
    id: i32,
    text: Option<String>,
    chunks: Option<Vec<Chunk>>,
}

impl TryFrom<ExpressionSource> for Expression {
    type Error = ExpressionError;

    fn try_from(source: ExpressionSource) -> Result<Expression> {
        match (source.text, source.chunks) {
            (Some(text), None) => Expression::parse(source.id, &text),
            (None, Some(chunks)) => Ok(Expression::new(source.id, chunks)),
            (Some(_), Some(_)) => Err(ExpressionError::AmbiguousSource(source.id)),
            (None, None) => Err(ExpressionError::MissingSource(source.id)),
        }
    }
}

pub fn parse_chunks(source: &str) -> Result<Vec<Chunk>> {
    let pairs = ExpressionParser::parse(Rule::expression, source).map_err(|err| {
        error!("Fail parsing expression. {}", err);
        ExpressionError::Parse(err.to_string())
    })?;

    let mut chunks = Vec::new();
    for pair in pairs {
        for inner in pair.into_inner() {
            build_chunk(inner, &mut chunks);
        }
    }
    trace!("Expression chunks: {:?}", chunks);
    Ok(chunks)
}

fn build_chunk(pair: pest::iterators::Pair<Rule>, dst: &mut Vec<Chunk>) {
    let kind = match pair.as_rule() {
        Rule::parameter => ChunkKind::Parameter,
        Rule::field => ChunkKind::Field,
        Rule::variable => ChunkKind::Variable,
        Rule::resource => ChunkKind::Resource,
        Rule::text | Rule::dollar => {
            push_literal(pair.as_str(), dst);
            return;
        }
        _ => return,
    };
    let name = pair
        .into_inner()
        .next()
        .map(|name| name.as_str())
        .unwrap_or("");
    dst.push(Chunk::new(kind, name));
}

fn push_literal(text: &str, dst: &mut Vec<Chunk>) {
    if let Some(Chunk {
        kind: ChunkKind::Text,
        text: Some(previous),
    }) = dst.last_mut()
    {
        previous.push_str(text);
        return;
    }
    dst.push(Chunk::literal(text));
}

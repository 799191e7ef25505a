use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::expression::Expression;

pub mod pie;

pub use pie::PieDataset;

pub const UNSPECIFIED_DATASET: i8 = -1;
pub const PIE_DATASET: i8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResetType {
    None,
    Report,
    Page,
    Column,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncrementType {
    None,
    Report,
    Page,
    Column,
    Group,
}

/// When a chart's data is reset and incremented while the report fills.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDataset {
    pub reset_type: ResetType,
    pub reset_group: Option<String>,
    pub increment_type: IncrementType,
    pub increment_group: Option<String>,
    pub increment_when_expression: Option<Rc<Expression>>,
}

impl Default for ElementDataset {
    fn default() -> Self {
        ElementDataset {
            reset_type: ResetType::Report,
            reset_group: None,
            increment_type: IncrementType::None,
            increment_group: None,
            increment_when_expression: None,
        }
    }
}

/// Design-time chart data. Concrete dataset kinds override
/// [`ChartDataset::dataset_type`].
pub trait ChartDataset {
    fn element_dataset(&self) -> &ElementDataset;

    fn dataset_type(&self) -> i8 {
        UNSPECIFIED_DATASET
    }
}

/// Copies design objects, handing out one copy per source object so shared
/// references stay shared in the copy.
#[derive(Default)]
pub struct ObjectFactory {
    expressions: HashMap<*const Expression, (Rc<Expression>, Rc<Expression>)>,
}

impl ObjectFactory {
    pub fn new() -> ObjectFactory {
        ObjectFactory::default()
    }

    pub fn expression(&mut self, source: &Rc<Expression>) -> Rc<Expression> {
        // the source is kept alive so its address cannot be reused by another expression
        let (_, copy) = self
            .expressions
            .entry(Rc::as_ptr(source))
            .or_insert_with(|| (Rc::clone(source), Rc::new(Expression::clone(source))));
        Rc::clone(copy)
    }

    pub fn optional_expression(&mut self, source: Option<&Rc<Expression>>) -> Option<Rc<Expression>> {
        source.map(|expression| self.expression(expression))
    }

    pub fn element_dataset(&mut self, source: &ElementDataset) -> ElementDataset {
        ElementDataset {
            reset_type: source.reset_type,
            reset_group: source.reset_group.clone(),
            increment_type: source.increment_type,
            increment_group: source.increment_group.clone(),
            increment_when_expression: self
                .optional_expression(source.increment_when_expression.as_ref()),
        }
    }

    pub fn copied_expressions(&self) -> usize {
        self.expressions.len()
    }
}

/// Base chart dataset with no particular dataset kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignChartDataset {
    dataset: ElementDataset,
}

impl DesignChartDataset {
    pub fn new() -> DesignChartDataset {
        DesignChartDataset::default()
    }

    /// Copies the settings of `dataset`, sharing its expressions.
    pub fn from_dataset(dataset: &dyn ChartDataset) -> DesignChartDataset {
        DesignChartDataset {
            dataset: dataset.element_dataset().clone(),
        }
    }

    pub fn from_dataset_with_factory(
        dataset: &dyn ChartDataset,
        factory: &mut ObjectFactory,
    ) -> DesignChartDataset {
        DesignChartDataset {
            dataset: factory.element_dataset(dataset.element_dataset()),
        }
    }

    pub fn element_dataset_mut(&mut self) -> &mut ElementDataset {
        &mut self.dataset
    }
}

impl ChartDataset for DesignChartDataset {
    fn element_dataset(&self) -> &ElementDataset {
        &self.dataset
    }
}

use std::rc::Rc;

use super::{ChartDataset, DesignChartDataset, ElementDataset, ObjectFactory, PIE_DATASET};
use crate::expression::Expression;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieDataset {
    base: DesignChartDataset,
    pub key_expression: Option<Rc<Expression>>,
    pub value_expression: Option<Rc<Expression>>,
    pub label_expression: Option<Rc<Expression>>,
}

impl PieDataset {
    pub fn new() -> PieDataset {
        PieDataset::default()
    }

    pub fn from_dataset(dataset: &PieDataset) -> PieDataset {
        PieDataset {
            base: DesignChartDataset::from_dataset(dataset),
            key_expression: dataset.key_expression.clone(),
            value_expression: dataset.value_expression.clone(),
            label_expression: dataset.label_expression.clone(),
        }
    }

    pub fn from_dataset_with_factory(dataset: &PieDataset, factory: &mut ObjectFactory) -> PieDataset {
        PieDataset {
            base: DesignChartDataset::from_dataset_with_factory(dataset, factory),
            key_expression: factory.optional_expression(dataset.key_expression.as_ref()),
            value_expression: factory.optional_expression(dataset.value_expression.as_ref()),
            label_expression: factory.optional_expression(dataset.label_expression.as_ref()),
        }
    }

    pub fn element_dataset_mut(&mut self) -> &mut ElementDataset {
        self.base.element_dataset_mut()
    }
}

impl ChartDataset for PieDataset {
    fn element_dataset(&self) -> &ElementDataset {
        self.base.element_dataset()
    }

    fn dataset_type(&self) -> i8 {
        PIE_DATASET
    }
}

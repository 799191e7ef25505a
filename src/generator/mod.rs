use chrono::Local;
use log::{debug, trace};
use thiserror::Error;

use crate::expression::{ChunkKind, EvaluationMode, Expression};
use crate::task::CompileTask;

pub mod util;

use util::{escape_string_literal, java_identifier};

pub type Result<T> = std::result::Result<T, GenerateError>;

/// A chunk referenced a name the task does not declare. This points at an
/// inconsistent report model upstream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Expression {expression} references unknown parameter '{name}'")]
    UnknownParameter { expression: i32, name: String },

    #[error("Expression {expression} references unknown field '{name}'")]
    UnknownField { expression: i32, name: String },

    #[error("Expression {expression} references unknown variable '{name}'")]
    UnknownVariable { expression: i32, name: String },
}

const SCRIPT_IMPORTS: &str = "\
import net.sf.jasperreports.engine.*;
import net.sf.jasperreports.engine.fill.*;

import java.util.*;
import java.math.*;
import java.text.*;
import java.io.*;
import java.net.*;

";

const SCRIPT_END: &str = "
    str(String key)
    {
        return super.evaluator.str(key);
    }

    msg(String pattern, Object arg0)
    {
        return super.evaluator.msg(pattern, arg0);
    }

    msg(String pattern, Object arg0, Object arg1)
    {
        return super.evaluator.msg(pattern, arg0, arg1);
    }

    msg(String pattern, Object arg0, Object arg1, Object arg2)
    {
        return super.evaluator.msg(pattern, arg0, arg1, arg2);
    }

    msg(String pattern, Object[] args)
    {
        return super.evaluator.msg(pattern, args);
    }

    return this;
}
";

pub fn generate_script(task: &CompileTask) -> Result<String> {
    ScriptGenerator::new(task).generate()
}

/// Default header timestamp, e.g. `10/19/26, 3:04 PM`.
pub fn current_timestamp() -> String {
    Local::now().format("%-m/%-d/%y, %-I:%M %p").to_string()
}

/// Emits the source of a scripted evaluator for one compile task.
pub struct ScriptGenerator<'a> {
    task: &'a CompileTask,
    timestamp: Option<String>,
}

impl<'a> ScriptGenerator<'a> {
    pub fn new(task: &'a CompileTask) -> ScriptGenerator<'a> {
        ScriptGenerator {
            task,
            timestamp: None,
        }
    }

    /// Fixes the header timestamp instead of using the current time.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn generate(&self) -> Result<String> {
        debug!(
            "Generating script for '{}': {} parameters, {} fields, {} variables, {} expressions",
            self.task.name,
            self.task.parameters.len(),
            self.task.fields.len(),
            self.task.variables.len(),
            self.task.expressions.len()
        );

        let mut sb = String::new();
        self.generate_script_start(&mut sb);
        self.generate_declarations(&mut sb);
        self.generate_init_method(&mut sb);
        sb.push_str("\n\n");

        let expressions = &self.task.expressions;
        sb.push_str(&self.generate_method(EvaluationMode::Default, expressions)?);
        if self.task.only_default_evaluation {
            sb.push_str(&self.generate_method(EvaluationMode::Old, &[])?);
            sb.push_str(&self.generate_method(EvaluationMode::Estimated, &[])?);
        } else {
            sb.push_str(&self.generate_method(EvaluationMode::Old, expressions)?);
            sb.push_str(&self.generate_method(EvaluationMode::Estimated, expressions)?);
        }

        sb.push_str(SCRIPT_END);
        Ok(sb)
    }

    fn generate_script_start(&self, sb: &mut String) {
        let timestamp = match &self.timestamp {
            Some(timestamp) => timestamp.clone(),
            None => current_timestamp(),
        };
        sb.push_str("//\n");
        sb.push_str(&format!("// Generated by JasperReports - {}\n", timestamp));
        sb.push_str("//\n");
        sb.push_str(SCRIPT_IMPORTS);

        for import in &self.task.imports {
            sb.push_str(&format!("import {};\n", import));
        }

        sb.push_str("\n\n");
        sb.push_str("createBshEvaluator()\n");
        sb.push_str("{\n\n\n");
        sb.push_str("    JREvaluator evaluator = null;\n");
        sb.push('\n');
    }

    fn generate_declarations(&self, sb: &mut String) {
        for parameter in &self.task.parameters {
            sb.push_str(&format!(
                "    JRFillParameter parameter_{} = null;\n",
                java_identifier(&parameter.name)
            ));
        }
        sb.push('\n');

        for field in &self.task.fields {
            sb.push_str(&format!(
                "    JRFillField field_{} = null;\n",
                java_identifier(&field.name)
            ));
        }
        sb.push('\n');

        for variable in &self.task.variables {
            sb.push_str(&format!(
                "    JRFillVariable variable_{} = null;\n",
                java_identifier(&variable.name)
            ));
        }
    }

    fn generate_init_method(&self, sb: &mut String) {
        sb.push_str("\n\n");
        sb.push_str("    init(\n");
        sb.push_str("        JREvaluator evaluator,\n");
        sb.push_str("        Map parsm,\n");
        sb.push_str("        Map fldsm,\n");
        sb.push_str("        Map varsm\n");
        sb.push_str("        )\n");
        sb.push_str("    {\n");
        sb.push_str("        super.evaluator = evaluator;\n");
        sb.push('\n');

        for parameter in &self.task.parameters {
            sb.push_str(&init_binding("parameter", "JRFillParameter", "parsm", &parameter.name));
        }
        sb.push('\n');

        for field in &self.task.fields {
            sb.push_str(&init_binding("field", "JRFillField", "fldsm", &field.name));
        }
        sb.push('\n');

        for variable in &self.task.variables {
            sb.push_str(&init_binding("variable", "JRFillVariable", "varsm", &variable.name));
        }

        sb.push_str("    }\n");
    }

    /// One `evaluate{suffix}(int id)` method dispatching on expression ids.
    pub fn generate_method(&self, mode: EvaluationMode, expressions: &[Expression]) -> Result<String> {
        let mut sb = String::new();

        sb.push_str(&format!("    Object evaluate{}(int id)\n", mode.method_suffix()));
        sb.push_str("    {\n");
        sb.push_str("        Object value = null;\n");
        sb.push('\n');
        sb.push_str("        switch (id)\n");
        sb.push_str("        {\n");

        for expression in expressions {
            sb.push_str(&format!("            case {} :\n", self.task.expression_id(expression)));
            sb.push_str("            {\n");
            sb.push_str(&format!(
                "                value = {};\n",
                self.render_expression(expression, mode)?
            ));
            sb.push_str("                break;\n");
            sb.push_str("            }\n");
        }

        sb.push_str("           default :\n");
        sb.push_str("           {\n");
        sb.push_str("           }\n");
        sb.push_str("        }\n");
        sb.push_str("        \n");
        sb.push_str("        return value;\n");
        sb.push_str("    }\n");
        sb.push_str("\n\n");

        Ok(sb)
    }

    pub fn render_expression(&self, expression: &Expression, mode: EvaluationMode) -> Result<String> {
        let mut sb = String::new();

        for chunk in &expression.chunks {
            let text = chunk.text();
            match chunk.kind {
                ChunkKind::Text => sb.push_str(text),
                ChunkKind::Parameter => {
                    let parameter = self.task.parameter(text).ok_or_else(|| {
                        GenerateError::UnknownParameter {
                            expression: expression.id,
                            name: text.to_string(),
                        }
                    })?;
                    sb.push_str(&format!(
                        "(({})super.parameter_{}.getValue())",
                        parameter.value_class,
                        java_identifier(text)
                    ));
                }
                ChunkKind::Field => {
                    let field = self.task.field(text).ok_or_else(|| GenerateError::UnknownField {
                        expression: expression.id,
                        name: text.to_string(),
                    })?;
                    sb.push_str(&format!(
                        "(({})super.field_{}.get{}Value())",
                        field.value_class,
                        java_identifier(text),
                        mode.field_prefix()
                    ));
                }
                ChunkKind::Variable => {
                    let variable = self.task.variable(text).ok_or_else(|| {
                        GenerateError::UnknownVariable {
                            expression: expression.id,
                            name: text.to_string(),
                        }
                    })?;
                    sb.push_str(&format!(
                        "(({})super.variable_{}.get{}Value())",
                        variable.value_class,
                        java_identifier(text),
                        mode.variable_prefix()
                    ));
                }
                // the key goes in unescaped, unlike the init bindings
                ChunkKind::Resource => {
                    sb.push_str(&format!("super.evaluator.str(\"{}\")", text));
                }
            }
        }

        if sb.is_empty() {
            sb.push_str("null");
        }
        trace!("Expression {} ({:?}): {}", expression.id, mode, sb);
        Ok(sb)
    }
}

fn init_binding(slot: &str, class: &str, map: &str, name: &str) -> String {
    format!(
        "        super.{}_{} = ({}){}.get(\"{}\");\n",
        slot,
        java_identifier(name),
        class,
        map,
        escape_string_literal(name)
    )
}

mod expression;
mod transformer;

#[cfg(test)]
pub mod test_util {
    use crate::{CompileTask, Expression, ScriptGenerator};

    pub const TIMESTAMP: &str = "1/1/70, 12:00 AM";

    pub fn generate(task: &CompileTask) -> String {
        ScriptGenerator::new(task)
            .with_timestamp(TIMESTAMP)
            .generate()
            .expect("generated")
    }

    pub fn expression(id: i32, text: &str) -> Expression {
        Expression::parse(id, text).expect("parsed")
    }

    /// Text of the `evaluate{suffix}` method, up to the next method.
    pub fn method<'a>(script: &'a str, suffix: &str) -> &'a str {
        let header = format!("    Object evaluate{}(int id)\n", suffix);
        let start = script.find(&header).expect("method present");
        let rest = &script[start..];
        let end = rest.find("return value;").expect("method end");
        &rest[..end]
    }
}

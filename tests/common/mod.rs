use report_script_lib::{CompileTask, ScriptGenerator};

pub fn generate_json(json: &str) -> String {
    let task = CompileTask::from_json(json).expect("task");
    ScriptGenerator::new(&task)
        .with_timestamp("1/1/70, 12:00 AM")
        .generate()
        .expect("script")
}

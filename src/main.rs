extern crate log;
extern crate simplelog;

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{Arg, ArgAction, Command};
use log::*;
use simplelog::*;

use report_script_lib::{CompileTask, ScriptGenerator};

fn main() {
    let matches = Command::new("Report script generator")
        .version("0.1.0")
        .about("Generate scripted expression evaluators for report compile tasks")
        .arg(
            Arg::new("task")
                .value_name("TASK")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Compile task JSON document"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Write the script to FILE instead of stdout."),
        )
        .arg(
            Arg::new("import")
                .short('i')
                .long("import")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Additional import, e.g. java.util.concurrent.*"),
        )
        .arg(
            Arg::new("default-only")
                .long("default-only")
                .action(ArgAction::SetTrue)
                .help("Only generate expressions for the default evaluation."),
        )
        .arg(
            Arg::new("v")
                .short('v')
                .action(ArgAction::Count)
                .help("Sets the level of verbosity"),
        )
        .get_matches();

    let log_level = match matches.get_count("v") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    CombinedLogger::init(vec![TermLogger::new(
        log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .expect("logger");

    let Some(task_path) = matches.get_one::<PathBuf>("task") else {
        error!("No compile task given");
        process::exit(1);
    };

    let mut now = Instant::now();
    let mut task = match CompileTask::from_path(task_path) {
        Ok(task) => task,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    if let Some(imports) = matches.get_many::<String>("import") {
        task.imports.extend(imports.cloned());
    }
    if matches.get_flag("default-only") {
        task.only_default_evaluation = true;
    }
    let load_ms = now.elapsed().as_millis();

    now = Instant::now();
    let script = match ScriptGenerator::new(&task).generate() {
        Ok(script) => script,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };
    let generate_ms = now.elapsed().as_millis();

    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            if let Err(err) = fs::write(path, &script) {
                error!("Failed writing {}: {}", path.display(), err);
                process::exit(1);
            }
            info!("Wrote {} bytes to {}", script.len(), path.display());
        }
        None => print!("{}", script),
    }

    info!("load spent: {}ms", load_ms);
    info!("generate spent: {}ms", generate_ms);
}

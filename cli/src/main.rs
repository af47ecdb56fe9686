mod logger;
mod output;
mod repl;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use output::{DumpStage, FormattedOutputHandler};
use tamago_core::reports::{self, E_IO, E_RUNTIME, Report, ReportCollector};
use tamago_core::{IrModule, Script, compile_script, run_module};

fn main() {
    let cli = Command::new("tamago")
        .version("0.1.0")
        .about("Compile one-line arithmetic programs to LLVM-style IR");

    let cli = setup_cli(cli);
    let matches = cli.get_matches();

    let verbosity = matches.get_count("verbose");
    let quiet = matches.get_flag("quiet");
    logger::init(logger::level_from_flags(verbosity, quiet));

    let code = dispatch_commands(&matches);
    std::process::exit(code);
}

/// Sets up the CLI with subcommands and arguments.
/// Without a subcommand the CLI behaves like `repl`.
fn setup_cli(cli: Command) -> Command {
    cli.arg(
        Arg::new("verbose")
            .help("Increase log output (repeat for more)")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .global(true),
    )
    .arg(
        Arg::new("quiet")
            .help("Silence all log output")
            .short('q')
            .long("quiet")
            .action(ArgAction::SetTrue)
            .global(true),
    )
    .subcommand(Command::new("repl").about("Read lines from stdin and print the IR for each"))
    .subcommand(
        Command::new("build")
            .about("Compile every line of the specified file")
            .arg(
                Arg::new("file")
                    .help("The source file to build")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::new("dump")
                    .help("Print an intermediate stage")
                    .short('d')
                    .long("dump")
                    .value_parser(DumpStage::NAMES)
                    .value_name("STAGE"),
            )
            .arg(
                Arg::new("output")
                    .help("Write the IR to this file instead of stdout")
                    .short('o')
                    .long("output")
                    .value_parser(clap::value_parser!(String))
                    .value_name("FILE"),
            )
            .arg(
                Arg::new("json")
                    .help("Emit dumps and diagnostics as JSON")
                    .long("json")
                    .action(ArgAction::SetTrue),
            ),
    )
    .subcommand(
        Command::new("run")
            .about("Compile and evaluate every line of a file")
            .arg(
                Arg::new("file")
                    .help("The source file to run")
                    .required(true)
                    .index(1),
            ),
    )
}

/// Dispatches the command based on the parsed arguments and returns the
/// process exit code.
fn dispatch_commands(matches: &ArgMatches) -> i32 {
    match matches.subcommand() {
        Some(("build", sub_m)) => {
            let Some(file) = sub_m.get_one::<String>("file") else {
                return 2;
            };
            let dump = sub_m
                .get_one::<String>("dump")
                .and_then(|name| DumpStage::from_name(name));
            let output = sub_m.get_one::<String>("output");
            let json = sub_m.get_flag("json");
            build(file, dump, output, json)
        }
        Some(("run", sub_m)) => {
            let Some(file) = sub_m.get_one::<String>("file") else {
                return 2;
            };
            run(file)
        }
        Some(("repl", _)) | None => match repl::start(std::io::stdin().lock(), std::io::stdout().lock()) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("tamago: {}", e);
                1
            }
        },
        Some((other, _)) => {
            eprintln!("Unknown command: {}. Use --help for more information.", other);
            2
        }
    }
}

fn load_script(file: &str) -> Result<Script, Report> {
    Script::new(PathBuf::from(file)).map_err(|e| Report::from_error(e.as_ref(), Some(E_IO)))
}

fn print_reports(collector: &ReportCollector, script: &Script, json: bool) {
    if collector.is_empty() {
        return;
    }
    if json {
        match collector.to_json() {
            Ok(text) => eprintln!("{}", text),
            Err(e) => eprintln!("tamago: could not serialize diagnostics: {}", e),
        }
        return;
    }
    let lines: Vec<&str> = script.content.lines().collect();
    eprint!("{}", collector.render_all(|n| lines.get(n.wrapping_sub(1)).copied()));
}

fn build(file: &str, dump: Option<DumpStage>, output: Option<&String>, json: bool) -> i32 {
    let script = match load_script(file) {
        Ok(s) => s,
        Err(report) => {
            eprintln!("{}", report);
            return 1;
        }
    };
    info!("build: {} ({} unit(s))", script.name, script.units().count());

    let units: Vec<(usize, &str)> = script.units().collect();
    let results = compile_script(&script);

    let mut collector = ReportCollector::new();
    for (_, res) in &results {
        if let Err(e) = res {
            collector.extend(reports::compile_error_reports(e));
        }
    }

    let modules: Vec<(usize, Result<&IrModule, String>)> = results
        .iter()
        .map(|(line, res)| (*line, res.as_ref().map_err(|e| e.to_string())))
        .collect();

    let mut stdout = FormattedOutputHandler::new(std::io::stdout().lock());

    if let Some(stage) = dump {
        debug!("build: dumping {:?}", stage);
        let dumped = match stage {
            DumpStage::Tokens => output::dump_tokens(&units, json),
            DumpStage::Ast => output::dump_ast(&units, json),
            DumpStage::Ir => output::dump_ir(&modules, json),
        };
        let written = match dumped {
            Ok(text) => stdout.write(format_args!("{}", text)),
            Err(e) => stdout.error(&format!("could not serialize dump: {}", e)),
        };
        if let Err(e) = written {
            eprintln!("tamago: {}", e);
            return 1;
        }
    }

    let ir_text = match output::dump_ir(&modules, false) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("tamago: {}", e);
            return 1;
        }
    };
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &ir_text) {
                eprintln!("tamago: failed to write {}: {}", path, e);
                return 1;
            }
            info!("build: wrote IR to {}", path);
        }
        None if dump.is_none() => {
            if let Err(e) = stdout.write(format_args!("{}", ir_text)) {
                eprintln!("tamago: {}", e);
                return 1;
            }
        }
        None => {}
    }
    if let Err(e) = stdout.flush() {
        eprintln!("tamago: {}", e);
        return 1;
    }

    print_reports(&collector, &script, json);
    collector.exit_code().min(1)
}

fn run(file: &str) -> i32 {
    let script = match load_script(file) {
        Ok(s) => s,
        Err(report) => {
            eprintln!("{}", report);
            return 1;
        }
    };

    match run_units(&script, std::io::stdout().lock()) {
        Ok(collector) => {
            print_reports(&collector, &script, false);
            collector.exit_code().min(1)
        }
        Err(e) => {
            eprintln!("tamago: {}", e);
            1
        }
    }
}

/// Evaluate every unit, writing `line N: value` (or the runtime error) to
/// `out`. Compile and runtime failures are collected; write failures end the
/// run.
fn run_units<W: Write>(script: &Script, out: W) -> io::Result<ReportCollector> {
    let mut collector = ReportCollector::new();
    let mut out = FormattedOutputHandler::new(out);

    for (line, res) in compile_script(script) {
        let module = match res {
            Ok(m) => m,
            Err(e) => {
                collector.extend(reports::compile_error_reports(&e));
                continue;
            }
        };
        match run_module(&module) {
            Ok(value) => out.line(&format!("line {}: {}", line, value), None)?,
            Err(e) => {
                out.error(&format!("line {}: {}", line, e))?;
                collector.push(Report::from_error(&e, Some(E_RUNTIME)));
            }
        }
    }
    out.flush()?;
    Ok(collector)
}

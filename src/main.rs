use std::{
    env,
    io::{stderr, stdout, Write},
};

use cli_table::{print_stdout, Cell, Style, Table};
use log::debug;
use variant_rs::demo::{run_all, write_report, Demo, DemoContext, DemoOutcome};
use variant_rs::*;

fn main() -> Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "help" || a == "-h" || a == "--help") {
        return print_help();
    }
    if let Err(e) = run(&args) {
        print_error(e, &mut stderr());
        std::process::exit(65);
    }
    Ok(())
}

fn run(args: &[String]) -> Result<()> {
    let plain = args.iter().any(|a| a == "--plain");
    let names: Vec<&String> = args.iter().filter(|a| *a != "--plain").collect();
    let demos = if names.is_empty() {
        Demo::ALL.to_vec()
    } else {
        names
            .iter()
            .map(|a| a.parse::<Demo>())
            .collect::<Result<Vec<_>>>()?
    };
    debug!("Running demos {:?}", demos);
    let outcomes = run_all(&demos, &DemoContext::default());
    if plain {
        write_report(&outcomes, &mut stdout())
    } else {
        print_table(&outcomes)
    }
}

fn print_table(outcomes: &[DemoOutcome]) -> Result<()> {
    let table = outcomes
        .iter()
        .map(|o| vec![o.demo.name().cell(), o.number_text().cell(), o.text().cell()])
        .collect::<Vec<_>>()
        .table()
        .title(vec![
            "Demo".cell().bold(true),
            "NumberValue".cell().bold(true),
            "ToString".cell().bold(true),
        ])
        .bold(true);
    print_stdout(table).chain_err(|| "Unable to print results")?;
    Ok(())
}

fn print_error(e: Error, writer: &mut dyn Write) {
    writeln!(writer, "{}", e).expect("Write failed");
    for cause in e.iter().skip(1) {
        writeln!(writer, "  caused by: {}", cause).expect("Write failed");
    }
}

fn print_help() -> Result<()> {
    eprintln!("Usage: variant-rs [--plain] [demo...]\nNotes: Known demos are 'volume', 'power' and 'truthiness'; all run when none is given. --plain prints one line per demo instead of a table");
    Ok(())
}

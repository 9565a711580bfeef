use std::env;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

use name_audit::{decompose, drop_problem_rows, enrich_rows_parallel, Row};

const USAGE: &str = "
Usage:
    name_audit parse <name>
    name_audit parse -
    name_audit audit <column> [--strict]

With the `parse` command, name_audit decomposes a single name. If `-` is
the argument, it expects newline-separated names on stdin and prints one
JSON result per line. Otherwise it decomposes the arguments as one name,
exiting with status 0 unless the result is a discardable problem record.

With the `audit` command, name_audit expects newline-delimited JSON records
on stdin, enriches each with the name fields decomposed from <column>, and
prints the enriched records as JSON. With --strict, problem records
(placeholders, injection patterns, empty values) are dropped. Summary
counters go to stderr.
";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "parse" {
        parse_mode(&args);
    } else if args.len() > 2 && args[1] == "audit" {
        audit_mode(&args);
    } else {
        eprintln!("{}", USAGE);
        process::exit(64);
    }
}

fn to_json(value: &impl serde::Serialize) -> String {
    serde_json::to_string(value).expect("failed to serialize result")
}

fn parse_mode(args: &[String]) {
    if args[2] == "-" {
        let reader = BufReader::new(io::stdin());
        for line in reader.lines() {
            match line {
                Ok(input) => {
                    let validation = decompose(Some(&input));
                    if writeln!(io::stdout(), "{}", to_json(&validation)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    } else {
        let validation = decompose(Some(&args[2..].join(" ")));
        println!("{}", to_json(&validation));
        if validation.is_discardable() {
            process::exit(1);
        }
    }
}

fn audit_mode(args: &[String]) {
    let column = &args[2];
    let strict = args.iter().skip(3).any(|arg| arg == "--strict");
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let mut rows: Vec<Row> = Vec::new();
    let reader = BufReader::new(io::stdin());
    for (number, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&line) {
            Ok(object) => rows.push(row_from_json(object)),
            Err(err) => eprintln!("line {}: skipping malformed record: {}", number + 1, err),
        }
    }

    let (mut validations, summary) = enrich_rows_parallel(&mut rows, column, threads);

    if strict {
        let dropped = drop_problem_rows(&mut rows, &mut validations);
        eprintln!("dropped {} problem record(s)", dropped);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for row in &rows {
        if writeln!(out, "{}", to_json(row)).is_err() {
            break;
        }
    }

    eprintln!(
        "{} records: {} non-Latin, {} placeholder, {} security, {} null/empty, \
         {} with issues, {} comma format",
        summary.total,
        summary.non_latin,
        summary.placeholder,
        summary.security,
        summary.null_or_empty,
        summary.with_issues,
        summary.comma_format,
    );
}

fn row_from_json(object: serde_json::Map<String, serde_json::Value>) -> Row {
    object
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(s),
                other => Some(other.to_string()),
            };
            (key, value)
        })
        .collect()
}

use crossbeam_utils::thread;
use log::{error, info};
use name_gender::{load, Gender, Options, Resolver};
use std::env;
use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::process;

const USAGE: &str = "
Usage:
    name_gender [--data DIR] [--options FILE] [--country COUNTRY] [--full] <name>
    name_gender [--data DIR] [--options FILE] [--country COUNTRY] [--full] -

Prints each name with its inferred gender (male, female, unisex or unknown),
separated by a tab. If `-` is the name, newline-separated names are read from
stdin and resolved in parallel; otherwise the single name given is resolved,
exiting with status 1 if its gender is unknown.

    --data DIR        name lists directory (default: $NAME_GENDER_DATA, or
                      ./nameLists)
    --options FILE    JSON file overriding the default thresholds
    --country COUNTRY country the names come from, e.g. \"Portugal\"
    --full            report \"mostly male\"/\"mostly female\" verdicts
";

const DEFAULT_DATA_DIR: &str = "nameLists";

struct Args {
    data: PathBuf,
    options: Option<PathBuf>,
    country: Option<String>,
    full: bool,
    name: String,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Args> {
    let mut data = env::var_os("NAME_GENDER_DATA").map(PathBuf::from);
    let mut options = None;
    let mut country = None;
    let mut full = false;
    let mut name = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => data = Some(PathBuf::from(args.next()?)),
            "--options" => options = Some(PathBuf::from(args.next()?)),
            "--country" => country = Some(args.next()?),
            "--full" => full = true,
            _ if name.is_none() => name = Some(arg),
            _ => return None,
        }
    }

    Some(Args {
        data: data.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        options,
        country,
        full,
        name: name?,
    })
}

fn main() {
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Some(args) => args,
        None => {
            eprintln!("{}", USAGE);
            process::exit(64);
        }
    };

    let mut options = match &args.options {
        Some(path) => match read_options(path) {
            Ok(options) => options,
            Err(e) => {
                error!("failed to read options from `{}`: {}", path.display(), e);
                process::exit(66);
            }
        },
        None => Options::default(),
    };
    if args.full {
        options.simplify = false;
    }

    let tables = match load::load_dir(&args.data) {
        Ok(tables) => tables,
        Err(e) => {
            error!("{}: {}", e, source_of(&e));
            process::exit(66);
        }
    };
    let resolver = Resolver::new(tables, options);
    let country = args.country.as_deref();

    if args.name == "-" {
        if let Err(e) = resolve_stdin(&resolver, country) {
            error!("{}", e);
            process::exit(1);
        }
    } else {
        let gender = resolver.resolve_gender(&args.name, country);
        println!("{}\t{}", args.name, display(gender));
        if gender.is_none() {
            process::exit(1);
        }
    }
}

fn read_options(path: &Path) -> Result<Options, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn source_of(e: &dyn std::error::Error) -> String {
    e.source().map(|s| s.to_string()).unwrap_or_default()
}

fn display(gender: Option<Gender>) -> &'static str {
    gender.map_or("unknown", Gender::as_str)
}

fn resolve_stdin(resolver: &Resolver, country: Option<&str>) -> io::Result<()> {
    let names = io::stdin().lock().lines().collect::<io::Result<Vec<String>>>()?;

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let chunk_size = ((names.len() + workers - 1) / workers).max(1);
    info!("resolving {} names on {} threads", names.len(), workers);

    let verdicts: Vec<Vec<Option<Gender>>> = thread::scope(|s| {
        let handles: Vec<_> = names
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|name| resolver.resolve_gender(name, country))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
    .unwrap_or_else(|e| panic::resume_unwind(e));

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (name, gender) in names.iter().zip(verdicts.into_iter().flatten()) {
        writeln!(out, "{}\t{}", name, display(gender))?;
    }
    out.flush()
}

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use lstring::{LStrMut, LStringError};

const HELP_TEXT: &str = "Runs each line of a file or standard input through a fixed-capacity string buffer.
Lines longer than the buffer are truncated, never reallocated, exactly as the lstring library would.

Per line, the operations are applied in this order: copy, trim, drop, append.

Set LSTRING_LOG to one of error, warn, info, debug or trace for diagnostics on stderr.

EXIT CODES:
0 - if completed normally
1 - if an IO error has occured
2 - if --strict was given and a line was truncated
";

#[derive(Debug, Parser)]
#[clap(version, about = HELP_TEXT)]
struct Opts {
    /// Buffer size in bytes, including the nul terminator. Lines keep at most CAPACITY - 1 bytes.
    #[clap(short, long, default_value_t = 80)]
    capacity: usize,
    /// Remove leading and trailing whitespace.
    #[clap(long)]
    trim: bool,
    /// Remove leading whitespace.
    #[clap(long)]
    trim_left: bool,
    /// Remove trailing whitespace.
    #[clap(long)]
    trim_right: bool,
    /// Remove this many bytes from the end of each line.
    #[clap(short, long, default_value_t = 0)]
    drop: usize,
    /// Append TEXT to each line. May be repeated.
    #[clap(short, long, value_name = "TEXT")]
    append: Vec<String>,
    /// Print the number scanned from the start of each line instead of the line itself.
    #[clap(short, long, arg_enum)]
    number: Option<NumberKind>,
    /// Treat truncation as an error (exit code 2).
    #[clap(short, long)]
    strict: bool,
    /// The input file. Defaults to stdin if '-' or not set
    #[clap(parse(from_os_str))]
    input: Option<PathBuf>,
    /// The output file. Defaults to stdout if '-' or not set
    #[clap(parse(from_os_str))]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ArgEnum)]
enum NumberKind {
    Int,
    Double,
}

const EXITCODE_SUCCESS: i32 = 0;
const EXITCODE_ERROR_IO: i32 = 1;
const EXITCODE_ERROR_TRUNCATED: i32 = 2;

/// Writes log records to stderr, filtered by `LSTRING_LOG`.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logger() {
    let level = std::env::var("LSTRING_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(log::LevelFilter::Warn);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() {
    let exit_code = real_main();
    std::process::exit(exit_code)
}

fn real_main() -> i32 {
    init_logger();
    let opts = Opts::parse();

    if opts.capacity == 0 {
        log::warn!("capacity 0 leaves the buffer unset, every line will be empty");
    }

    let h_stdin = io::stdin();
    let h_stdout = io::stdout();

    let input: Box<dyn Read> = match &opts.input {
        Some(file) if file.as_os_str() != "-" => match File::open(file) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("error while opening input file for reading:");
                eprintln!("{:?}", e);
                return EXITCODE_ERROR_IO;
            }
        },
        _ => Box::new(h_stdin.lock()),
    };

    let mut output: Box<dyn Write> = match &opts.output {
        Some(file) if file.as_os_str() != "-" => match File::create(file) {
            Ok(f) => Box::new(f),
            Err(e) => {
                eprintln!("error while creating output file for writing:");
                eprintln!("{:?}", e);
                return EXITCODE_ERROR_IO;
            }
        },
        _ => Box::new(h_stdout.lock()),
    };

    match process_lines(&opts, BufReader::new(input), &mut output) {
        Ok(0) => EXITCODE_SUCCESS,
        Ok(truncated) => {
            log::info!("{} line(s) truncated", truncated);
            if opts.strict {
                EXITCODE_ERROR_TRUNCATED
            } else {
                EXITCODE_SUCCESS
            }
        }
        Err(e) if e.kind() == ErrorKind::BrokenPipe => EXITCODE_SUCCESS,
        Err(e) => {
            eprintln!("io error: {}", e);
            EXITCODE_ERROR_IO
        }
    }
}

/// Applies the configured operations to one line held in `s`. Returns the truncation, if any.
fn apply(opts: &Opts, s: &mut LStrMut<'_>, line: &[u8]) -> Result<(), LStringError> {
    let mut result = s.try_cpy_bytes(line).map(|_| ());

    if opts.trim {
        s.trim();
    }
    if opts.trim_left {
        s.trim_left();
    }
    if opts.trim_right {
        s.trim_right();
    }
    for _ in 0..opts.drop {
        s.drop_last();
    }
    for text in &opts.append {
        if let Err(e) = s.try_cat_str(text) {
            result = result.and(Err(e));
        }
    }
    result
}

/// Runs every line of `input` through one reused buffer. Returns how many lines were truncated.
fn process_lines(opts: &Opts, mut input: impl BufRead, output: &mut dyn Write) -> io::Result<usize> {
    let mut storage = vec![0u8; opts.capacity];
    let mut s = LStrMut::new(&mut storage);

    let mut line = Vec::new();
    let mut lineno = 0usize;
    let mut truncated = 0usize;

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        lineno += 1;
        if line.last() == Some(&b'\n') {
            line.pop();
        }

        if let Err(e) = apply(opts, &mut s, &line) {
            log::debug!("line {}: {}", lineno, e);
            truncated += 1;
        }

        match opts.number {
            Some(NumberKind::Int) => writeln!(output, "{}", s.to_int())?,
            Some(NumberKind::Double) => writeln!(output, "{}", s.to_double())?,
            None => {
                output.write_all(s.as_bytes())?;
                output.write_all(b"\n")?;
            }
        }
    }

    output.flush()?;
    log::debug!("processed {} line(s)", lineno);
    Ok(truncated)
}

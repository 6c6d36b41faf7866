use clap::{ArgAction, Parser};
use log::{Level, Log, Metadata, Record};
use radixa::{codec::SignMode, convert::Conversion, system::NumeralSystem};

/// radixa converts integers between numeral systems of radix 2 to 36.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The system the value is written in: binary, octal, decimal,
    /// hexadecimal, or a radix such as `other:7` or `36`.
    #[arg(short, long, default_value = "decimal")]
    from: NumeralSystem,

    /// The system to convert the value into.
    #[arg(short, long, default_value = "binary")]
    to: NumeralSystem,

    /// Reads and writes signed values. Decimal values carry a `-` sign, all
    /// other systems use a radix complement.
    #[arg(short, long)]
    signed: bool,

    /// How negative binary input is written: `twos`, `ones` or
    /// `sign-and-magnitude`.
    #[arg(long, default_value = "twos")]
    from_sign: SignMode,

    /// How negative binary output is written.
    #[arg(long, default_value = "twos")]
    to_sign: SignMode,

    /// Swaps the input and output systems before converting.
    #[arg(short, long)]
    reverse: bool,

    /// Logs each conversion step to stderr. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The value to convert. Signed decimal values may start with `-`.
    #[arg(allow_negative_numbers = true)]
    value: String,
}

/// Writes log records to stderr.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => Level::Debug,
        _ => Level::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut conversion = Conversion::new(args.from, args.to, args.signed);
    conversion = conversion.with_sign_modes(args.from_sign, args.to_sign);
    if args.reverse {
        conversion = conversion.swapped();
    }

    match conversion.run(&args.value) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{}", e.user_message());
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

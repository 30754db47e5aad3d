use std::{
    fs,
    io::{IsTerminal, Read, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};

use mathml_opdict::{FlagStyle, IdentityStyle, OperatorTables, RenderConfig, TableOrder};

mod config_file;

use config_file::{ConfigError, load_config_file};

/// Generates the operator tables of a MathML operator dictionary
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generates the operator tables of a MathML operator dictionary",
    long_about = None
)]
struct Args {
    /// The properties file to read, or `-` for stdin
    #[arg(default_value = "mathfont.properties", value_name = "FILE")]
    input: PathBuf,

    /// Where to write the generated code, or `-` for stdout
    #[arg(
        short,
        long,
        default_value = "operatorTableCode.txt",
        value_name = "FILE"
    )]
    output: PathBuf,

    /// A TOML file with render options
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How operators are identified in their record
    #[arg(long, value_enum)]
    identity: Option<IdentityArg>,

    /// Write form and flags as the host bit pattern instead of named constants
    #[arg(long)]
    bits: bool,

    /// Emit the compound table before the simple table
    #[arg(long)]
    compound_first: bool,

    /// Start every record with `{`
    #[arg(long)]
    wrap_records: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IdentityArg {
    Hex,
    Escaped,
}

impl From<IdentityArg> for IdentityStyle {
    fn from(arg: IdentityArg) -> Self {
        match arg {
            IdentityArg::Hex => IdentityStyle::Hex,
            IdentityArg::Escaped => IdentityStyle::Escaped,
        }
    }
}

fn main() {
    let _ = env_logger::try_init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let args = Args::parse();

    let config = render_config(&args).unwrap_or_else(|e| exit_config_error(e));
    let source = read_input(&args.input);
    let tables = OperatorTables::from_source(&source);
    print_diagnostics(&args.input, &source, &tables);
    log::info!(
        "{} simple and {} compound operators",
        tables.simple().len(),
        tables.compound().len()
    );

    let code = tables.render(&config);
    if is_stdio(&args.output) {
        print!("{code}");
    } else {
        let mut fp = fs::File::create(&args.output).unwrap_or_else(|e| exit_io_error(e));
        fp.write_all(code.as_bytes())
            .unwrap_or_else(|e| exit_io_error(e));
        log::info!("wrote {}", args.output.display());
    }
}

/// The options from the config file, with command-line flags taking precedence.
fn render_config(args: &Args) -> Result<RenderConfig, ConfigError> {
    let mut config = match args.config {
        Some(ref path) => load_config_file(path)?.render,
        None => RenderConfig::default(),
    };
    if let Some(identity) = args.identity {
        config.identity = identity.into();
    }
    if args.bits {
        config.flags = FlagStyle::Bits;
    }
    if args.compound_first {
        config.table_order = TableOrder::CompoundFirst;
    }
    if args.wrap_records {
        config.wrap_records = true;
    }
    Ok(config)
}

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(path: &Path) -> String {
    let bytes = if is_stdio(path) {
        let mut buffer = Vec::new();
        if let Err(e) = std::io::stdin().read_to_end(&mut buffer) {
            exit_io_error(e);
        }
        buffer
    } else {
        fs::read(path).unwrap_or_else(|e| exit_io_error(e))
    };
    decode_input(path, bytes)
}

/// Properties files are often Latin-1. Keys are ASCII, so invalid bytes can only be in comments
/// and are replaced.
fn decode_input(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(err) => {
            log::warn!(
                "{}: not valid UTF-8, replacing invalid bytes",
                path.display()
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

fn print_diagnostics(path: &Path, source: &str, tables: &OperatorTables) {
    let with_color = std::io::stderr().is_terminal();
    for err in tables.diagnostics() {
        let Some(line) = source.lines().nth(err.line - 1) else {
            eprintln!("{err}");
            continue;
        };
        let name = format!("{}:{}", path.display(), err.line);
        let report = err.to_report(&name, with_color);
        if report
            .eprint((name.as_str(), ariadne::Source::from(line)))
            .is_err()
        {
            eprintln!("{err}");
        }
    }
}

fn exit_config_error(e: ConfigError) -> ! {
    eprintln!("Config error: {}", e);
    std::process::exit(2);
}

fn exit_io_error(e: std::io::Error) -> ! {
    eprintln!("IO Error: {}", e);
    std::process::exit(1);
}

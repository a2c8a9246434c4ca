/// Order-preserving base-64 keys
#[derive(Debug, argh::FromArgs)]
pub struct CliOptions {
    /// print version information and exit
    #[argh(switch, short = 'V')]
    pub version: bool,

    /// logging level (0 = Info, 1 = Debug, 2 = Trace) [env SORTKEY_VERBOSE]
    #[argh(option, short = 'v')]
    pub verbose: Option<u8>,

    #[argh(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Encode(EncodeArgs),
    Decode(DecodeArgs),
    Sort(SortArgs),
}

/// encode integers into keys (use `--` before negative values)
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "encode")]
pub struct EncodeArgs {
    /// print a JSON array instead of one key per line
    #[argh(switch)]
    pub json: bool,

    /// integers to encode
    #[argh(positional)]
    pub values: Vec<String>,
}

/// decode keys back into integers
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "decode")]
pub struct DecodeArgs {
    /// print a JSON array instead of one integer per line
    #[argh(switch)]
    pub json: bool,

    /// reject keys that decode above 2^53 - 1
    #[argh(switch)]
    pub bounded: bool,

    /// keys to decode
    #[argh(positional)]
    pub keys: Vec<String>,
}

/// read integers from stdin, one per line, and print them ordered by key
#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "sort")]
pub struct SortArgs {
    /// print a JSON array instead of `key<TAB>value` lines
    #[argh(switch)]
    pub json: bool,
}

impl CliOptions {
    pub fn parse() -> Result<Self, anyhow::Error> {
        let mut args: CliOptions = argh::from_env();

        if args.version {
            println!("sortkey {}", crate::built::PKG_VERSION);
            std::process::exit(0);
        }

        if args.verbose.is_none() {
            if let Ok(verbose) = std::env::var("SORTKEY_VERBOSE") {
                args.verbose = verbose.parse().ok();
            }
        }

        Ok(args)
    }
}

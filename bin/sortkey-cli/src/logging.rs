use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::Subscriber,
};

fn level_filter(verbose: Option<u8>) -> LevelFilter {
    match verbose {
        None | Some(0) => LevelFilter::INFO,
        Some(1) => LevelFilter::DEBUG,
        Some(_) => LevelFilter::TRACE,
    }
}

fn create_filter(verbose: Option<u8>) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level_filter(verbose).into())
}

/// Installs the global subscriber. Logs go to stderr, stdout is reserved for command output.
pub fn init(verbose: Option<u8>) -> anyhow::Result<()> {
    let subscriber = Subscriber::builder()
        .with_env_filter(create_filter(verbose))
        .with_writer(std::io::stderr)
        .finish();

    log::subscriber::set_global_default(subscriber)?;

    Ok(())
}

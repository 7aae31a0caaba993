use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vigil",
    about = "Vigil - multi-account session keep-alive daemon",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(
        short,
        long,
        env = "VIGIL_TOKEN_FILE",
        default_value = "tokens.txt",
        help = "Line-oriented token file (blank lines and # comments ignored)"
    )]
    pub token_file: PathBuf,

    #[arg(
        short,
        long,
        env = "VIGIL_PROXY",
        help = "Route all traffic through this proxy (http/https/socks5 URL)"
    )]
    pub proxy: Option<String>,

    #[arg(
        short,
        long,
        env = "VIGIL_MAX_CONCURRENCY",
        default_value_t = vigil_core::orchestrator::MAX_CONCURRENT_ACCOUNTS,
        help = "Upper bound on simultaneously active account units"
    )]
    pub max_concurrency: usize,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

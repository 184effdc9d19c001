//! respcli Client Binary
//!
//! Runs one command given on the command line, or reads commands from
//! stdin interactively until end of input.

use std::io::{self, BufRead, Write};

use clap::{ArgAction, Parser};
use respcli::{Client, Command, Config, Reply};
use tracing_subscriber::{fmt, EnvFilter};

/// respcli
#[derive(Parser, Debug)]
#[command(name = "respcli")]
#[command(about = "Command-line client for Redis-compatible servers")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Args {
    /// Server host
    #[arg(short = 'h', long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, default_value_t = 9163)]
    port: u16,

    /// Connect, read and write timeout in milliseconds (0 = none)
    #[arg(long, default_value_t = 0)]
    timeout_ms: u64,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Command and arguments to run once instead of starting a session
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

fn main() {
    // Logs go to stderr so replies on stdout stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .connect_timeout_ms(args.timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .build();

    tracing::debug!("respcli v{} connecting to {}", respcli::VERSION, config.addr());

    if let Err(e) = run(&args, &config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args, config: &Config) -> respcli::Result<()> {
    let mut client = Client::connect(config)?;
    let mut stdout = io::stdout().lock();

    match args.command.split_first() {
        Some((name, rest)) => {
            let command = Command::with_args(name.clone(), rest.iter().cloned());
            let reply = client.request(&command)?;
            print_reply(&mut stdout, &reply)?;
        }
        None => interactive(&mut client, config, &mut io::stdin().lock(), &mut stdout)?,
    }

    client.close()
}

/// Prompt, read a line, send it, print the reply; stop at end of input
fn interactive(
    client: &mut Client,
    config: &Config,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> respcli::Result<()> {
    let mut line = Vec::new();

    loop {
        write!(out, "{}>", config.addr())?;
        out.flush()?;

        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let Some(command) = Command::parse_line(&line) else {
            continue;
        };
        if command.args().is_empty() && (command.is("quit") || command.is("exit")) {
            return Ok(());
        }

        let reply = client.request(&command)?;
        print_reply(out, &reply)?;
    }
}

fn print_reply(out: &mut impl Write, reply: &Reply) -> io::Result<()> {
    writeln!(out, "{}", reply)?;
    out.flush()
}

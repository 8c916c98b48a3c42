use srtlerp::{parse, remap, write_srt, Time, TimeInterval};

use std::io::{self, Read};

use anyhow::{anyhow, Context, Result};
use clap::Parser as ClapParser;
use env_logger::Env;
use log::info;

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            std::process::exit(1);
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Linearly retime SRT subtitles onto a new time span")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to read from. If not supplied, the subtitles will be read from standard input.",
        default_value = "-"
    )]
    input: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to write to. If not supplied, the subtitles will be written to standard output.",
        default_value = "-"
    )]
    output: String,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Write a backup of the original input to the specified file."
    )]
    backup: Option<String>,
    #[arg(
        short,
        long,
        value_name = "TIME",
        help = "When the first subtitle should appear, as HH:MM:SS,mmm."
    )]
    start: Time,
    #[arg(
        short,
        long,
        value_name = "TIME",
        help = "When the last subtitle should disappear, as HH:MM:SS,mmm."
    )]
    end: Time,
    #[arg(
        long,
        help = "Keep the sequence numbers found in the input instead of renumbering from 1."
    )]
    keep_indices: bool,
    #[arg(short, long, help = "Log each processing step.")]
    verbose: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let data = if cli.input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&cli.input)
            .context(format!("Failed to open input file: '{}'", cli.input))?
    };

    if let Some(backup_path) = cli.backup {
        std::fs::write(&backup_path, &data)
            .context(format!("Failed to write backup file: '{}'", backup_path))?;
    }

    let mut subs =
        parse(&data).context(format!("Failed to parse SRT file: '{}'", cli.input))?;
    if subs.is_empty() {
        return Err(anyhow!("You appear to have supplied an empty file."));
    }
    info!("Read {} subtitles", subs.len());

    let target = TimeInterval::new(cli.start, cli.end);
    remap(&mut subs, &target).context(format!("Failed to retime subtitles onto {}", target))?;
    info!("Retimed subtitles onto {}", target);

    let auto_index = !cli.keep_indices;
    if cli.output == "-" {
        write_srt(io::stdout(), &subs, auto_index)?;
    } else {
        let dst = std::fs::File::create(&cli.output)
            .context(format!("Failed to create output file: '{}'", cli.output))?;
        write_srt(dst, &subs, auto_index)?;
    }
    info!("Wrote {} subtitles", subs.len());

    Ok(())
}

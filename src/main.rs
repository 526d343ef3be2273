use clap::Parser;
use media_source::{bindgen, CodecId, MediaSource};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "media-source")]
#[command(version, about = "Open a media file with a codec parser and report what libavformat sees")]
struct Cli {
    /// Media file to open.
    #[arg(env = "MEDIA_SOURCE_PATH")]
    path: PathBuf,

    /// Codec to initialize a bitstream parser for (h264, hevc, vp9, aac, ...).
    #[arg(short, long, env = "MEDIA_SOURCE_CODEC", default_value = "h264")]
    codec: CodecId,
}

fn run(cli: &Cli) -> media_source::Result<()> {
    let source = MediaSource::open(cli.codec, &cli.path)?;

    let format = source.format();
    println!("Path:     {}", format.path());
    println!(
        "Format:   {}",
        format.format_name().as_deref().unwrap_or("unknown")
    );
    println!("Streams:  {}", format.nb_streams());
    match format.duration_secs() {
        Some(secs) => println!("Duration: {:.2} seconds", secs),
        None => println!("Duration: unknown"),
    }
    println!("Parser:   {}", source.parser().codec_name());

    source.close();
    Ok(())
}

/// `RUST_LOG` when set, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let versions = bindgen::library_versions();
    info!(
        "libavformat {}, libavcodec {}",
        versions.avformat, versions.avcodec
    );

    if let Err(err) = run(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

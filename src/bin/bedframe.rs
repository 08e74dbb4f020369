use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use bedframe::{
    BedSink, EncodeSession, EncodeSessionOpts, FrameIndex, ImageSequence, Project, RecordSink as _,
    SinkConfig,
};

#[derive(Parser, Debug)]
#[command(name = "bedframe", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a single frame's records into a track fragment.
    Frame(FrameArgs),
    /// Encode the whole image sequence into a track file.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output track fragment path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output track path.
    #[arg(long)]
    out: PathBuf,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames prepared per batch (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let project = Project::from_path(&args.in_path)?;
    let session = EncodeSession::new(&project, EncodeSessionOpts::default())?;
    let seq = ImageSequence::from_dir(frames_dir(&project, &args.in_path))?;

    let frame = FrameIndex(args.frame);
    let path = seq
        .get(frame)
        .with_context(|| format!("frame {frame} out of range ({} frames)", seq.len()))?;
    let bytes =
        std::fs::read(path).with_context(|| format!("read frame image '{}'", path.display()))?;
    let records = session.encode_frame_bytes(frame, &bytes)?;

    let mut sink = BedSink::create(&args.out)?;
    sink.begin(SinkConfig {
        track: session.profile().clone(),
        hori_res: session.timeline().hori_res(),
        frames_total: 1,
    })?;
    for record in &records {
        sink.push_record(record)?;
    }
    sink.end()?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let project = Project::from_path(&args.in_path)?;
    let opts = EncodeSessionOpts {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let session = EncodeSession::new(&project, opts)?;
    let seq = ImageSequence::from_dir(frames_dir(&project, &args.in_path))?;

    let mut sink = BedSink::create(&args.out)?;
    let stats = session.encode_sequence(&seq, &mut sink)?;

    eprintln!(
        "wrote {} ({} frames, {} records)",
        args.out.display(),
        stats.frames_total,
        stats.records_emitted
    );
    Ok(())
}

/// Resolve the frame directory relative to the project file's location.
fn frames_dir(project: &Project, in_path: &Path) -> PathBuf {
    if project.frames_dir.is_absolute() {
        project.frames_dir.clone()
    } else {
        in_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&project.frames_dir)
    }
}

//! CLI entry point for timescan

use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use log::info;
use timescan::output::{DEFAULT_DIR_LIST, DEFAULT_FILE_LIST};
use timescan::{
    OsFileSystem, OutputConfig, SortOrder, TimeFilter, TimeMode, TreeWalker, WalkerConfig,
    parse_reference_time, write_scan,
};

#[derive(Parser, Debug)]
#[command(name = "timescan")]
#[command(about = "List files and directories modified before or after a point in time")]
#[command(version)]
struct Args {
    /// Directory to scan
    root: PathBuf,

    /// Keep entries modified at or before (before) / at or after (after) the reference time
    #[arg(value_enum)]
    mode: TimeMode,

    /// Reference date, YY/MM/DD
    date: String,

    /// Reference time, HH:MM:SS (local time)
    time: String,

    /// Where to write the file listing
    #[arg(long = "file-list", value_name = "PATH", default_value = DEFAULT_FILE_LIST)]
    file_list: PathBuf,

    /// Where to write the directory listing
    #[arg(long = "dir-list", value_name = "PATH", default_value = DEFAULT_DIR_LIST)]
    dir_list: PathBuf,

    /// Descend only N directory levels (the root is level 1)
    #[arg(short = 'L', long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Order listings by modification time (the root stays first)
    #[arg(long = "sort", value_enum, default_value = "none")]
    sort: SortOrder,

    /// Do not follow symbolic links; they are left out of both listings
    #[arg(long = "no-follow")]
    no_follow: bool,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> timescan::Result<()> {
    // Bad input must fail before anything touches the disk
    let reference = parse_reference_time(&args.date, &args.time)?;

    let walker_config = WalkerConfig::new(TimeFilter::new(reference, args.mode))
        .with_max_depth(args.max_depth);
    let walker = TreeWalker::new(walker_config)
        .with_file_system(OsFileSystem::new().follow_links(!args.no_follow));

    let result = walker.walk(&args.root)?;
    info!(
        "{} files, {} directories, {} unreadable",
        result.files.len(),
        result.dirs.len(),
        result.unreadable.len()
    );

    let output_config = OutputConfig {
        file_list: args.file_list,
        dir_list: args.dir_list,
        sort: args.sort,
    };
    write_scan(result, &output_config)
}

fn main() {
    init_logging();

    let args = Args::try_parse().unwrap_or_else(|e| {
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            e.exit();
        }
        // Usage errors exit with 1, not clap's default of 2
        let _ = e.print();
        process::exit(1);
    });

    if let Err(e) = run(args) {
        eprintln!("timescan: {}", e);
        process::exit(1);
    }
}

use clap::{Args as ClapArgs, Parser, Subcommand};
use modkit_core::library;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "modkit",
    about = "Inspect, enable and disable game mod folders",
    version
)]
struct Cli {
    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List mod folders of a mods directory as JSON
    List(RootArgs),
    /// Find a mod folder by name, ignoring its enabled state
    Find(FindArgs),
    /// Print the enabled state of a mod folder
    Status(PathArgs),
    /// Enable a mod folder by removing its disabled prefix
    Enable(PathArgs),
    /// Disable a mod folder by adding the disabled prefix
    Disable(PathArgs),
    /// Dump key-swap sections found in a mod's config files as JSON
    Keyswaps(KeySwapArgs),
}

#[derive(ClapArgs, Debug)]
struct RootArgs {
    /// Mods directory
    root: PathBuf,
}

#[derive(ClapArgs, Debug)]
struct FindArgs {
    /// Mods directory
    root: PathBuf,
    /// Folder name, with or without the disabled prefix
    name: String,
}

#[derive(ClapArgs, Debug)]
struct PathArgs {
    /// Mod folder
    path: PathBuf,
}

#[derive(ClapArgs, Debug)]
struct KeySwapArgs {
    /// Mod folder to scan
    path: PathBuf,
    /// Max directory depth
    #[arg(long, default_value_t = 8)]
    max_depth: usize,
    /// Also read config files carrying the disabled prefix
    #[arg(long, default_value_t = false)]
    include_disabled: bool,
    /// Config file extension
    #[arg(long, default_value = "ini")]
    extension: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Cmd::List(a) => cmd_list(a),
        Cmd::Find(a) => cmd_find(a),
        Cmd::Status(a) => cmd_status(a),
        Cmd::Enable(a) => cmd_toggle(a, true),
        Cmd::Disable(a) => cmd_toggle(a, false),
        Cmd::Keyswaps(a) => cmd_keyswaps(a),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_json(v: &serde_json::Value) {
    match serde_json::to_string_pretty(v) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(5);
        }
    }
}

fn cmd_list(args: RootArgs) {
    let mods = library::list_mod_folders(&args.root).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    let arr: Vec<serde_json::Value> = mods.iter().map(serde_json::Value::from).collect();
    print_json(&serde_json::Value::Array(arr));
}

fn cmd_find(args: FindArgs) {
    match library::find_mod_folder(&args.root, &args.name) {
        Ok(Some(m)) => print_json(&serde_json::Value::from(&m)),
        Ok(None) => {
            eprintln!("not found: {}", args.name);
            std::process::exit(3);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}

fn cmd_status(args: PathArgs) {
    let m = library::folder_status(&args.path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    println!("{}\t{}", m.display_name(), state_word(m.enabled));
}

fn cmd_toggle(args: PathArgs, enable: bool) {
    let target = library::plan_toggle(&args.path, enable).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(3);
    });
    if target == args.path {
        log::info!("{} is already {}", args.path.display(), state_word(enable));
        return;
    }
    if let Err(e) = std::fs::rename(&args.path, &target) {
        eprintln!("error renaming: {}", e);
        std::process::exit(4);
    }
    log::info!("{} -> {}", args.path.display(), target.display());
    println!("{}", target.display());
}

fn state_word(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

fn cmd_keyswaps(args: KeySwapArgs) {
    let opts = library::ScanOpts {
        max_depth: args.max_depth,
        skip_disabled_files: !args.include_disabled,
        extension: args.extension,
        ..Default::default()
    };
    let found = library::mod_key_swaps(&args.path, &opts).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(2);
    });
    let mut out = serde_json::Map::new();
    for (file, records) in &found {
        let arr: Vec<serde_json::Value> = records.iter().map(serde_json::Value::from).collect();
        out.insert(
            file.to_string_lossy().into_owned(),
            serde_json::Value::Array(arr),
        );
    }
    print_json(&serde_json::Value::Object(out));
}

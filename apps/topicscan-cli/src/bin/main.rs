use std::env;

use topicscan_cli::{analyze_path, build_analyzer, TopicRequest};
use topicscan_core::config::{expand_path, Config};
use topicscan_core::types::Locale;
use topicscan_text::BasicResearcher;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: topicscan <file-or-dir> <keyphrase> [--synonyms \"a, b\"] [--locale en_US] [--no-progress]";

struct Args {
    path: String,
    keyphrase: String,
    synonyms: String,
    locale: Option<String>,
    progress: bool,
}

fn parse_args() -> Args {
    let mut args = env::args().skip(1);
    let mut positional = Vec::new();
    let (mut synonyms, mut locale, mut progress) = (String::new(), None, true);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--synonyms" => synonyms = args.next().unwrap_or_else(|| usage_exit()),
            "--locale" => locale = Some(args.next().unwrap_or_else(|| usage_exit())),
            "--no-progress" => progress = false,
            "-h" | "--help" => usage_exit(),
            _ => positional.push(arg),
        }
    }
    if positional.len() != 2 { usage_exit(); }
    let keyphrase = positional.remove(1);
    let path = positional.remove(0);
    Args { path, keyphrase, synonyms, locale, progress }
}

fn usage_exit() -> ! {
    eprintln!("{}", USAGE);
    std::process::exit(1)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?.analysis()?;
    let args = parse_args();
    let locale: Locale = match args.locale { Some(tag) => tag.parse()?, None => config.default_locale.clone() };
    let request = TopicRequest { keyphrase: args.keyphrase, synonyms: args.synonyms, locale };

    let analyzer = build_analyzer(&config);
    let researcher = BasicResearcher::default();
    let reports = analyze_path(&analyzer, &researcher, &expand_path(&args.path), &request, args.progress)?;
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

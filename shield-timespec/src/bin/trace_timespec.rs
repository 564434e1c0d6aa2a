/// Timespec Tracer - Shows the flow through Lexer → Parser → Spec → Next
///
/// Usage: cargo run --bin trace_timespec "<schedule>" ["YYYY-MM-DD HH:MM:SS"]
///
/// Preview length and retention window come from
/// SHIELD_TIMESPEC_PREVIEW_OCCURRENCES and SHIELD_TIMESPEC_RETENTION_DAYS.

use chrono::NaiveDateTime;
use shield_timespec::lexer::{Lexer, TokenKind};
use shield_timespec::{parse, PreviewConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const REFERENCE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shield_timespec=info"));

    // A second subscriber only happens under test harnesses; keep going.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --bin trace_timespec \"<schedule>\" [\"YYYY-MM-DD HH:MM:SS\"]");
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --bin trace_timespec \"3rd tuesday at 23:15\" \"1991-08-06 11:15:42\"");
        std::process::exit(1);
    }

    let source = &args[1];

    let now = match args.get(2) {
        Some(raw) => match NaiveDateTime::parse_from_str(raw, REFERENCE_FORMAT) {
            Ok(now) => now,
            Err(e) => {
                eprintln!("❌ Invalid reference instant {:?}: {}", raw, e);
                std::process::exit(1);
            }
        },
        None => chrono::Local::now().naive_local(),
    };

    let config = PreviewConfig::from_env();
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    println!("╔═══════════════════════════════════════════════════════════════");
    println!("║ TIMESPEC TRACER");
    println!("╚═══════════════════════════════════════════════════════════════\n");

    println!("📝 INPUT:");
    println!("{:?}", source);
    println!();

    // Step 1: tokens
    println!("🔍 LEXER OUTPUT:");
    println!("─────────────────────────────────────────────────────────────");
    for token in Lexer::new(source).tokenize() {
        if token.kind == TokenKind::Eof {
            break;
        }
        println!(
            "  {:>3}..{:<3} {:<20} {:?}",
            token.span.start,
            token.span.end,
            token.kind.to_string(),
            &source[token.span.start..token.span.end]
        );
    }
    println!();

    // Step 2: spec
    println!("🌳 PARSER OUTPUT:");
    println!("─────────────────────────────────────────────────────────────");
    let spec = match parse(source) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   {}", source);
            eprintln!("   {}^", " ".repeat(e.position));
            std::process::exit(1);
        }
    };
    match serde_json::to_string_pretty(&spec) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("(could not serialize spec: {})", e),
    }
    println!();
    println!("Interval:  {}", spec.interval());
    println!("Canonical: {}", spec);
    println!();

    // Step 3: occurrences
    println!("⏱  NEXT {} AFTER {}:", config.occurrences, now.format(REFERENCE_FORMAT));
    println!("─────────────────────────────────────────────────────────────");
    match spec.upcoming(now, config.occurrences) {
        Ok(occurrences) => {
            for at in occurrences {
                println!("  {}", at.format("%a %Y-%m-%d %H:%M"));
            }
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
    println!();

    println!(
        "♻  RETENTION: keep {} for {} days",
        spec.keep_n(config.retention_days),
        config.retention_days
    );
}

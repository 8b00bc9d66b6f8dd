use anyhow::Result;
use audit_core::config::AppConfig;
use audit_funnel::session::{SessionError, Stage};
use audit_funnel::vault::{JsonFileVault, LeadStore};
use audit_funnel::FunnelRuntime;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "execgap", version, about = "Execution Gap audit funnel")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive audit funnel.
    Run {
        #[arg(short, long, default_value = "config/execgap.toml")]
        config: String,
    },
    /// Print the captured lead vault, newest first.
    Leads {
        #[arg(short, long, default_value = "config/execgap.toml")]
        config: String,
    },
    PrintConfig {
        #[arg(short, long, default_value = "config/execgap.toml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run { config } => {
            let cfg = AppConfig::load(&config)?;
            init_tracing(&cfg.observability.log_level);
            let runtime = FunnelRuntime::from_config(&cfg);
            run_funnel(runtime, &cfg).await?;
        }
        Commands::Leads { config } => {
            let cfg = AppConfig::load(&config)?;
            init_tracing(&cfg.observability.log_level);
            match cfg.vault.path.as_deref() {
                Some(path) => {
                    let vault = JsonFileVault::new(path, cfg.vault.capacity);
                    let records = vault
                        .list()
                        .map_err(|source| audit_core::Error::vault(path, source))?;
                    print!("{}", audit_funnel::admin::render_vault(&records));
                }
                None => println!("no vault path configured; nothing persisted"),
            }
        }
        Commands::PrintConfig { config } => {
            let cfg = AppConfig::load(&config)?;
            init_tracing(&cfg.observability.log_level);
            let json = serde_json::to_string_pretty(&cfg)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(value) => EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        Err(_) => EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn read_line() -> Result<String> {
    print!("> ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn status_line(rt: &FunnelRuntime) -> &'static str {
    if rt.is_syncing() {
        "VAULTING_DATA..."
    } else {
        "SYSTEM_ACTIVE"
    }
}

/// Hidden admin control: "." taps, "x" dismisses. Returns true when the
/// input was consumed here.
fn handle_admin(input: &str, rt: &mut FunnelRuntime) -> bool {
    match input {
        "." => {
            if rt.admin_tap() {
                print!("{}", rt.admin_view());
            }
            true
        }
        "x" if rt.admin_visible() => {
            rt.dismiss_admin();
            println!("TERMINAL_EXIT");
            true
        }
        _ => false,
    }
}

async fn run_funnel(mut rt: FunnelRuntime, cfg: &AppConfig) -> Result<()> {
    println!("== THE EXECUTION GAP ==");
    println!("Quantify the distance between your ambition and your reality.");
    println!("[{}] press enter to start the audit", status_line(&rt));
    loop {
        let input = read_line()?;
        if handle_admin(&input, &mut rt) {
            continue;
        }
        if input == "q" {
            return Ok(());
        }
        if input.is_empty() {
            rt.begin()?;
            break;
        }
    }

    while rt.stage() == Stage::Quiz {
        let question = match rt.current_question() {
            Some(q) => q,
            None => break,
        };
        println!();
        println!(
            "[{} OF {}] PILLAR: {}",
            rt.question_index() + 1,
            rt.question_count(),
            question.pillar
        );
        println!("{}", question.prompt);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}. {}", i + 1, option.label);
        }
        println!("(number selects, enter continues)");
        loop {
            let input = read_line()?;
            if handle_admin(&input, &mut rt) {
                continue;
            }
            if input.is_empty() {
                if rt.can_advance() {
                    rt.advance()?;
                    break;
                }
                println!("select an option first");
                continue;
            }
            match input.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if rt.select_option(n - 1).is_err() {
                        println!("no such option");
                    }
                }
                _ => println!("unrecognized input"),
            }
        }
    }

    println!();
    println!("AUDIT COMPLETE. Identification required for vault access.");
    let result = loop {
        println!("enter your email to unlock the diagnosis");
        let input = read_line()?;
        if handle_admin(&input, &mut rt) {
            continue;
        }
        rt.set_email(input)?;
        match rt.unlock() {
            Ok(result) => break result,
            Err(err) if err.downcast_ref::<SessionError>() == Some(&SessionError::InvalidEmail) => {
                println!("Valid corporate email required.");
            }
            Err(err) => return Err(err),
        }
    };

    println!();
    println!("ENCRYPTING DATA... [{}]", status_line(&rt));
    rt.finish_after_delay().await?;

    println!();
    println!("EXECUTION IQ RESULT: {}%", result.percentage);
    println!("{}", result.tier);
    println!("{}", result.description());
    println!();
    println!("PROTOCOL ACCESS: {}", cfg.links.protocol_url);
    println!("FULL FORENSIC DIAGNOSIS: {}", cfg.links.booking_url);
    info!(score = result.percentage, tier = %result.tier, "audit complete");

    // Terminal stage; only the hidden admin view and quit remain.
    loop {
        let input = read_line()?;
        if handle_admin(&input, &mut rt) {
            continue;
        }
        if input == "q" || input.is_empty() {
            return Ok(());
        }
    }
}

use clap::{Parser, Subcommand};
use grace_cli::commands;
use grace_cli::logging;
use grace_cli::readline;
use grace_cli::CliContext;

fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let mut ctx = CliContext::new();

    println!("grace simulation driver. 'help' lists commands, 'exit' quits");

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                println!("{err}");
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "teleport grace simulation driver")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Queue a teleport completion for the next tick
    Teleport {
        #[arg(short, long)]
        entity: i64,
        /// Queue a failed teleport (grants nothing)
        #[arg(long)]
        fail: bool,
    },
    /// Queue a qualifying deliberate action for the next tick
    Action {
        #[arg(short, long)]
        entity: i64,
    },
    /// Advance the simulation by N one-second frames
    Tick {
        #[arg(short, long, default_value_t = 1)]
        secs: u32,
    },
    /// Show active grace instances
    Status,
    /// Ask the AI skip decision for a candidate
    Query {
        #[arg(short, long)]
        entity: i64,
        /// Evaluate the candidate as an NPC (ineligible by default policy)
        #[arg(long)]
        npc: bool,
        /// Pretend the engine already decided to skip this candidate
        #[arg(long)]
        base_skip: bool,
    },
    /// Set the grace duration in seconds (1-300)
    SetDuration {
        #[arg(short, long)]
        value: u32,
        /// Submit as a non-authoritative (replica) write
        #[arg(long)]
        remote: bool,
    },
    /// Lock the configuration against replica writes
    Lock {
        #[arg(long)]
        remote: bool,
    },
    /// Unlock the configuration
    Unlock {
        #[arg(long)]
        remote: bool,
    },
    /// Show current configuration and effect definition
    Config,
    /// Persist the configuration
    Save,
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "grace".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match cli.command {
        Some(Commands::Teleport { entity, fail }) => commands::teleport(ctx, entity, fail),
        Some(Commands::Action { entity }) => commands::action(ctx, entity),
        Some(Commands::Tick { secs }) => commands::tick(ctx, secs),
        Some(Commands::Status) => commands::status(ctx),
        Some(Commands::Query {
            entity,
            npc,
            base_skip,
        }) => commands::query(ctx, entity, npc, base_skip),
        Some(Commands::SetDuration { value, remote }) => {
            commands::set_duration(ctx, value, remote)
        }
        Some(Commands::Lock { remote }) => commands::set_lock(ctx, true, remote),
        Some(Commands::Unlock { remote }) => commands::set_lock(ctx, false, remote),
        Some(Commands::Config) => commands::show_config(ctx),
        Some(Commands::Save) => commands::save(ctx),
        Some(Commands::Exit) => return Ok(true),
        None => {}
    }
    Ok(false)
}

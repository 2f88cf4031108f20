//! configurator-runner: headless runner for the dealership configurator.
//!
//! Usage:
//!   configurator-runner --list
//!   configurator-runner --vehicle compact-hatch
//!   configurator-runner --vehicle compact-hatch --ipc-mode
//!     {"type":"command","command":{"cmd":"toggle_option","option":"Navigation"}}
//!   configurator-runner --contact --name "..." --email "..." --message "..." --db leads.db

use anyhow::Result;
use dealer_core::{
    command::ConfiguratorCommand,
    config::SiteConfig,
    configurator::{ConfiguratorSession, ConfiguratorView},
    contact::{self, ContactRequest, ContactResponse, Mailer},
    event::ConfiguratorEvent,
    mailer::{HttpMailer, UnconfiguredMailer},
    store::LeadStore,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetView,
    Command {
        command: ConfiguratorCommand,
    },
    Quit,
}

#[derive(serde::Serialize)]
struct IpcReply<'a> {
    events: &'a [ConfiguratorEvent],
    view:   ConfiguratorView,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = string_arg(&args, "--data-dir").unwrap_or("./data");
    let config = SiteConfig::load(data_dir)?;

    if has_flag(&args, "--list") {
        for catalog in config.vehicles.values() {
            println!("{:<20} {:<24} ¥{}/month", catalog.vehicle_id, catalog.label, catalog.base_price);
        }
        return Ok(());
    }

    if has_flag(&args, "--contact") {
        let request = ContactRequest {
            name:    string_arg(&args, "--name").unwrap_or_default().to_string(),
            email:   string_arg(&args, "--email").unwrap_or_default().to_string(),
            message: string_arg(&args, "--message").unwrap_or_default().to_string(),
        };
        let response = run_contact(&config, &request, string_arg(&args, "--db"))?;
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    let vehicle_id = string_arg(&args, "--vehicle")
        .or_else(|| config.vehicles.keys().next().map(String::as_str))
        .ok_or_else(|| anyhow::anyhow!("No vehicle catalogs found in {data_dir}/vehicles"))?;
    let catalog = config.vehicle(vehicle_id)?.clone();
    let mut session = ConfiguratorSession::new(catalog)?;

    if has_flag(&args, "--ipc-mode") {
        run_ipc_loop(&mut session)?;
    } else {
        print_summary(&session);
    }

    Ok(())
}

fn run_contact(
    config: &SiteConfig,
    request: &ContactRequest,
    db: Option<&str>,
) -> Result<ContactResponse> {
    let mailer: Box<dyn Mailer> = match HttpMailer::from_config(&config.contact) {
        Ok(m) => Box::new(m),
        Err(e) => {
            log::error!("contact: {e}");
            Box::new(UnconfiguredMailer::new(e.to_string()))
        }
    };

    let response = match db {
        Some(path) => {
            let store = LeadStore::open(path)?;
            store.migrate()?;
            contact::submit_contact_with_store(mailer.as_ref(), &config.contact, &store, request)
        }
        None => contact::submit_contact(mailer.as_ref(), &config.contact, request),
    };
    Ok(response)
}

fn run_ipc_loop(session: &mut ConfiguratorSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        let events = match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetView => Vec::new(),
            IpcCommand::Command { command } => session.apply(command),
        };
        let reply = IpcReply { events: &events, view: session.view() };
        writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(session: &ConfiguratorSession) {
    let view = session.view();

    println!("=== {} ({}) ===", view.label, view.vehicle_id);
    println!();
    println!("  colors:");
    for c in &view.colors {
        let mark = if c.selected { "*" } else { " " };
        println!("   {mark} {:<20} {:<8} +¥{}", c.name, c.swatch, c.monthly_delta);
    }
    println!();
    for g in &view.groups {
        println!("  {}:", g.category);
        for o in &g.options {
            let mark = if o.selected { "x" } else { " " };
            println!("   [{mark}] {:<24} +¥{}", o.name, o.monthly_delta);
        }
    }
    println!();
    println!("=== QUOTE ===");
    for line in &view.quote.lines {
        println!("  {:<28} ¥{}", line.label, line.monthly_delta);
    }
    println!("  {:<28} ¥{}/month", "total", view.quote.total);
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

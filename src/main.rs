#![forbid(unsafe_code)]

mod cli;
mod constants;
mod device;
mod display;
mod error;
mod runner;
mod settings;
mod transcript;
mod tree;
mod xinput;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level as TraceLevel, debug};
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Command, SettingsAction};
use runner::SubprocessRunner;
use settings::Settings;
use xinput::Xinput;

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "info" => TraceLevel::INFO,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Cli::parse();
    debug!(command = ?args.command, "dispatching");

    if let Command::Settings { action } = &args.command {
        return handle_settings(action);
    }

    let settings = Settings::load().context("failed to load settings")?;
    let mut xinput = Xinput::new(SubprocessRunner::new());

    run_command(&mut xinput, &settings, &args.command)?;

    if args.transcript {
        println!("{}", display::render_transcript(xinput.transcript()));
    }
    Ok(())
}

fn run_command(
    xinput: &mut Xinput<SubprocessRunner>,
    settings: &Settings,
    command: &Command,
) -> Result<()> {
    match command {
        Command::List => {
            xinput.refresh_devices()?;
            print_tree(xinput, settings);
        }
        Command::Props { device_id } => {
            xinput.refresh_devices()?;
            let device = xinput
                .device_by_id(*device_id)
                .with_context(|| format!("no device with ID {device_id}"))?;
            print!("{}", display::render_props(device, settings));
        }
        Command::Info { device_id } => {
            print!("{}", xinput.device_info(*device_id)?);
        }
        Command::SetProp {
            device_id,
            prop_id,
            value,
        } => {
            xinput.refresh_devices()?;
            xinput
                .device_by_id(*device_id)
                .with_context(|| format!("no device with ID {device_id}"))?;
            xinput.set_prop(*device_id, *prop_id, value)?;
            let device = xinput
                .device_by_id(*device_id)
                .with_context(|| format!("no device with ID {device_id}"))?;
            print!("{}", display::render_props(device, settings));
        }
        Command::Float { device_id } => {
            xinput.refresh_devices()?;
            xinput.float_device(*device_id)?;
            xinput.refresh_devices()?;
            print_tree(xinput, settings);
        }
        Command::Reattach {
            device_id,
            master_id,
        } => {
            xinput.refresh_devices()?;
            xinput.reattach_device(*device_id, *master_id)?;
            xinput.refresh_devices()?;
            print_tree(xinput, settings);
        }
        Command::CreateMaster { name } => {
            xinput.refresh_devices()?;
            xinput.create_master(name)?;
            print_tree(xinput, settings);
        }
        Command::RemoveMaster { device_id } => {
            xinput.refresh_devices()?;
            xinput.remove_master(*device_id)?;
            print_tree(xinput, settings);
        }
        Command::Settings { .. } => unreachable!("handled before any tool invocation"),
    }
    Ok(())
}

fn print_tree(xinput: &Xinput<SubprocessRunner>, settings: &Settings) {
    let nodes = tree::group_by_master(xinput.devices());
    print!("{}", display::render_tree(&nodes, settings));
}

fn handle_settings(action: &SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Show => {
            let settings = Settings::load().context("failed to load settings")?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        SettingsAction::Set { key, value } => {
            let mut settings = Settings::load().context("failed to load settings")?;
            settings.set_key(key, *value)?;
            settings.save().context("failed to save settings")?;
        }
    }
    Ok(())
}

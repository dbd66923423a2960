//! Command-line front-end
//!
//! Usage:
//!   radio-console list
//!   radio-console set-freq TS-890S 14250000
//!   radio-console --dry-run set-freq FT-991A 7035000
//!   radio-console add-tcp TS-890S 192.168.1.50 60000
//!   radio-console add-serial FT-991A /dev/ttyUSB0 38400
//!   radio-console add-rigctl IC-7300 --model 3073

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::domain::RadioProfile;
use crate::state::{AppState, Settings};
use crate::store::DEFAULT_CONFIG_PATH;
use crate::transport::rigctl::DEFAULT_RIGCTL_PROGRAM;

/// Push a frequency to one of the configured radios.
#[derive(Parser, Debug)]
#[command(name = "radio-console", version, about)]
pub struct Cli {
    /// Radio configuration file
    #[arg(long, env = "RADIO_CONSOLE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Give up on a TCP radio after this many seconds (OS default otherwise)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log serial traffic instead of opening ports
    #[arg(long, env = "MOCK_SERIAL", value_parser = BoolishValueParser::new())]
    pub dry_run: bool,

    /// rigctl executable
    #[arg(long, default_value = DEFAULT_RIGCTL_PROGRAM)]
    pub rigctl: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the configured radios
    List,
    /// Set VFO-A frequency on a radio
    SetFreq {
        rig_id: String,
        /// Sent as typed, e.g. 14250000
        frequency: String,
    },
    /// Add a radio reached over TCP
    AddTcp {
        rig_id: String,
        host: String,
        port: String,
    },
    /// Add a radio on a serial port
    AddSerial {
        rig_id: String,
        port: String,
        baud_rate: u32,
    },
    /// Add a radio driven through rigctl
    AddRigctl {
        rig_id: String,
        /// Hamlib model number
        #[arg(long)]
        model: Option<u32>,
        /// Informational default frequency
        #[arg(long)]
        freq: Option<String>,
    },
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            config_path: self.config.clone(),
            timeout: self.timeout.map(Duration::from_secs),
            dry_run: self.dry_run,
            rigctl_program: self.rigctl.clone(),
        }
    }
}

/// Run one command. Only a configuration failure or a failed dispatch
/// produces a non-zero exit code.
pub fn run(cli: Cli) -> ExitCode {
    // Adding the first radio creates the config file
    let allow_missing = matches!(
        cli.command,
        Command::AddTcp { .. } | Command::AddSerial { .. } | Command::AddRigctl { .. }
    );
    let mut state = match AppState::new(&cli.settings(), allow_missing) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Command::List => {
            for line in commands::config::list_radios(&state) {
                println!("{line}");
            }
            Ok(())
        }
        Command::SetFreq { rig_id, frequency } => {
            commands::radio::set_frequency(&state, &rig_id, &frequency).map(|msg| println!("{msg}"))
        }
        Command::AddTcp { rig_id, host, port } => {
            commands::config::add_radio(&mut state, RadioProfile::tcp(&rig_id, &host, &port))
        }
        Command::AddSerial {
            rig_id,
            port,
            baud_rate,
        } => commands::config::add_radio(&mut state, RadioProfile::serial(&rig_id, &port, baud_rate)),
        Command::AddRigctl {
            rig_id,
            model,
            freq,
        } => commands::config::add_radio(
            &mut state,
            RadioProfile::rigctl(&rig_id, model, freq.as_deref()),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

//! Application state

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::{MockSerialOpener, SerialPortOpener, SystemProcessRunner};
use crate::dispatch::Dispatcher;
use crate::domain::{ProfileCollection, RigResult};
use crate::ports::SerialOpener;
use crate::store::ConfigStore;
use crate::transport::{RigctlSender, SerialSender, TcpSender};

/// Dispatcher as wired by the application: the serial opener is chosen at
/// startup (real ports or dry-run).
pub type AppDispatcher = Dispatcher<Box<dyn SerialOpener>, SystemProcessRunner>;

/// Startup options
#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    /// Connect/read timeout for TCP radios; OS defaults when `None`
    pub timeout: Option<Duration>,
    /// Log serial traffic instead of opening real ports
    pub dry_run: bool,
    pub rigctl_program: String,
}

/// Everything a command handler needs
pub struct AppState {
    pub store: ConfigStore,
    pub profiles: ProfileCollection,
    pub dispatcher: AppDispatcher,
}

impl AppState {
    /// Load the profile collection and wire up the transports.
    ///
    /// Fails only when the configuration cannot be loaded. With
    /// `allow_missing`, a config file that does not exist yet starts an
    /// empty collection instead.
    pub fn new(settings: &Settings, allow_missing: bool) -> RigResult<Self> {
        let store = ConfigStore::new(&settings.config_path);
        let profiles = if allow_missing && !store.path().exists() {
            log::info!("{} not found, starting with no radios", store.path().display());
            ProfileCollection::default()
        } else {
            store.load()?
        };
        Ok(Self::with_profiles(store, profiles, settings))
    }

    pub fn with_profiles(store: ConfigStore, profiles: ProfileCollection, settings: &Settings) -> Self {
        let tcp = match settings.timeout {
            Some(timeout) => TcpSender::with_timeout(timeout),
            None => TcpSender::new(),
        };
        let opener: Box<dyn SerialOpener> = if settings.dry_run {
            log::info!("Dry run: serial traffic is logged, no ports are opened");
            Box::new(MockSerialOpener)
        } else {
            Box::new(SerialPortOpener)
        };
        let rigctl = RigctlSender::new(SystemProcessRunner).with_program(&settings.rigctl_program);

        Self {
            store,
            profiles,
            dispatcher: Dispatcher::new(tcp, SerialSender::new(opener), rigctl),
        }
    }
}

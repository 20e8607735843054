//! Per-session simulator state.
//!
//! A `Session` owns everything a command can touch. Sessions share nothing
//! mutable, so any number can run side by side.

use std::time::{Duration, Instant};

use iosim_types::config::SimConfig;
use iosim_types::device::{InterfaceRecord, RunningConfig};
use iosim_types::error::{Result, SimError};
use iosim_types::interface::InterfaceName;
use iosim_types::mode::Mode;

pub struct Session {
    mode: Mode,
    config: RunningConfig,
    current_interface: Option<InterfaceName>,
    history: Vec<String>,
    settings: SimConfig,
    started: Instant,
    active: bool,
}

impl Session {
    /// Start a session in user EXEC mode with the configured hostname.
    pub fn new(settings: SimConfig) -> Result<Self> {
        let config = RunningConfig::new(&settings.hostname)?;
        Ok(Self::with_parts(config, settings))
    }

    fn with_parts(config: RunningConfig, settings: SimConfig) -> Self {
        Self {
            mode: Mode::UserExec,
            config,
            current_interface: None,
            history: Vec::new(),
            settings,
            started: Instant::now(),
            active: true,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &RunningConfig {
        &self.config
    }

    pub fn current_interface(&self) -> Option<&InterfaceName> {
        self.current_interface.as_ref()
    }

    /// Every non-empty line entered, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn settings(&self) -> &SimConfig {
        &self.settings
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    /// `false` once `exit`/`quit` ran in an EXEC mode.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Prompt for the current hostname and mode.
    pub fn prompt(&self) -> String {
        self.mode.prompt(self.config.hostname())
    }

    // -- Mutation, reserved for the dispatcher and handlers --

    pub(crate) fn config_mut(&mut self) -> &mut RunningConfig {
        &mut self.config
    }

    pub(crate) fn push_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::info!("mode {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        if mode != Mode::InterfaceConfig {
            self.current_interface = None;
        }
    }

    /// Enter interface configuration for `name`, creating its record if needed.
    pub(crate) fn enter_interface(&mut self, name: InterfaceName) {
        if self.config.ensure_interface(name) {
            log::info!("created interface {name}");
        }
        self.set_mode(Mode::InterfaceConfig);
        self.current_interface = Some(name);
    }

    /// Record of the interface being configured.
    pub(crate) fn current_record_mut(&mut self, command: &str) -> Result<&mut InterfaceRecord> {
        let mode = self.mode;
        let violation = || SimError::ModeViolation {
            command: command.to_string(),
            mode,
        };
        let name = self.current_interface.ok_or_else(violation)?;
        self.config.interface_mut(&name).ok_or_else(violation)
    }

    pub(crate) fn terminate(&mut self) {
        self.active = false;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_parts(RunningConfig::default(), SimConfig::default())
    }
}

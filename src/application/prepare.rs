//! Prepare Use Case
//!
//! Materializes credentials and the git identity before the pipeline runs.
//! Everything written here is global to the container and outlives the run.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::entities::{Auth, PublishConfig};
use crate::domain::ports::{FileSystem, ProcessRunner};
use crate::domain::services::commands;
use crate::error::PrepareError;

/// Private files (netrc, key, ssh config)
const SECRET_MODE: u32 = 0o600;
const SSH_DIR_MODE: u32 = 0o700;

/// Host key checking is disabled; the container never has a known_hosts
pub const SSH_CONFIG: &str = "Host *\n    StrictHostKeyChecking no\n    UserKnownHostsFile /dev/null\n";

pub struct PrepareUseCase<FS, R>
where
    FS: FileSystem,
    R: ProcessRunner,
{
    file_system: FS,
    runner: R,
}

impl<FS, R> PrepareUseCase<FS, R>
where
    FS: FileSystem,
    R: ProcessRunner,
{
    pub fn new(file_system: FS, runner: R) -> Self {
        Self {
            file_system,
            runner,
        }
    }

    pub fn execute(&self, config: &PublishConfig) -> Result<(), PrepareError> {
        let home = self
            .file_system
            .home_dir()
            .ok_or(PrepareError::NoHomeDirectory)?;

        match &config.auth {
            Auth::Netrc { login, password } => {
                let machine = config.netrc_machine();
                self.write_netrc(&home, machine, login, password)?;
                info!(
                    "using netrc file for authentication: machine {} login {}",
                    machine.unwrap_or("default"),
                    login
                );
            }
            Auth::SshKey(key) => {
                self.write_ssh_key(&home, key)?;
                info!("using ssh key for authentication");
            }
        }

        let author = &config.author;
        self.runner
            .run_checked(&commands::global_config("user.email", &author.email))
            .map_err(PrepareError::Email)?;
        self.runner
            .run_checked(&commands::global_config("user.name", &author.name))
            .map_err(PrepareError::Name)?;
        info!("committing as: {} <{}>", author.name, author.email);

        if config.skip_verify {
            self.runner
                .run_checked(&commands::global_config("http.sslVerify", "false"))
                .map_err(PrepareError::SkipVerify)?;
            warn!("ssl verification is turned off");
        }

        Ok(())
    }

    fn write_netrc(
        &self,
        home: &Path,
        machine: Option<&str>,
        login: &str,
        password: &str,
    ) -> Result<(), PrepareError> {
        let content = netrc_entry(machine, login, password);
        self.file_system
            .write_with_mode(&home.join(".netrc"), &content, SECRET_MODE)
            .map_err(PrepareError::Netrc)
    }

    fn write_ssh_key(&self, home: &Path, key: &str) -> Result<(), PrepareError> {
        let ssh_dir = home.join(".ssh");
        self.file_system
            .create_dir_with_mode(&ssh_dir, SSH_DIR_MODE)
            .map_err(PrepareError::SshKey)?;

        let mut key = key.to_string();
        if !key.ends_with('\n') {
            key.push('\n');
        }

        self.file_system
            .write_with_mode(&ssh_dir.join("id_rsa"), &key, SECRET_MODE)
            .map_err(PrepareError::SshKey)?;
        self.file_system
            .write_with_mode(&ssh_dir.join("config"), SSH_CONFIG, SECRET_MODE)
            .map_err(PrepareError::SshKey)
    }
}

/// A remote without a host (local path) gets the catch-all `default` entry
fn netrc_entry(machine: Option<&str>, login: &str, password: &str) -> String {
    let head = match machine {
        Some(machine) => format!("machine {}", machine),
        None => "default".to_string(),
    };
    format!("{}\nlogin {}\npassword {}\n", head, login, password)
}

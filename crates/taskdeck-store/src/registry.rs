use crate::local::LocalStore;
use crate::remote::RemoteStore;
use crate::traits::TaskStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Which backend the application talks to, chosen once at startup from
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    #[default]
    Local,
    Remote,
}

impl BackendMode {
    pub fn as_str(self) -> &'static str {
        match self {
            BackendMode::Local => "local",
            BackendMode::Remote => "remote",
        }
    }
}

impl fmt::Display for BackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the configured backend. Everything downstream works against the
/// boxed trait; no operation branches on the mode again.
pub fn create_store(mode: BackendMode, base_url: &str, local_path: PathBuf) -> Box<dyn TaskStore> {
    match mode {
        BackendMode::Remote => Box::new(RemoteStore::new(base_url)),
        BackendMode::Local => Box::new(LocalStore::new(local_path)),
    }
}

use std::path::PathBuf;

/// Side effects the reducer asks the event loop to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ReloadCatalog(PathBuf),
}

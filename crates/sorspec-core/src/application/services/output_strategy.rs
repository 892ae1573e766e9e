//! Output strategies - how a config document lands on disk.
//!
//! A strategy decides the [`OutputLayout`] for a base directory and creates
//! its directories. Writing the document itself is the same for every
//! strategy: one write of the finished buffer to `layout.config_file()`.

use std::path::Path;

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{CONFIG_SCOPE, OutputLayout, OutputMode},
    error::SorspecResult,
};

/// Materialization strategy for one output mode.
pub trait OutputStrategy: Send + Sync {
    fn mode(&self) -> OutputMode;

    /// Paths this strategy would use under `base`.
    fn layout(&self, base: &Path) -> OutputLayout;

    /// Create the base directory and every directory of the layout.
    fn prepare(&self, filesystem: &dyn Filesystem, layout: &OutputLayout) -> SorspecResult<()> {
        filesystem.create_dir_all(layout.root())?;
        for dir in layout.directories() {
            debug!(path = %dir.display(), "creating directory");
            filesystem.create_dir_all(dir)?;
        }
        Ok(())
    }
}

/// `<base>/sorspec.yaml`
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleFile;

impl OutputStrategy for SingleFile {
    fn mode(&self) -> OutputMode {
        OutputMode::File
    }

    fn layout(&self, base: &Path) -> OutputLayout {
        OutputLayout::new(base, format!("{CONFIG_SCOPE}.yaml"))
    }
}

/// `<base>/sorspec/app.yaml` plus an empty `<base>/sorspec/requirement/`.
///
/// The requirement directory is reserved; requirement sections are still
/// written into `app.yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryTree;

impl OutputStrategy for DirectoryTree {
    fn mode(&self) -> OutputMode {
        OutputMode::Dir
    }

    fn layout(&self, base: &Path) -> OutputLayout {
        let scope = Path::new(CONFIG_SCOPE);
        OutputLayout::new(base, scope.join("app.yaml")).with_directory(scope.join("requirement"))
    }
}

/// Strategy selected by `mode`.
pub fn strategy_for(mode: OutputMode) -> Box<dyn OutputStrategy> {
    match mode {
        OutputMode::File => Box::new(SingleFile),
        OutputMode::Dir => Box::new(DirectoryTree),
    }
}

//! Sweep execution: snapshot, confirm, delete.

use super::types::{Snapshot, SweepOptions, SweepOutcome, Target};
use crate::config::Config;
use crate::confirm::{Decision, ResponseSource, confirm};
use crate::delete::{Deleter, Removal};
use crate::error::Result;
use crate::scan::{Category, Scanner};
use crate::snapshot::Snapshotter;
use std::path::PathBuf;
use tracing::{debug, info};

/// The scanner, snapshotter and deleter for one configuration.
#[derive(Debug, Clone)]
pub struct Sweeper {
    pub scanner: Scanner,
    pub snapshotter: Snapshotter,
    pub deleter: Deleter,
}

impl Sweeper {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            scanner: Scanner::new(config)?,
            snapshotter: Snapshotter::new(config)?,
            deleter: Deleter::new(config)?,
        })
    }

    /// Run every phase in order, stopping at the first error.
    ///
    /// Each phase scans after the previous one finished, so nothing removed
    /// with a venv is looked for again.
    pub fn execute(
        &self,
        options: &SweepOptions,
        prompt: &mut dyn ResponseSource,
    ) -> Result<SweepOutcome> {
        let mut outcome = SweepOutcome::default();

        self.sweep_venvs(options, prompt, &mut outcome)?;

        if options.delete_pycache {
            for path in self.scanner.find_pycache_dirs(&options.root)? {
                self.remove(Category::Pycache, path, &mut outcome)?;
            }
        }

        if options.delete_node {
            for path in self.scanner.find_node_modules_dirs(&options.root)? {
                self.remove_confirmed(Category::NodeModules, path, options, prompt, &mut outcome)?;
            }
        }

        Ok(outcome)
    }

    fn sweep_venvs(
        &self,
        options: &SweepOptions,
        prompt: &mut dyn ResponseSource,
        outcome: &mut SweepOutcome,
    ) -> Result<()> {
        for venv in self.scanner.find_venv_dirs(&options.root)? {
            println!("Found venv in directory: {}", venv.display());

            let requirements = self.snapshotter.save_requirements(&venv)?;
            println!("Requirements frozen to {}", requirements.display());
            outcome.snapshots.push(Snapshot {
                venv: venv.clone(),
                requirements,
            });

            if options.delete_venv {
                self.remove_confirmed(Category::Venv, venv, options, prompt, outcome)?;
            }
        }
        Ok(())
    }

    /// Ask first unless `--yes`, then remove.
    ///
    /// The "Deleted" line is only printed under `--yes`; an interactive
    /// answer already shows the path.
    fn remove_confirmed(
        &self,
        category: Category,
        path: PathBuf,
        options: &SweepOptions,
        prompt: &mut dyn ResponseSource,
        outcome: &mut SweepOutcome,
    ) -> Result<()> {
        let decision = if options.yes {
            Decision::Delete
        } else {
            confirm(&path, prompt)?
        };

        match decision {
            Decision::Delete => {
                let removal = self.remove(category, path.clone(), outcome)?;
                if announces_removal(options.yes, removal) {
                    println!("Deleted {} in directory: {}", category, path.display());
                }
            }
            Decision::Skip => {
                info!(path = %path.display(), %category, "skipped");
                outcome.skipped.push(Target::new(category, path));
            }
        }
        Ok(())
    }

    fn remove(
        &self,
        category: Category,
        path: PathBuf,
        outcome: &mut SweepOutcome,
    ) -> Result<Removal> {
        let removal = self.deleter.delete(category, &path)?;
        match removal {
            Removal::Removed => {
                info!(path = %path.display(), %category, "removed");
                outcome.removed.push(Target::new(category, path));
            }
            Removal::AlreadyGone => {
                debug!(path = %path.display(), %category, "already gone");
                outcome.already_gone.push(Target::new(category, path));
            }
        }
        Ok(removal)
    }
}

/// Whether a removal gets a "Deleted ... in directory" line.
pub(super) fn announces_removal(yes: bool, removal: Removal) -> bool {
    yes && removal == Removal::Removed
}

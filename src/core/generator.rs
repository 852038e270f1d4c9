//! Builds the full action table and writes the definition file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::actions::ActionDefinition;
use crate::core::defs::{self, LabDefs};
use crate::core::error::GenerateError;
use crate::core::paths::{ACTION_SLOTS, STDOUT_MARKER};
use crate::core::sizes;

/// Counts reported after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub documented: usize,
    pub unknown: usize,
    pub deleted: usize,
}

/// Resolve every slot in index order.
pub fn build_table(defs: &LabDefs) -> Result<Vec<ActionDefinition>, GenerateError> {
    if defs.command_sizes.len() > ACTION_SLOTS {
        log::debug!(
            "Ignoring {} size entries past slot {}",
            defs.command_sizes.len() - ACTION_SLOTS,
            ACTION_SLOTS - 1
        );
    }
    for key in defs.unmatched_keys() {
        log::warn!("CommandMap key {:?} does not name an action slot; ignored", key);
    }

    let mut table = Vec::with_capacity(ACTION_SLOTS);
    for (index, size) in defs.command_sizes.iter().take(ACTION_SLOTS).enumerate() {
        let count = sizes::derive_param_count(index, size)?;
        let action = ActionDefinition::resolve(index, count, defs.descriptor(index))?;
        if action.deleted {
            log::debug!("Slot {} is deleted", index);
        }
        table.push(action);
    }
    if table.len() < ACTION_SLOTS {
        return Err(GenerateError::ConfigShape(format!(
            "CommandSizes has {} entries, expected at least {}",
            table.len(),
            ACTION_SLOTS
        )));
    }
    Ok(table)
}

/// One line per action, each newline-terminated.
pub fn render_table(table: &[ActionDefinition]) -> String {
    let mut out = String::new();
    for action in table {
        out.push_str(&action.to_string());
        out.push('\n');
    }
    out
}

pub fn summarize(table: &[ActionDefinition]) -> Summary {
    let documented = table.iter().filter(|a| a.documented).count();
    Summary {
        total: table.len(),
        documented,
        unknown: table.len() - documented,
        deleted: table.iter().filter(|a| a.deleted).count(),
    }
}

/// Reads a definitions file and writes the rendered action table.
#[derive(Clone, Debug)]
pub struct Generator {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Generator {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// True when the definitions go to stdout instead of a file.
    pub fn writes_stdout(&self) -> bool {
        self.output.as_os_str() == STDOUT_MARKER
    }

    /// Read, transform, and write. Every line is computed before the output
    /// is opened; the write itself is not atomic.
    pub fn run(&self) -> Result<Summary, GenerateError> {
        let defs = defs::load_defs(&self.input)?;
        let table = build_table(&defs)?;
        let text = render_table(&table);

        if self.writes_stdout() {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| GenerateError::Write {
                    path: self.output.clone(),
                    source,
                })?;
        } else {
            write_file(&self.output, &text)?;
        }

        let summary = summarize(&table);
        log::info!(
            "Wrote {} actions ({} documented, {} unknown, {} deleted) to {}",
            summary.total,
            summary.documented,
            summary.unknown,
            summary.deleted,
            self.output.display()
        );
        Ok(summary)
    }
}

/// Create or truncate `path` and write `text`. Creates the parent directory if needed.
fn write_file(path: &Path, text: &str) -> Result<(), GenerateError> {
    let to_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(to_err)?;
    }
    fs::write(path, text).map_err(to_err)
}

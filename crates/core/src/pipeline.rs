//! Build pipeline: clear the scratch directory, invoke the external tool,
//! harvest the produced fonts.

use std::{
    fs::remove_dir_all,
    path::{PathBuf, absolute},
    process::Command,
    time::Instant,
};

use anyhow::{Context, Result};
use log::debug;

use crate::{
    config::{BUILD_DIR, CONFIG_DIR, FONT_DIR, FONT_PATTERN, FONT_TOOL, SCRIPT_INTERPRETER},
    error::Error,
    io::{copy_into, ensure_dir, glob_files},
    plan::{BuildUnit, build_plan, discover_configs},
};

/// Build orchestrator carrying the directory layout and external commands.
///
/// Defaults match the conventional layout (`config/`, `build/`, `fonts/`);
/// every piece can be substituted, which is how the tests stand in stub
/// tools for the real ones. The CLI always runs the defaults.
pub struct Orchestrator {
    config_dir: PathBuf,
    build_dir: PathBuf,
    font_dir: PathBuf,
    font_tool: String,
    interpreter: String,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    pub fn new() -> Self {
        Self {
            config_dir: CONFIG_DIR.into(),
            build_dir: BUILD_DIR.into(),
            font_dir: FONT_DIR.into(),
            font_tool: FONT_TOOL.to_string(),
            interpreter: SCRIPT_INTERPRETER.to_string(),
        }
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    pub fn with_build_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_dir = dir.into();
        self
    }

    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dir = dir.into();
        self
    }

    pub fn with_font_tool(mut self, tool: impl Into<String>) -> Self {
        self.font_tool = tool.into();
        self
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Run builds for the given configurations, or for everything
    /// discovered in the configuration directory when none are given.
    ///
    /// Units run strictly in sequence; the first failure aborts the run
    /// with later units unprocessed.
    pub fn run(&self, configs: &[PathBuf]) -> Result<()> {
        let configs = if configs.is_empty() {
            discover_configs(&self.config_dir)?
        } else {
            configs.to_vec()
        };

        let plan = build_plan(&configs)?;
        ensure_dir(&self.font_dir)?;

        for unit in &plan {
            self.run_unit(unit)?;
        }
        Ok(())
    }

    /// Command line for one unit, as argv tokens.
    ///
    /// Batched configurations are passed through as given; a script gets
    /// its own absolute path and the absolute scratch directory.
    fn command(&self, unit: &BuildUnit) -> Result<Vec<String>> {
        match unit {
            BuildUnit::Batch(configs) => Ok(std::iter::once(self.font_tool.clone())
                .chain(configs.iter().map(|config| config.display().to_string()))
                .collect()),
            BuildUnit::Script(script) => {
                let script = absolute(script)
                    .with_context(|| format!("Failed to resolve {}", script.display()))?;
                let build_dir = absolute(&self.build_dir)
                    .with_context(|| format!("Failed to resolve {}", self.build_dir.display()))?;
                Ok(vec![
                    self.interpreter.clone(),
                    script.display().to_string(),
                    build_dir.display().to_string(),
                ])
            }
        }
    }

    fn run_unit(&self, unit: &BuildUnit) -> Result<()> {
        let argv = self.command(unit)?;
        let cmd = argv.join(" ");
        println!("{cmd}"); // very useful on failure

        let before_clear = Instant::now();
        if self.build_dir.exists() {
            remove_dir_all(&self.build_dir)
                .with_context(|| format!("Failed to remove {}", self.build_dir.display()))?;
        }
        let clear_secs = before_clear.elapsed().as_secs_f64();

        let run_start = Instant::now();
        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .status()
            .with_context(|| format!("Failed to spawn `{cmd}`"))?;
        if !status.success() {
            return Err(Error::ToolFailed { command: cmd, status }.into());
        }
        let run_secs = run_start.elapsed().as_secs_f64();

        let fonts = glob_files(&self.build_dir, FONT_PATTERN)?;
        if fonts.is_empty() {
            return Err(Error::NoFontsProduced(self.build_dir.clone()).into());
        }
        debug!("Harvesting {} fonts from {}", fonts.len(), self.build_dir.display());
        copy_into(&fonts, &self.font_dir)?;

        println!("{clear_secs:.1}s to delete {}", self.build_dir.display());
        println!("{run_secs:.1}s to run {cmd}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn batch_command_passes_configs_through_in_order() {
        let orchestrator = Orchestrator::new().with_font_tool("emojitool");
        let unit = BuildUnit::Batch(vec!["config/a.toml".into(), "config/b.toml".into()]);

        let argv = orchestrator.command(&unit).unwrap();

        assert_eq!(argv, ["emojitool", "config/a.toml", "config/b.toml"]);
    }

    #[test]
    fn script_command_gets_absolute_script_and_build_dir() {
        let orchestrator = Orchestrator::new().with_interpreter("/bin/sh");
        let unit = BuildUnit::Script("config/gen.py".into());

        let argv = orchestrator.command(&unit).unwrap();

        assert_eq!(argv.len(), 3);
        assert_eq!(argv[0], "/bin/sh");
        assert!(Path::new(&argv[1]).is_absolute());
        assert!(argv[1].ends_with("gen.py"));
        assert!(Path::new(&argv[2]).is_absolute());
        assert!(argv[2].ends_with("build"));
    }
}

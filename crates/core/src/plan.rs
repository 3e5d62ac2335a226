//! Input classification and dispatch plan construction.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use crate::{config::CONFIG_PATTERNS, error::Error, io::glob_files};

/// Kind of configuration input, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    /// Declarative configuration consumed directly by the font tool.
    Declarative,
    /// Executable build script run with the scratch directory as argument.
    Script,
}

impl ConfigKind {
    pub fn of(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Declarative),
            Some("py") => Some(Self::Script),
            _ => None,
        }
    }
}

/// One external invocation: all declarative configurations batched into a
/// single font tool command, or one executable build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildUnit {
    Batch(Vec<PathBuf>),
    Script(PathBuf),
}

/// Discover configurations in `config_dir` when none were supplied.
pub fn discover_configs(config_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut configs = Vec::new();
    for pattern in CONFIG_PATTERNS {
        configs.extend(glob_files(config_dir, pattern)?);
    }
    debug!("Discovered {} configs in {}", configs.len(), config_dir.display());
    Ok(configs)
}

/// Partition configurations into an ordered list of build units.
///
/// Declarative configurations form one batch unit dispatched first; each
/// script follows as its own unit, in input order. An unrecognized
/// extension fails the whole plan before anything runs.
pub fn build_plan(configs: &[PathBuf]) -> Result<Vec<BuildUnit>> {
    let mut batch = Vec::new();
    let mut scripts = Vec::new();

    for config in configs {
        match ConfigKind::of(config) {
            Some(ConfigKind::Declarative) => batch.push(config.clone()),
            Some(ConfigKind::Script) => scripts.push(config.clone()),
            None => return Err(Error::UnrecognizedConfig(config.clone()).into()),
        }
    }

    let mut plan = Vec::with_capacity(scripts.len() + 1);
    if !batch.is_empty() {
        plan.push(BuildUnit::Batch(batch));
    }
    plan.extend(scripts.into_iter().map(BuildUnit::Script));
    debug!("Dispatch plan has {} units", plan.len());
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn classifies_by_extension() {
        assert_eq!(ConfigKind::of(Path::new("config/noto.toml")), Some(ConfigKind::Declarative));
        assert_eq!(ConfigKind::of(Path::new("config/twemoji.py")), Some(ConfigKind::Script));
        assert_eq!(ConfigKind::of(Path::new("config/readme.md")), None);
        assert_eq!(ConfigKind::of(Path::new("config/noext")), None);
    }

    #[test]
    fn batch_precedes_scripts_in_input_order() {
        let plan = build_plan(&paths(&["a.toml", "z.py", "b.toml", "c.py"])).unwrap();

        assert_eq!(
            plan,
            vec![
                BuildUnit::Batch(paths(&["a.toml", "b.toml"])),
                BuildUnit::Script(PathBuf::from("z.py")),
                BuildUnit::Script(PathBuf::from("c.py")),
            ]
        );
    }

    #[test]
    fn scripts_only_get_one_unit_each() {
        let plan = build_plan(&paths(&["one.py", "two.py"])).unwrap();

        assert_eq!(
            plan,
            vec![
                BuildUnit::Script(PathBuf::from("one.py")),
                BuildUnit::Script(PathBuf::from("two.py")),
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_plan() {
        assert!(build_plan(&[]).unwrap().is_empty());
    }

    #[test]
    fn unrecognized_extension_is_fatal() {
        let err = build_plan(&paths(&["a.toml", "b.json"])).unwrap_err();

        match err.downcast_ref::<Error>() {
            Some(Error::UnrecognizedConfig(path)) => assert_eq!(path, Path::new("b.json")),
            other => panic!("Expected UnrecognizedConfig, got {other:?}"),
        }
    }

    #[test]
    fn discovery_finds_toml_then_py() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path().join("b.toml"), b"").unwrap();
        write(dir.path().join("a.toml"), b"").unwrap();
        write(dir.path().join("gen.py"), b"").unwrap();
        write(dir.path().join("notes.txt"), b"").unwrap();

        let names: Vec<_> = discover_configs(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, ["a.toml", "b.toml", "gen.py"]);
    }
}

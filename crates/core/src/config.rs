//! Configuration constants for font sample builds.

/// Directory searched for configurations when none are supplied.
pub const CONFIG_DIR: &str = "config";

/// Scratch directory the external tool writes font binaries into.
pub const BUILD_DIR: &str = "build";

/// Destination directory harvested font binaries accumulate in.
pub const FONT_DIR: &str = "fonts";

/// External font compilation tool for declarative configurations.
pub const FONT_TOOL: &str = "nanoemoji";

/// Interpreter used to run executable build scripts.
pub const SCRIPT_INTERPRETER: &str = "python3";

/// Glob matching the font binaries a build produces.
pub const FONT_PATTERN: &str = "*.[ot]tf";

/// Glob patterns used for configuration discovery, in discovery order.
pub const CONFIG_PATTERNS: &[&str] = &["*.toml", "*.py"];

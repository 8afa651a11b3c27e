//! Configuration system for the LEGv8 simulator.
//!
//! This module defines all configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** The classic teaching-simulator memory map and start address.
//! 2. **Structures:** General run settings and the list of provisioned memory regions.
//! 3. **Validation:** Rejection of memory maps the simulator cannot honour.
//!
//! Configuration is supplied as JSON (`Config::from_json_file`) or built with `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline memory map when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Base address of the text (program) segment.
    ///
    /// Programs are loaded here and execution starts here by default.
    pub const TEXT_BASE: u64 = 0x0040_0000;

    /// Base address of the static data segment.
    pub const DATA_BASE: u64 = 0x1000_0000;

    /// Base address of the stack segment.
    pub const STACK_BASE: u64 = 0x7FF0_0000;

    /// Size of each default segment (1 MiB).
    pub const SEGMENT_SIZE: usize = 0x0010_0000;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use legv8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 1000 },
///     "memory": {
///         "regions": [
///             { "name": "text", "base": 4194304, "size": 4096 }
///         ]
///     }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.start_pc, 0x0040_0000);
/// assert_eq!(config.memory.regions.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Provisioned memory regions
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks the memory map and start address for consistency.
    ///
    /// Regions must be non-empty, must not wrap the address space and must not
    /// overlap. The start PC must be word-aligned and inside a region.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let regions = &self.memory.regions;
        if regions.is_empty() {
            return Err(ConfigError::NoRegions);
        }

        let mut spans = Vec::with_capacity(regions.len());
        for region in regions {
            if region.size == 0 {
                return Err(ConfigError::EmptyRegion(region.name.clone()));
            }
            let end = region
                .end()
                .ok_or_else(|| ConfigError::RegionOverflow(region.name.clone()))?;
            spans.push((region.base, end, region));
        }

        spans.sort_by_key(|&(base, _, _)| base);
        for pair in spans.windows(2) {
            let (_, lo_end, lo) = pair[0];
            let (hi_base, _, hi) = pair[1];
            if hi_base < lo_end {
                return Err(ConfigError::Overlap {
                    first: lo.name.clone(),
                    second: hi.name.clone(),
                });
            }
        }

        let pc = self.general.start_pc;
        if !pc.is_multiple_of(INSTRUCTION_SIZE) {
            return Err(ConfigError::MisalignedStart(pc));
        }
        if !spans.iter().any(|&(base, end, _)| pc >= base && pc < end) {
            return Err(ConfigError::StartOutOfRange(pc));
        }
        Ok(())
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at `info` rather than `debug`
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value; programs are loaded here (defaults to the text base)
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u64,

    /// Upper bound on cycles for a run-until-halt; `None` runs until HLT
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u64 {
        defaults::TEXT_BASE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::TEXT_BASE,
            max_cycles: None,
        }
    }
}

/// Memory map configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Provisioned regions; any access outside them is a memory fault
    #[serde(default = "MemoryConfig::default_regions")]
    pub regions: Vec<RegionConfig>,
}

impl MemoryConfig {
    /// Returns the default text / data / stack layout.
    fn default_regions() -> Vec<RegionConfig> {
        vec![
            RegionConfig::new("text", defaults::TEXT_BASE, defaults::SEGMENT_SIZE),
            RegionConfig::new("data", defaults::DATA_BASE, defaults::SEGMENT_SIZE),
            RegionConfig::new("stack", defaults::STACK_BASE, defaults::SEGMENT_SIZE),
        ]
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            regions: Self::default_regions(),
        }
    }
}

/// A single contiguous, zero-initialized memory region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionConfig {
    /// Region name used in dumps and error messages
    pub name: String,
    /// First byte address of the region
    pub base: u64,
    /// Size in bytes
    pub size: usize,
}

impl RegionConfig {
    /// Creates a region description.
    pub fn new(name: &str, base: u64, size: usize) -> Self {
        Self {
            name: name.to_string(),
            base,
            size,
        }
    }

    /// Returns the exclusive end address, or `None` if the region wraps.
    pub fn end(&self) -> Option<u64> {
        self.base.checked_add(self.size as u64)
    }
}

//! Build script for scrollscope-firmware
//!
//! - Validates scope.toml at compile time
//! - Emits the parsed configuration as constants into OUT_DIR

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use scrollscope_core::config::{ConfigError, ScopeConfig};
use serde::Deserialize;

/// `[board]` section
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BoardConfig {
    spi_frequency_mhz: u32,
    touch_i2c_khz: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            spi_frequency_mhz: 40,
            touch_i2c_khz: 400,
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=scope.toml");

    let (config, board) = load_config(Path::new("scope.toml"));
    write_config(&config, &board);

    println!("cargo:warning=scope.toml validated successfully");
}

/// Read, parse and validate scope.toml
fn load_config(path: &Path) -> (ScopeConfig, BoardConfig) {
    if !path.exists() {
        fail(
            "ERROR: scope.toml not found!",
            &[
                "The firmware requires a scope.toml configuration file.".into(),
                "Please create one in the scrollscope-firmware directory.".into(),
            ],
        );
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => fail("ERROR: Failed to read scope.toml", &[format!("Error: {}", e)]),
    };

    let mut root: toml::Table = match toml::from_str(&content) {
        Ok(table) => table,
        Err(e) => fail("ERROR: Invalid TOML syntax in scope.toml", &lines(&e.to_string())),
    };

    let board: BoardConfig = match root.remove("board") {
        Some(value) => match value.try_into() {
            Ok(board) => board,
            Err(e) => fail("ERROR: Invalid [board] section", &lines(&e.to_string())),
        },
        None => BoardConfig::default(),
    };

    let config: ScopeConfig = match toml::Value::Table(root).try_into() {
        Ok(config) => config,
        Err(e) => fail("ERROR: Invalid settings in scope.toml", &lines(&e.to_string())),
    };

    let mut errors = Vec::new();
    if let Err(e) = config.validate() {
        errors.push(describe(e));
    }
    if !(1..=80).contains(&board.spi_frequency_mhz) {
        errors.push("[board] spi_frequency_mhz must be 1-80".to_string());
    }
    if !(10..=1000).contains(&board.touch_i2c_khz) {
        errors.push("[board] touch_i2c_khz must be 10-1000".to_string());
    }
    if !errors.is_empty() {
        let bullets: Vec<String> = errors.iter().map(|e| format!("• {}", e)).collect();
        fail("ERROR: Invalid values in scope.toml", &bullets);
    }

    (config, board)
}

fn describe(error: ConfigError) -> String {
    match error {
        ConfigError::FrameInterval(ms) => {
            format!("frame_interval_ms must be 1-1000 (got {})", ms)
        }
        ConfigError::MarkerSize(size) => {
            format!("touch_marker_size must be odd and 1-31 (got {})", size)
        }
        ConfigError::DuplicateColor(a, b) => {
            format!("series_colors[{}] and series_colors[{}] are identical", a, b)
        }
    }
}

/// Write `scope_config.rs` for `include!` in the firmware
fn write_config(config: &ScopeConfig, board: &BoardConfig) {
    let colors = config
        .series_colors
        .iter()
        .map(|c| format!("0x{:04X}", c))
        .collect::<Vec<_>>()
        .join(", ");

    let source = format!(
        "// Generated from scope.toml by build.rs\n\
         \n\
         pub const SCOPE_CONFIG: ScopeConfig = ScopeConfig {{\n\
         \x20   frame_interval_ms: {},\n\
         \x20   show_fps: {},\n\
         \x20   show_touch: {},\n\
         \x20   touch_marker_size: {},\n\
         \x20   series_colors: [{}],\n\
         }};\n\
         \n\
         pub const SPI_FREQUENCY_MHZ: u32 = {};\n\
         pub const TOUCH_I2C_KHZ: u32 = {};\n",
        config.frame_interval_ms,
        config.show_fps,
        config.show_touch,
        config.touch_marker_size,
        colors,
        board.spi_frequency_mhz,
        board.touch_i2c_khz,
    );

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("scope_config.rs"), source).unwrap();
}

/// Abort the build with a boxed message
fn fail(title: &str, body: &[String]) -> ! {
    let rows = body
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  {:<64} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, rows
    );
}

fn lines(msg: &str) -> Vec<String> {
    msg.lines().map(str::to_string).collect()
}

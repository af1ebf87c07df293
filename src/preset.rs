use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

pub const PRESET_FILE: &str = "CMakeUserPresets.json";

/// Generate CMakeUserPresets.json in the project root. Write-once: an
/// existing file is left untouched and reported, never merged or overwritten.
pub fn init(root: &Path) -> Result<()> {
    let Ok(vcpkg_root) = env::var("VCPKG_ROOT") else {
        bail!("VCPKG_ROOT environment variable is not set. Set it to your vcpkg root directory.");
    };

    let preset_path = root.join(PRESET_FILE);
    if preset_path.exists() {
        println!("{PRESET_FILE} already exists. Exiting.");
        return Ok(());
    }

    let content = compose_preset(configure_preset(), &vcpkg_root);
    fs::write(&preset_path, content)
        .with_context(|| format!("writing {}", preset_path.display()))?;

    println!("{PRESET_FILE} initialized.");
    println!();
    println!("Install instructions:");
    println!("  cmake --preset=default");
    println!("  cmake --build build");
    Ok(())
}

/// Configure preset for the host OS family.
fn configure_preset() -> &'static str {
    if cfg!(windows) {
        "windows-vcpkg"
    } else {
        "ninja-vcpkg"
    }
}

/// The vcpkg root is spliced in verbatim, unquoted and unescaped, exactly as
/// the environment provides it.
fn compose_preset(configure_preset: &str, vcpkg_root: &str) -> String {
    format!(
        r#"{{
  "version": 2,
  "userPresets": [
    {{
      "name": "default",
      "configurePreset": "{configure_preset}",
      "buildPreset": "default",
      "environment": {{
        "VCPKG_ROOT": {vcpkg_root},
        "CMAKE_BUILD_TYPE": "Debug"
      }}
    }}
  ]
}}"#
    )
}

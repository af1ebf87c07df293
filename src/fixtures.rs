use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Subdirectory holding fixture files.
pub const FIXTURE_DIR: &str = "sexpr";
/// Suffix selecting fixture files inside [`FIXTURE_DIR`].
pub const FIXTURE_SUFFIX: &str = ".yeet";

/// Run every fixture through the prebuilt interpreter at `build/main`,
/// relaying its output. A fixture whose invocation fails to launch is
/// reported and skipped; the remaining fixtures still run. No pass/fail
/// judgement is made here.
pub fn run_all(root: &Path) -> Result<()> {
    let main_exe = root.join("build").join("main");

    for fixture in list_fixtures(&root.join(FIXTURE_DIR))? {
        let name = fixture
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| fixture.display().to_string());
        println!("Running test: {name}");

        match run_one(&main_exe, &fixture) {
            Ok((stdout, stderr)) => {
                println!("{stdout}");
                if !stderr.is_empty() {
                    println!("{stderr}");
                }
            }
            Err(e) => {
                println!("Error running {name}: {e}");
            }
        }
    }

    Ok(())
}

/// Enumerate fixture files in `dir`. Order is whatever the directory listing
/// yields; callers must not rely on it.
fn list_fixtures(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading fixture directory {}", dir.display()))?;

    let mut fixtures = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        if entry.file_name().to_string_lossy().ends_with(FIXTURE_SUFFIX) {
            fixtures.push(entry.path());
        }
    }
    Ok(fixtures)
}

/// Invoke the interpreter on one fixture, capturing stdout and stderr as text.
fn run_one(main_exe: &Path, fixture: &Path) -> std::io::Result<(String, String)> {
    let output = Command::new(main_exe)
        .arg(format!("--filename={}", fixture.display()))
        .stdin(Stdio::null())
        .output()?;

    Ok((
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn list_fixtures_filters_on_suffix() {
        let tmp = tempdir().expect("tempdir");
        fs::write(tmp.path().join("add.yeet"), b"(+ 1 2)").expect("write");
        fs::write(tmp.path().join("notes.txt"), b"not a fixture").expect("write");
        fs::write(tmp.path().join("let.yeet"), b"(let ((x 1)) x)").expect("write");

        let mut names: Vec<String> = list_fixtures(tmp.path())
            .expect("listing")
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["add.yeet", "let.yeet"]);
    }

    #[test]
    fn list_fixtures_yields_nothing_for_empty_directory() {
        let tmp = tempdir().expect("tempdir");
        assert!(list_fixtures(tmp.path()).expect("listing").is_empty());
    }

    #[test]
    fn list_fixtures_errors_on_missing_directory() {
        let tmp = tempdir().expect("tempdir");
        assert!(list_fixtures(&tmp.path().join("absent")).is_err());
    }

    #[test]
    fn run_one_reports_launch_failure_for_missing_binary() {
        let tmp = tempdir().expect("tempdir");
        let missing = tmp.path().join("build").join("main");
        let fixture = tmp.path().join("a.yeet");
        fs::write(&fixture, b"(+ 1 2)").expect("write");

        assert!(run_one(&missing, &fixture).is_err());
    }
}

mod clean;
mod cli;
mod fixtures;
mod preset;
mod project;

fn main() {
    let start = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: cannot resolve current directory: {e}");
            std::process::exit(1);
        }
    };

    // Root discovery runs before argument parsing; nothing here makes sense
    // outside a yeet checkout.
    let Some(root) = project::find_project_root(&start) else {
        eprintln!(
            "error: {} not found. Run yeet-cli from within a yeet project.",
            project::ROOT_MARKER
        );
        std::process::exit(1);
    };

    if let Err(e) = std::env::set_current_dir(&root) {
        eprintln!(
            "error: failed to switch to project root {}: {e}",
            root.display()
        );
        std::process::exit(1);
    }

    cli::run(&root);
}

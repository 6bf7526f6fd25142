use std::{fs, io, path::Path};

use tempfile::tempdir;

use d2_readme::Error;
use d2_readme_cli::{Args, LOCAL_CONFIG_FILE, run_with_io};

/// Builds a small diagram project under `root`.
fn seed_project(root: &Path) {
    fs::create_dir(root.join(".git")).unwrap();
    let files = [
        ("top-level.md", "Architecture diagrams."),
        ("platform/01-context.d2", "a -> b"),
        ("platform/01-context.md", "System context."),
        ("platform/02-deploy.d2", "c -> d"),
        ("platform/api/flows/01-login.d2", "e -> f"),
    ];
    for (path, content) in files {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn args(root: &Path, targets: Option<&str>) -> Args {
    Args {
        targets: targets.map(str::to_string),
        top_level: false,
        root: Some(root.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
    }
}

fn run_cli(args: &Args, stdin: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run_with_io(args, io::Cursor::new(stdin.to_string()), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn e2e_full_scan() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().canonicalize().unwrap();
    seed_project(&root);

    let output = run_cli(&args(&root, None), "").expect("Full scan failed");

    let expected: Vec<String> = ["platform", "", "platform/api/flows", "platform/api", ""]
        .iter()
        .map(|dir| format!("Updated: {}", root.join(dir).join("README.md").display()))
        .collect();
    assert_eq!(output.lines().collect::<Vec<_>>(), expected);

    let platform = fs::read_to_string(root.join("platform/README.md")).unwrap();
    assert!(platform.starts_with("# Platform\n\n## Sections\n\n- [Api](./api/)\n\n## Diagrams\n\n"));
    assert!(platform.contains("## 01 - Context\n\nSystem context.\n\n![Context](./diagrams/01-context.png)"));
    assert!(platform.ends_with("## 02 - Deploy\n\n![Deploy](./diagrams/02-deploy.png)"));

    let top = fs::read_to_string(root.join("README.md")).unwrap();
    assert_eq!(
        top,
        "# D2 Diagrams Repository\n\n## Sections\n\n- [Platform](./platform/)\n\nArchitecture diagrams.\n"
    );
}

#[test]
fn e2e_stdin_targets_propagate_to_root() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().canonicalize().unwrap();
    seed_project(&root);

    // Start from a nested directory to exercise root discovery.
    let args = args(&root.join("platform/api"), Some("-"));

    let output = run_cli(&args, "platform/api/flows\n\nplatform/api/flows\n").unwrap();

    assert_eq!(output.lines().count(), 4, "unexpected output:\n{output}");
    assert!(root.join("platform/api/flows/README.md").exists());
    assert!(root.join("platform/api/README.md").exists());
    assert!(root.join("platform/README.md").exists());

    let root_doc = fs::read_to_string(root.join("README.md")).unwrap();
    assert_eq!(root_doc, "# D2 Diagrams\n\n## Sections\n\n- [Platform](./platform/)\n");
}

#[test]
fn e2e_top_level_only() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().canonicalize().unwrap();
    seed_project(&root);

    let mut args = args(&root, None);
    args.top_level = true;

    let output = run_cli(&args, "").unwrap();

    assert_eq!(output.lines().count(), 1);
    assert!(!root.join("platform/README.md").exists());
}

#[test]
fn e2e_local_config_overrides_titles() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().canonicalize().unwrap();
    seed_project(&root);
    fs::write(
        root.join(LOCAL_CONFIG_FILE),
        "[titles]\nrepository = \"Platform Architecture\"\n",
    )
    .unwrap();

    let mut args = args(&root, None);
    args.top_level = true;
    run_cli(&args, "").unwrap();

    let top = fs::read_to_string(root.join("README.md")).unwrap();
    assert!(top.starts_with("# Platform Architecture\n"));
}

#[test]
fn e2e_outside_target_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().join("repo");
    fs::create_dir(&root).unwrap();
    seed_project(&root);
    let outside = temp_dir.path().join("other");
    fs::create_dir(&outside).unwrap();

    let err = run_cli(&args(&root, Some(&outside.to_string_lossy())), "").unwrap_err();

    assert!(matches!(err, Error::OutsideRoot { .. }));
}

#[test]
fn e2e_blank_targets_do_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path().canonicalize().unwrap();
    seed_project(&root);

    let output = run_cli(&args(&root, Some("\n  \n")), "").unwrap();

    assert!(output.is_empty());
    assert!(!root.join("README.md").exists());
}

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Repository with a single root commit containing `README.md`.
pub(crate) fn create_test_repo() -> TempDir {
    create_repo(&["Initial commit"])
}

/// Repository with one commit per subject, oldest first.
///
/// The first commit adds `README.md`; each later one adds `file<N>.txt`.
pub(crate) fn create_repo(subjects: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "core.quotepath", "false"]);

    for (i, subject) in subjects.iter().enumerate() {
        if i == 0 {
            std::fs::write(path.join("README.md"), "# Test\n").unwrap();
        } else {
            let n = i + 1;
            std::fs::write(path.join(format!("file{}.txt", n)), format!("File {}\n", n)).unwrap();
        }
        git(path, &["add", "."]);
        git(path, &["commit", "-m", subject]);
    }

    temp_dir
}

/// Run git in `repo_dir`, panicking on failure, and return trimmed stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

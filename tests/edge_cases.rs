//! Edge case and error handling tests for twig


use harness::{TestTree, run_twig, summary, tree_lines};

// ============================================================================
// Layer shapes
// ============================================================================

#[test]
fn test_empty_root() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "header, blank, summary: {:?}", lines);
    assert_eq!(summary(&stdout), "0 Dir(s), 0 File(s)");
}

#[test]
fn test_single_file_layer_uses_last_connector() {
    let tree = TestTree::new();
    tree.add_file("only.txt");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["└─── only.txt"]);
}

#[test]
fn test_one_directory_two_files() {
    let tree = TestTree::new();
    tree.add_dir("d");
    tree.add_file("x.txt");
    tree.add_file("y.txt");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec!["├─── d", "├─── x.txt", "└─── y.txt"]
    );
}

#[test]
fn test_directories_listed_before_files() {
    let tree = TestTree::new();
    tree.add_file("aaa.txt");
    tree.add_dir("zzz");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["├─── zzz", "└─── aaa.txt"]);
}

#[test]
fn test_case_sensitive_ordering() {
    let tree = TestTree::new();
    tree.add_dir("beta");
    tree.add_dir("Alpha");
    tree.add_dir("alpha");

    let (stdout, _stderr, success) = run_twig(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec!["├─── Alpha", "├─── alpha", "└─── beta"]
    );
}

#[test]
fn test_continuation_bars_across_levels() {
    let tree = TestTree::new();
    tree.add_file("a/x/1.txt");
    tree.add_file("a/2.txt");
    tree.add_dir("b");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├─── a",
            "│   ├─── x",
            "│   │   └─── 1.txt",
            "│   └─── 2.txt",
            "└─── b",
        ]
    );
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_unicode_and_spaces_in_names() {
    let tree = TestTree::new();
    tree.add_file("日本語/ファイル.txt");
    tree.add_file("with space/file name.txt");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    assert!(stdout.contains("└─── ファイル.txt"), "{}", stdout);
    assert!(stdout.contains("├─── with space"), "{}", stdout);
    assert!(stdout.contains("file name.txt"), "{}", stdout);
}

#[test]
fn test_hidden_entries_are_listed() {
    let tree = TestTree::new();
    tree.add_file(".hidden/.config");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["└─── .hidden", "    └─── .config"]);
}

// ============================================================================
// Filesystem edge cases
// ============================================================================

#[test]
fn test_root_is_a_file() {
    let tree = TestTree::new();
    let file = tree.add_file("plain.txt");

    let (stdout, _stderr, success) = run_twig(&file, &["-f"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["....[Inaccessible]"]);
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = TestTree::new();
    let locked = tree.add_dir("locked");
    tree.add_dir("locked/secret");
    tree.add_dir("zopen");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    if fs::read_dir(&locked).is_ok() {
        // Running as root: permissions are not enforced.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let (stdout, _stderr, success) = run_twig(tree.path(), &[]);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(success, "unreadable directories are not fatal");
    assert_eq!(
        tree_lines(&stdout),
        vec!["├─── locked", "│   ....[Inaccessible]", "└─── zopen"]
    );
    assert_eq!(summary(&stdout), "2 Dir(s), 0 File(s)");
}

#[cfg(unix)]
#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("subdir/file.txt");
    symlink("..", tree.path().join("subdir").join("parent")).unwrap();

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success, "twig should not hang on parent symlink");
    assert_eq!(
        tree_lines(&stdout),
        vec!["└─── subdir", "    ├─── parent", "    └─── file.txt"]
    );
}

#[cfg(unix)]
#[test]
fn test_follow_links_with_depth_limit() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("real/inside.txt");
    symlink(tree.path().join("real"), tree.path().join("link")).unwrap();

    let (stdout, _stderr, success) =
        run_twig(tree.path(), &["-f", "--follow-links", "-m", "1"]);
    assert!(success);
    assert_eq!(
        tree_lines(&stdout),
        vec![
            "├─── link",
            "│   └─── inside.txt",
            "└─── real",
            "    └─── inside.txt",
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_skipped() {
    use std::os::unix::fs::symlink;

    let tree = TestTree::new();
    tree.add_file("real.txt");
    symlink("nonexistent.txt", tree.path().join("broken_link.txt")).unwrap();

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    assert_eq!(tree_lines(&stdout), vec!["└─── real.txt"]);
}

#[test]
fn test_deep_tree() {
    let tree = TestTree::new();
    let deep: Vec<String> = (0..40).map(|i| format!("d{}", i)).collect();
    tree.add_file(&format!("{}/leaf.txt", deep.join("/")));

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-f"]);
    assert!(success);
    let lines = tree_lines(&stdout);
    let leaf = lines.last().unwrap();
    assert_eq!(leaf, &format!("{}└─── leaf.txt", "    ".repeat(40)));
    assert_eq!(summary(&stdout), "40 Dir(s), 1 File(s)");
}

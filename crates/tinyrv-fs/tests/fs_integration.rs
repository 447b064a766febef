//! Filesystem integration tests
//!
//! End-to-end scenarios over a freshly bootstrapped filesystem.

use tinyrv_fs::{Denied, Filesystem, FsConfig, FsError, NodeKind, BOOTSTRAP_NODES};

fn fresh() -> Filesystem {
    Filesystem::new(FsConfig::default()).unwrap()
}

fn listing(fs: &Filesystem, path: &str) -> Vec<String> {
    fs.ls(path, false)
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

/// Test that a read-only chmod blocks writes and keeps the old content.
#[test]
fn test_write_cat_chmod_scenario() {
    let mut fs = fresh();
    fs.mkdir("docs").unwrap();
    fs.touch("docs/a.txt").unwrap();
    fs.write("docs/a.txt", "hello").unwrap();
    assert_eq!(fs.cat("docs/a.txt").unwrap(), b"hello");

    fs.chmod("docs/a.txt", 4).unwrap();
    assert_eq!(
        fs.write("docs/a.txt", "bye"),
        Err(FsError::PermissionDenied(Denied::Write))
    );
    assert_eq!(fs.cat("docs/a.txt").unwrap(), b"hello");
}

/// Test that rmdir waits until the directory is empty.
#[test]
fn test_rmdir_not_empty_scenario() {
    let mut fs = fresh();
    fs.mkdir("d").unwrap();
    fs.touch("d/only").unwrap();
    assert_eq!(fs.rmdir("d"), Err(FsError::NotEmpty));

    fs.rm("d/only").unwrap();
    fs.rmdir("d").unwrap();
    assert!(!listing(&fs, "/").contains(&"d".to_string()));
}

/// Test that a fresh filesystem exposes the documented system area.
#[test]
fn test_bootstrap_tree_is_present() {
    let fs = fresh();
    assert_eq!(fs.pwd(), "/");
    assert_eq!(fs.usage().used, BOOTSTRAP_NODES);
    assert_eq!(listing(&fs, "/"), ["bin", "etc", "sys"]);

    let rendered: Vec<String> = fs
        .ls("/", true)
        .unwrap()
        .iter()
        .map(|e| e.to_string())
        .collect();
    assert_eq!(
        rendered,
        ["dr-x S- bin/", "dr-x S- etc/", "dr-x S- sys/", "dr-x SH .boot/"]
    );

    let info = fs.stat("/etc/fsinfo").unwrap();
    assert_eq!(info.kind, NodeKind::File);
    assert_eq!(info.permissions.mode(), 4);
    assert!(fs.cat("/etc/fsinfo").unwrap().starts_with(b"{"));
}

/// Test that listing follows insertion order, not name order.
#[test]
fn test_listing_keeps_insertion_order() {
    let mut fs = fresh();
    fs.mkdir("/work").unwrap();
    for name in ["zeta", "alpha", "mid"] {
        fs.touch(&format!("/work/{}", name)).unwrap();
    }
    assert_eq!(listing(&fs, "/work"), ["zeta", "alpha", "mid"]);
}

/// Test that names are cut to the configured length on create and lookup.
#[test]
fn test_name_truncation() {
    let mut fs = fresh();
    fs.mkdir("tmp").unwrap();
    fs.cd("tmp").unwrap();
    fs.touch("a-very-long-file-name.txt").unwrap();
    assert_eq!(listing(&fs, "."), ["a-very-long-fil"]);
    fs.write("a-very-long-fil", "x").unwrap();
    assert_eq!(fs.cat("a-very-long-file-name.txt").unwrap(), b"x");
}

// ============================================================================
// Resolver properties
// ============================================================================

/// Test that `..` from the root stays at the root.
#[test]
fn test_dotdot_at_root_is_idempotent() {
    let mut fs = fresh();
    let root = fs.root();
    assert_eq!(fs.resolve("..", false), Ok(root));
    assert_eq!(fs.resolve("/../..", false), Ok(root));
    fs.cd("..").unwrap();
    assert_eq!(fs.pwd(), "/");
}

/// Test that cd followed by pwd gives the normalized path.
#[test]
fn test_pwd_round_trips_normalized_paths() {
    let mut fs = fresh();
    fs.mkdir_p("/a/b/c").unwrap();

    let cases = [
        ("/a/b/c", "/a/b/c"),
        ("//a///b//c/", "/a/b/c"),
        ("/a/./b/./c", "/a/b/c"),
        ("/./a", "/a"),
        ("/", "/"),
        ("///", "/"),
    ];
    for (input, expected) in cases {
        fs.cd("/").unwrap();
        fs.cd(input).unwrap();
        assert_eq!(fs.pwd(), expected, "cd {}", input);
    }
}

/// Test that relative operations follow the cursor.
#[test]
fn test_relative_paths_follow_cursor() {
    let mut fs = fresh();
    fs.mkdir_p("/home/user").unwrap();
    fs.cd("/home/user").unwrap();
    fs.touch("notes").unwrap();
    fs.write("notes", "hi").unwrap();
    assert_eq!(fs.cat("/home/user/notes").unwrap(), b"hi");
    assert_eq!(fs.cat("../user/notes").unwrap(), b"hi");
}

/// Test that a file cannot be used as an intermediate component.
#[test]
fn test_file_as_directory_component() {
    let mut fs = fresh();
    fs.touch("f").unwrap();
    assert_eq!(fs.touch("f/x"), Err(FsError::NotADirectory));
    assert_eq!(fs.cd("f"), Err(FsError::NotADirectory));
    assert_eq!(fs.cat("f/x"), Err(FsError::NotADirectory));
}

// ============================================================================
// Capacity
// ============================================================================

/// Test that exhausting the arena fails cleanly and permanently.
#[test]
fn test_arena_exhaustion_leaves_tree_unchanged() {
    let mut fs = Filesystem::new(FsConfig::with_max_nodes(BOOTSTRAP_NODES + 2)).unwrap();
    fs.mkdir("a").unwrap();
    fs.touch("b").unwrap();
    let before = listing(&fs, "/");
    let used = fs.usage().used;

    assert_eq!(fs.mkdir("c"), Err(FsError::Exhausted));
    assert_eq!(fs.touch("d"), Err(FsError::Exhausted));
    assert_eq!(fs.mkdir_p("a/e"), Err(FsError::Exhausted));
    assert_eq!(listing(&fs, "/"), before);
    assert_eq!(fs.usage().used, used);

    // Removing does not give the slot back
    fs.rm("b").unwrap();
    assert_eq!(fs.touch("b"), Err(FsError::Exhausted));
}

/// Test that a full directory refuses new children and stays full.
#[test]
fn test_directory_full_is_permanent() {
    let mut fs = fresh();
    fs.mkdir("/box").unwrap();
    for i in 0..16 {
        fs.touch(&format!("/box/f{}", i)).unwrap();
    }
    let used = fs.usage().used;
    assert_eq!(fs.touch("/box/extra"), Err(FsError::DirectoryFull));
    assert_eq!(fs.mkdir("/box/extra"), Err(FsError::DirectoryFull));
    assert_eq!(fs.usage().used, used);

    // Removing a child makes room in the list, though its slot is spent
    fs.rm("/box/f0").unwrap();
    fs.touch("/box/extra").unwrap();
}

/// Test that the root counts the system directories against its limit.
#[test]
fn test_root_full_after_bootstrap() {
    let config = FsConfig {
        max_children: 4,
        ..FsConfig::default()
    };
    let mut fs = Filesystem::new(config).unwrap();
    assert_eq!(fs.mkdir("/x"), Err(FsError::DirectoryFull));
}

/// Test that a configuration too small for the system area is refused.
#[test]
fn test_config_too_small_for_bootstrap() {
    assert_eq!(
        Filesystem::new(FsConfig::with_max_nodes(BOOTSTRAP_NODES - 1)).err(),
        Some(FsError::Exhausted)
    );
    let config = FsConfig {
        max_children: 2,
        ..FsConfig::default()
    };
    assert_eq!(Filesystem::new(config).err(), Some(FsError::DirectoryFull));
}

/// Test that content is cut at capacity without splitting a character.
#[test]
fn test_write_truncates_at_char_boundary() {
    let config = FsConfig {
        max_content_len: 4,
        ..FsConfig::default()
    };
    let mut fs = Filesystem::new(config).unwrap();
    fs.touch("f").unwrap();
    // 'é' occupies bytes 3 and 4, so a cut at 4 backs off to 3
    assert_eq!(fs.write("f", "abcé"), Ok(3));
    assert_eq!(fs.cat("f").unwrap(), b"abc");
}

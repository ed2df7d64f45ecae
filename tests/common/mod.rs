// Shared helpers for integration tests.
//
// Provides a temporary source tree and target directory plus a fluent
// builder, so each test can describe the tree it needs without repeating
// filesystem boilerplate.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use dotstow::config::{IGNORE_FILE_NAME, StowConfig};

/// Content written to every scenario file.
pub const CONTENT: &str = "Hello, World!";

/// A source tree and a target directory, both deleted on drop.
pub struct StowFixture {
    /// Directory holding the files to stow.
    pub source: tempfile::TempDir,
    /// Directory standing in for the home directory.
    pub target: tempfile::TempDir,
}

impl StowFixture {
    /// Path to the source root.
    pub fn source_path(&self) -> &Path {
        self.source.path()
    }

    /// Path to the target root.
    pub fn target_path(&self) -> &Path {
        self.target.path()
    }

    /// Destination of `relative` under the target root.
    pub fn target_join(&self, relative: &str) -> PathBuf {
        self.target.path().join(relative)
    }

    /// Resolve a configuration for this fixture.
    pub fn config(&self, dry_run: bool) -> StowConfig {
        StowConfig::new(self.source.path(), self.target.path().to_path_buf(), dry_run)
            .expect("resolve config")
    }

    /// Number of entries directly under the target root.
    pub fn target_len(&self) -> usize {
        std::fs::read_dir(self.target.path())
            .expect("read target")
            .count()
    }
}

/// Fluent builder for [`StowFixture`].
pub struct FixtureBuilder {
    fixture: StowFixture,
}

impl FixtureBuilder {
    /// Begin with an empty source tree and an empty target.
    pub fn new() -> Self {
        Self {
            fixture: StowFixture {
                source: tempfile::tempdir().expect("create source dir"),
                target: tempfile::tempdir().expect("create target dir"),
            },
        }
    }

    /// The tree used throughout the stow scenarios: `file1.txt`,
    /// `dir1/file2.txt` and an ignore file excluding `.git`.
    pub fn scenario() -> Self {
        Self::new()
            .with_file("file1.txt", CONTENT)
            .with_file("dir1/file2.txt", CONTENT)
            .with_ignore_file("# Comment\n.git\n")
    }

    /// Write `content` to `relative` inside the source tree.
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.fixture.source.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create source parent");
        }
        std::fs::write(&path, content).expect("write source file");
        self
    }

    /// Create an empty directory inside the source tree.
    pub fn with_dir(self, relative: &str) -> Self {
        std::fs::create_dir_all(self.fixture.source.path().join(relative))
            .expect("create source dir");
        self
    }

    /// Write the ignore file at the source root.
    pub fn with_ignore_file(self, content: &str) -> Self {
        self.with_file(IGNORE_FILE_NAME, content)
    }

    /// Write `content` to `relative` inside the target directory.
    pub fn with_target_file(self, relative: &str, content: &str) -> Self {
        let path = self.fixture.target.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create target parent");
        }
        std::fs::write(&path, content).expect("write target file");
        self
    }

    /// Finish building and return the fixture.
    pub fn build(self) -> StowFixture {
        self.fixture
    }
}

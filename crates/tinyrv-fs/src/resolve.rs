//! Path resolution.
//!
//! One routine walks every path: start at the root for absolute paths and
//! at the cursor otherwise, then consume components left to right. Empty
//! components are skipped, `.` stays put and `..` climbs (stopping at the
//! root). A file is never a valid place to continue from.

use crate::core::{components, is_absolute, FsError, FsResult, NodeId, NodeKind, Permissions};
use crate::service::require_write;
use crate::tree::Tree;

/// Outcome of consuming one component.
enum Step {
    At(NodeId),
    Missing,
}

impl Tree {
    /// Node a path starts from.
    fn start_of(&self, path: &str) -> NodeId {
        if is_absolute(path) {
            self.root()
        } else {
            self.cwd()
        }
    }

    fn step(&self, at: NodeId, component: &str) -> FsResult<Step> {
        match component {
            "." => Ok(Step::At(at)),
            ".." => Ok(Step::At(self.parent(at).unwrap_or(at))),
            name => match self.find_child(at, self.truncate_name(name)) {
                Some(child) if self.node(child).is_file() => Err(FsError::NotADirectory),
                Some(child) => Ok(Step::At(child)),
                None => Ok(Step::Missing),
            },
        }
    }

    /// Resolve a path to a directory without modifying the tree.
    ///
    /// Every component, the last one included, must name a directory.
    pub fn lookup(&self, path: &str) -> FsResult<NodeId> {
        let mut at = self.start_of(path);
        for component in components(path) {
            match self.step(at, component)? {
                Step::At(next) => at = next,
                Step::Missing => return Err(FsError::NotFound),
            }
        }
        Ok(at)
    }

    /// Resolve a path, optionally creating missing directories on the way.
    ///
    /// Created directories get `rwx` and need Write on the directory they
    /// are added to. Running out of room, in the arena or in a directory,
    /// reports `Exhausted`. Directories created before a failure stay in
    /// place.
    pub fn resolve(&mut self, path: &str, create_missing: bool) -> FsResult<NodeId> {
        if !create_missing {
            return self.lookup(path);
        }

        let mut at = self.start_of(path);
        for component in components(path) {
            at = match self.step(at, component)? {
                Step::At(next) => next,
                Step::Missing => {
                    require_write(self.node(at))?;
                    self.create_child(
                        at,
                        component,
                        NodeKind::Directory,
                        Permissions::dir_default(),
                    )
                    .map_err(|e| match e {
                        FsError::DirectoryFull => FsError::Exhausted,
                        other => other,
                    })?
                }
            };
        }
        Ok(at)
    }
}

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// A file to be created with the given literal content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileNode {
    pub content: String,
}

/// A directory and its named children.
///
/// Children are kept in declaration order so console output and previews are
/// stable between runs. Names are unique: inserting an existing name replaces
/// the earlier child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    pub children: IndexMap<String, TreeNode>,
}

/// A single node of a structure description, either a file or a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File(FileNode),
    Directory(DirectoryNode),
}

/// Whether a flattened [`TreeEntry`] is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A flattened view of one node, with its path relative to the structure root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl TreeNode {
    pub fn file(content: impl Into<String>) -> Self {
        Self::File(FileNode {
            content: content.into(),
        })
    }

    pub fn empty_file() -> Self {
        Self::file("")
    }

    pub fn dir<N, I>(children: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, TreeNode)>,
    {
        Self::Directory(DirectoryNode::new(children))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

impl DirectoryNode {
    pub fn new<N, I>(children: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, TreeNode)>,
    {
        Self {
            children: children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        }
    }

    pub fn with_child(mut self, name: impl Into<String>, node: TreeNode) -> Self {
        self.children.insert(name.into(), node);
        self
    }

    /// Flattens the tree depth-first, pre-order: every directory is listed
    /// before anything it contains.
    pub fn entries(&self) -> Vec<TreeEntry> {
        let mut out = Vec::new();
        collect_entries(self, Path::new(""), &mut out);
        out
    }

    pub fn file_count(&self) -> usize {
        self.count(EntryKind::File)
    }

    pub fn dir_count(&self) -> usize {
        self.count(EntryKind::Directory)
    }

    fn count(&self, kind: EntryKind) -> usize {
        self.children
            .values()
            .map(|child| match child {
                TreeNode::File(_) => usize::from(kind == EntryKind::File),
                TreeNode::Directory(sub) => {
                    usize::from(kind == EntryKind::Directory) + sub.count(kind)
                }
            })
            .sum()
    }
}

fn collect_entries(dir: &DirectoryNode, prefix: &Path, out: &mut Vec<TreeEntry>) {
    for (name, child) in &dir.children {
        let path = prefix.join(name);
        match child {
            TreeNode::File(_) => out.push(TreeEntry {
                path,
                kind: EntryKind::File,
            }),
            TreeNode::Directory(sub) => {
                out.push(TreeEntry {
                    path: path.clone(),
                    kind: EntryKind::Directory,
                });
                collect_entries(sub, &path, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DirectoryNode {
        DirectoryNode::new([(
            "lib",
            TreeNode::dir([
                ("main.dart", TreeNode::empty_file()),
                ("models", TreeNode::dir([("user.dart", TreeNode::file("x"))])),
            ]),
        )])
    }

    #[test]
    fn entries_list_parents_before_children() {
        let paths: Vec<PathBuf> = sample().entries().into_iter().map(|e| e.path).collect();

        assert_eq!(
            paths,
            vec![
                PathBuf::from("lib"),
                PathBuf::from("lib/main.dart"),
                PathBuf::from("lib/models"),
                PathBuf::from("lib/models/user.dart"),
            ]
        );
    }

    #[test]
    fn counts_files_and_directories() {
        let tree = sample();

        assert_eq!(tree.file_count(), 2);
        assert_eq!(tree.dir_count(), 2);
    }

    #[test]
    fn counts_agree_with_flattened_entries() {
        let tree = sample().with_child(
            "assets",
            TreeNode::dir([
                ("empty", TreeNode::dir(Vec::<(String, TreeNode)>::new())),
                ("logo.png", TreeNode::empty_file()),
            ]),
        );
        let entries = tree.entries();

        let files = entries.iter().filter(|e| e.kind == EntryKind::File).count();
        let dirs = entries.len() - files;
        assert_eq!(tree.file_count(), files);
        assert_eq!(tree.dir_count(), dirs);
        assert_eq!((files, dirs), (3, 4));
    }

    #[test]
    fn duplicate_names_replace_earlier_child() {
        let dir = DirectoryNode::default()
            .with_child("a.dart", TreeNode::empty_file())
            .with_child("a.dart", TreeNode::file("second"));

        assert_eq!(dir.children.len(), 1);
        assert_eq!(dir.children["a.dart"], TreeNode::file("second"));
    }
}

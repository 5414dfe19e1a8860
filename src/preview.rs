use crate::tree::{DirectoryNode, TreeNode};
use colored::Colorize;
use std::path::Path;

/// One rendered row of the tree: the indentation and connector, then the name.
struct Row {
    prefix: String,
    name: String,
    is_file: bool,
}

fn root_name(destination: &Path) -> String {
    destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string())
}

fn collect_rows(dir: &DirectoryNode, prefix: &str, rows: &mut Vec<Row>) {
    let len = dir.children.len();

    for (i, (name, child)) in dir.children.iter().enumerate() {
        let is_last = i == len - 1;
        let connector = if is_last { "└── " } else { "├── " };

        rows.push(Row {
            prefix: format!("{prefix}{connector}"),
            name: name.clone(),
            is_file: child.is_file(),
        });

        if let TreeNode::Directory(sub) = child {
            let child_prefix = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            collect_rows(sub, &child_prefix, rows);
        }
    }
}

fn rows(structure: &DirectoryNode, destination: &Path) -> Vec<Row> {
    let mut rows = vec![Row {
        prefix: "└── ".to_string(),
        name: root_name(destination),
        is_file: false,
    }];

    collect_rows(structure, "    ", &mut rows);

    rows
}

/// Renders `structure` as a plain ASCII tree rooted at `destination`.
pub fn render_tree(structure: &DirectoryNode, destination: &Path) -> String {
    rows(structure, destination)
        .into_iter()
        .map(|row| format!("{}{}\n", row.prefix, row.name))
        .collect()
}

/// Prints a colored preview of what materializing `structure` would create.
pub fn preview_as_tree(structure: &DirectoryNode, destination: &Path) {
    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    println!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    for row in rows(structure, destination) {
        let name = if row.is_file {
            row.name.green()
        } else {
            row.name.blue()
        };
        println!("{}{}", row.prefix.yellow(), name);
    }

    println!(
        "\n{} {} directories, {} files\n",
        "└─".bold().bright_blue(),
        structure.dir_count(),
        structure.file_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_tree() {
        let structure = DirectoryNode::new([
            (
                "lib",
                TreeNode::dir([
                    ("main.dart", TreeNode::empty_file()),
                    ("models", TreeNode::dir([("user.dart", TreeNode::empty_file())])),
                ]),
            ),
            ("README.md", TreeNode::empty_file()),
        ]);

        let rendered = render_tree(&structure, Path::new("/tmp/app"));

        let expected = "\
└── app
    ├── lib
    │   ├── main.dart
    │   └── models
    │       └── user.dart
    └── README.md
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn falls_back_to_full_path_without_file_name() {
        let rendered = render_tree(&DirectoryNode::default(), Path::new("/"));

        assert_eq!(rendered, "└── /\n");
    }
}

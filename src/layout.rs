use crate::tree::{DirectoryNode, TreeNode};

/// Builds a directory whose children are all empty files.
fn files(names: &[&str]) -> TreeNode {
    let dir = names.iter().fold(DirectoryNode::default(), |dir, name| {
        dir.with_child(*name, TreeNode::empty_file())
    });

    TreeNode::Directory(dir)
}

/// The BusEase Flutter app skeleton, rooted at `lib/`.
pub fn busease() -> DirectoryNode {
    DirectoryNode::new([(
        "lib",
        TreeNode::dir([
            ("main.dart", TreeNode::empty_file()),
            ("firebase_options.dart", TreeNode::empty_file()),
            ("models", files(&["user_model.dart"])),
            (
                "screens",
                TreeNode::dir([
                    ("splash_screen.dart", TreeNode::empty_file()),
                    ("welcome_screen.dart", TreeNode::empty_file()),
                    (
                        "login",
                        files(&[
                            "passenger_login.dart",
                            "driver_login.dart",
                            "admin_login.dart",
                        ]),
                    ),
                    ("signup", files(&["passenger_signup.dart"])),
                    (
                        "dashboard",
                        files(&[
                            "passenger_dashboard.dart",
                            "driver_dashboard.dart",
                            "admin_dashboard.dart",
                        ]),
                    ),
                    (
                        "bus_management",
                        files(&["add_bus_screen.dart", "bus_list_screen.dart"]),
                    ),
                    (
                        "booking",
                        files(&[
                            "book_bus_screen.dart",
                            "booking_history_screen.dart",
                            "booking_list_screen.dart",
                        ]),
                    ),
                    ("map", files(&["map_screen.dart"])),
                ]),
            ),
            (
                "services",
                files(&["auth_service.dart", "firestore_service.dart"]),
            ),
            ("widgets", files(&["custom_widgets.dart"])),
        ]),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EntryKind;
    use std::path::PathBuf;

    #[test]
    fn layout_has_expected_shape() {
        let layout = busease();

        // lib, models, screens, 6 screen groups, services, widgets
        assert_eq!(layout.dir_count(), 11);
        assert_eq!(layout.file_count(), 21);
    }

    #[test]
    fn every_file_is_empty() {
        fn check(dir: &DirectoryNode) {
            for child in dir.children.values() {
                match child {
                    TreeNode::File(file) => assert!(file.content.is_empty()),
                    TreeNode::Directory(sub) => check(sub),
                }
            }
        }

        check(&busease());
    }

    #[test]
    fn login_screens_are_listed() {
        let entries = busease().entries();

        for name in ["passenger_login.dart", "driver_login.dart", "admin_login.dart"] {
            let path = PathBuf::from("lib/screens/login").join(name);
            assert!(
                entries
                    .iter()
                    .any(|e| e.path == path && e.kind == EntryKind::File),
                "missing {}",
                path.display()
            );
        }
    }
}

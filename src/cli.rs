use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "findtree")]
#[command(about = "List contents of directories in a tree-like format", long_about = None)]
pub struct Cli {
    /// List directories only
    #[arg(short = 'd')]
    pub dirs_only: bool,

    /// Search for a named entry instead of printing the tree
    #[arg(short = 'f')]
    pub find: bool,

    /// Run the built-in self check and exit
    #[arg(short = 't')]
    pub self_test: bool,

    /// Display root, or with -f: [ROOT] NAME
    #[arg(value_name = "PATH", num_args = 0..=2)]
    pub args: Vec<String>,
}

impl Cli {
    /// Resolve positionals to a display root and, in search mode, a target
    /// name. One trailing argument is the root unless `-f` is set, in which
    /// case it is the name to search for under the default root.
    pub fn targets(&self) -> (PathBuf, Option<String>) {
        match (self.find, self.args.as_slice()) {
            (false, []) => (PathBuf::from("."), None),
            (false, [root, ..]) => (PathBuf::from(root), None),
            // a "." target can never match, dot names are not materialized
            (true, []) => (PathBuf::from("."), Some(".".to_owned())),
            (true, [name]) => (PathBuf::from("."), Some(name.clone())),
            (true, [root, name, ..]) => (PathBuf::from(root), Some(name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("findtree").chain(args.iter().copied()))
    }

    #[test]
    fn trailing_argument_is_the_display_root() {
        let (root, search) = parse(&["some/dir"]).targets();
        assert_eq!(root, PathBuf::from("some/dir"));
        assert_eq!(search, None);
    }

    #[test]
    fn defaults_to_current_directory() {
        let (root, search) = parse(&[]).targets();
        assert_eq!(root, PathBuf::from("."));
        assert_eq!(search, None);
    }

    #[test]
    fn find_with_one_argument_searches_under_default_root() {
        let cli = parse(&["-f", "needle"]);
        let (root, search) = cli.targets();
        assert_eq!(root, PathBuf::from("."));
        assert_eq!(search.as_deref(), Some("needle"));
    }

    #[test]
    fn find_with_two_arguments_is_root_then_name() {
        let cli = parse(&["-f", "some/dir", "needle"]);
        let (root, search) = cli.targets();
        assert_eq!(root, PathBuf::from("some/dir"));
        assert_eq!(search.as_deref(), Some("needle"));
    }

    #[test]
    fn flags_combine() {
        let cli = parse(&["-d", "-f", "needle"]);
        assert!(cli.dirs_only);
        assert!(cli.find);
        assert!(!cli.self_test);
    }
}

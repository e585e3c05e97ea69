use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use findtree::cli::Cli;
use findtree::fs::RealFileSystem;
use findtree::models::EntryNode;
use findtree::{build, locate, render, selftest};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.self_test {
        match selftest::run().await {
            Ok(report) => print!("{report}"),
            Err(err) => println!("self test failed: {err}"),
        }
        return ExitCode::SUCCESS;
    }

    let (root, search) = cli.targets();

    let fs = RealFileSystem;
    let tree = match build(&fs, &root, cli.dirs_only).await {
        Ok(dir) => EntryNode::Directory(dir),
        Err(err) => {
            // recoverable: report on stdout, exit code stays 0
            println!("{err}");
            return ExitCode::SUCCESS;
        }
    };

    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let result = match search.as_deref() {
        Some(name) => render(&mut stdout, locate(&tree, name)),
        None => render(&mut stdout, &tree),
    };

    if let Err(err) = result {
        eprintln!("findtree: {err}");
    }

    ExitCode::SUCCESS
}

use std::io;

use termcolor::{Color, ColorSpec, WriteColor};

use crate::models::EntryNode;

/// Render `node` as the root of a tree diagram.
pub fn render<W: WriteColor>(writer: &mut W, node: &EntryNode) -> io::Result<()> {
    render_at(writer, node, 0)
}

/// Render `node` at a given depth.
///
/// Depth 0 prints the bare name (root header); deeper levels indent by
/// three spaces per level and prefix a connector glyph. A directory
/// rendered at depth 0 is followed by a one-line count summary. The
/// not-found sentinel renders a fixed diagnostic line instead.
pub fn render_at<W: WriteColor>(writer: &mut W, node: &EntryNode, depth: usize) -> io::Result<()> {
    match node {
        EntryNode::NotFound => writeln!(writer, "file doesn't found"),
        EntryNode::File(file) => {
            connector(writer, depth)?;
            // cosmetic highlight, carries no meaning
            if file.name.contains(".out") {
                colored_line(writer, &file.name, Color::Green)
            } else {
                writeln!(writer, "{}", file.name)
            }
        }
        EntryNode::Directory(dir) => {
            connector(writer, depth)?;
            colored_line(writer, &dir.name, Color::Blue)?;

            for child in &dir.children {
                render_at(writer, child, depth + 1)?;
            }

            if depth == 0 {
                write!(writer, "{} directories", dir.directory_count)?;
                if !dir.only_directories {
                    write!(writer, ", {} files", dir.file_count)?;
                }
                writeln!(writer)?;
            }

            Ok(())
        }
    }
}

fn connector<W: WriteColor>(writer: &mut W, depth: usize) -> io::Result<()> {
    if depth > 0 {
        for _ in 0..depth * 3 {
            write!(writer, " ")?;
        }
        write!(writer, "\u{2500} ")?;
    }
    Ok(())
}

fn colored_line<W: WriteColor>(writer: &mut W, name: &str, color: Color) -> io::Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(writer, "{name}")?;
    writer.reset()?;
    writeln!(writer)
}

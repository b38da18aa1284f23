// WHY: Interactive input selection when no document path is given on the command line

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Word that ends the prompt loop without choosing a file
pub const EXIT_COMMAND: &str = "exit";

/// Ask for a file name until one can be opened
///
/// Returns `Ok(None)` when the user types `exit` or input runs out.
pub fn prompt_for_path<R, W, F>(mut input: R, output: &mut W, can_open: F) -> io::Result<Option<PathBuf>>
where
    R: BufRead,
    W: Write + ?Sized,
    F: Fn(&Path) -> bool,
{
    writeln!(output, "Enter filename, or enter {EXIT_COMMAND} to quit.")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter filename: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let name = line.trim_end_matches(['\r', '\n']);
        if name == EXIT_COMMAND {
            return Ok(None);
        }

        let path = PathBuf::from(name);
        if !name.is_empty() && can_open(&path) {
            return Ok(Some(path));
        }

        debug!("Rejected input path: {}", name);
        writeln!(output, "Invalid file.")?;
    }
}

/// Default check for `prompt_for_path`: the path opens as a regular file
pub fn file_is_readable(path: &Path) -> bool {
    path.is_file() && std::fs::File::open(path).is_ok()
}

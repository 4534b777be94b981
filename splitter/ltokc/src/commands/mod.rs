//! CLI command implementations.
//!
//! Output format is one line per token, `args[<index>] = <token>`, index
//! starting at 0. For the demo line this prints:
//!
//! ```text
//! args[0] = ls
//! args[1] = -al
//! ```

use ltok::{LineBuffer, SeparatorSet, SplitError, Tokenizer};

/// The fixed demo line from the classic tokenizer walkthrough.
pub const DEMO_LINE: &str = "ls    -al";

/// Tokenize `line` and render one `args[<index>] = <token>` entry per
/// token.
///
/// # Errors
///
/// Propagates [`SplitError::InvalidArgument`] from tokenizer
/// initialization (empty separator set).
pub fn render_args(line: &str, seps: SeparatorSet) -> Result<Vec<String>, SplitError> {
    let buf = LineBuffer::new(line);
    let tokens = Tokenizer::new(&buf, seps)?;
    let rendered: Vec<String> = tokens
        .enumerate()
        .map(|(index, token)| format!("args[{index}] = {token}"))
        .collect();
    tracing::debug!(tokens = rendered.len(), "split line");
    Ok(rendered)
}

/// Tokenize `line` and print the rendered entries to stdout.
///
/// Returns the process exit code: 0 on success (including zero tokens),
/// 1 when initialization fails.
pub fn split_line(line: &str, seps: SeparatorSet) -> i32 {
    match render_args(line, seps) {
        Ok(entries) => {
            for entry in &entries {
                println!("{entry}");
            }
            0
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

/// Split the fixed [`DEMO_LINE`] on whitespace.
pub fn run_demo() -> i32 {
    split_line(DEMO_LINE, SeparatorSet::whitespace())
}

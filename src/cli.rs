use clap::Parser;
use std::path::PathBuf;

/// Terminal viewer for exploring the structure of a JSON document.
///
/// Reads from a file when one is given, from the system clipboard with
/// `--clipboard`, and from stdin otherwise.
#[derive(Debug, Parser)]
#[command(name = "jsontree", version)]
pub struct Args {
    /// JSON file to open
    pub file: Option<PathBuf>,

    /// Read the document from the system clipboard
    #[arg(short = 'c', long = "clipboard", conflicts_with = "file")]
    pub clipboard: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn a_file_argument_is_accepted() {
        let args = Args::parse_from(["jsontree", "data.json"]);
        assert_eq!(args.file.as_deref().and_then(|p| p.to_str()), Some("data.json"));
        assert!(!args.clipboard);
    }

    #[test]
    fn no_arguments_means_stdin() {
        let args = Args::parse_from(["jsontree"]);
        assert!(args.file.is_none());
        assert!(!args.clipboard);
    }

    #[test]
    fn clipboard_flag_conflicts_with_a_file() {
        assert!(Args::try_parse_from(["jsontree", "-c"]).is_ok());
        assert!(Args::try_parse_from(["jsontree", "data.json", "--clipboard"]).is_err());
    }
}

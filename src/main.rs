use clap::Parser;
use jsontree::app::Runtime;
use jsontree::cli::Args;
use jsontree::clipboard::Clipboard;
use jsontree::terminal::Terminal;
use jsontree::tree::node::Node;
use jsontree::tree::parse::{self, ParseError};
use std::io;
use std::process;

const EXIT_JSON: i32 = 1;
const EXIT_UI: i32 = 2;
const EXIT_CLIPBOARD: i32 = 3;
const EXIT_FILE: i32 = 4;

fn main() {
    let args = Args::parse();

    // One clipboard handle serves both `--clipboard` input and the copy
    // keys; a failed probe simply leaves the feature off.
    let mut clipboard = Clipboard::new().ok();

    let tree = match load_tree(&args, clipboard.as_mut()) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{}", err.message);
            process::exit(err.code);
        }
    };

    let terminal = match Terminal::new() {
        Ok(terminal) => terminal,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(EXIT_UI);
        }
    };

    let mut runtime = Runtime::new(tree, terminal, clipboard);
    if let Err(err) = runtime.run() {
        eprintln!("Error: {err}");
        process::exit(EXIT_UI);
    }
}

struct LoadError {
    code: i32,
    message: String,
}

fn load_tree(args: &Args, clipboard: Option<&mut Clipboard>) -> Result<Node, LoadError> {
    if let Some(path) = &args.file {
        let bytes = std::fs::read(path).map_err(|err| LoadError {
            code: EXIT_FILE,
            message: format!("{}: {err}", path.display()),
        })?;
        return parse::from_bytes(&bytes).map_err(json_error);
    }

    if args.clipboard {
        let Some(clipboard) = clipboard else {
            return Err(LoadError {
                code: EXIT_CLIPBOARD,
                message: "Clipboard is unsupported on this system".to_string(),
            });
        };
        let text = clipboard.read().map_err(|err| LoadError {
            code: EXIT_CLIPBOARD,
            message: format!("failed to read clipboard: {err}"),
        })?;
        return parse::from_str(&text).map_err(json_error);
    }

    parse::from_reader(io::stdin().lock()).map_err(json_error)
}

fn json_error(err: ParseError) -> LoadError {
    LoadError {
        code: EXIT_JSON,
        message: err.to_string(),
    }
}

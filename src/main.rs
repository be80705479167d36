use std::env;
use std::fs;
use std::path::Path;
use std::process;

use musedit::Editor;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: musedit <data-file.json> [--save]");
        process::exit(2);
    };
    let extract = matches!(args.next().as_deref(), Some("--save"));

    let content = fs::read_to_string(&path)?;
    let file_name = Path::new(&path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path.as_str());

    let mut editor = Editor::new();
    editor.load(file_name, &content)?;

    if extract {
        println!("{}", editor.save()?);
    } else {
        println!("{}", editor.render());
    }
    Ok(())
}

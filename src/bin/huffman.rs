//! Huffman coding demo.
//!
//! ## Usage
//!
//! ```bash
//! # Code table for a string
//! huffman codes "The bird is the word"
//!
//! # Encoded bits and size report, with the tree
//! huffman encode --tree "The bird is the word"
//!
//! # Encode, decode and verify a file
//! huffman roundtrip --input notes.txt --log-level debug
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use huffcode::{decode, encode, generate_codes, HuffmanTree};

#[derive(Parser, Debug)]
#[command(name = "huffman")]
#[command(version)]
#[command(about = "Huffman prefix coding over characters", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the code for each distinct character
    Codes(InputArgs),
    /// Print the encoded bits and the size report
    Encode(InputArgs),
    /// Encode, decode, and check the result matches the input
    Roundtrip(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Text to code
    #[arg(conflicts_with = "input", required_unless_present = "input")]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Also print the tree structure
    #[arg(long)]
    tree: bool,
}

impl InputArgs {
    fn symbols(&self) -> Result<Vec<char>, Box<dyn std::error::Error>> {
        let text = match (&self.text, &self.input) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => {
                debug!(path = %path.display(), "reading input");
                fs::read_to_string(path)?
            }
            (None, None) => String::new(),
        };
        Ok(text.chars().collect())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Codes(args) => {
            let data = args.symbols()?;
            let (_, tree) = encode(&data)?;
            let Some(tree) = tree else {
                println!("(empty input: no codes)");
                return Ok(());
            };
            print_tree(&tree, args.tree);
            for (symbol, code) in generate_codes(&tree).iter() {
                println!("{symbol:?}\t{code}");
            }
        }
        Command::Encode(args) => {
            let data = args.symbols()?;
            let (bits, tree) = encode(&data)?;
            if let Some(tree) = &tree {
                print_tree(tree, args.tree);
            }
            report_sizes(data.len(), bits.len());
            println!("{bits}");
        }
        Command::Roundtrip(args) => {
            let data = args.symbols()?;
            let (bits, tree) = encode(&data)?;
            if let Some(tree) = &tree {
                print_tree(tree, args.tree);
            }
            report_sizes(data.len(), bits.len());

            let decoded = decode(&bits, tree.as_ref())?;
            if decoded != data {
                return Err("decoded text differs from input".into());
            }
            info!(symbols = decoded.len(), "roundtrip verified");
            println!("ok: {} symbols restored", decoded.len());
        }
    }

    Ok(())
}

fn print_tree(tree: &HuffmanTree<char>, show: bool) {
    if show {
        print!("{tree}");
    }
}

/// Original size counts 8 bits per character.
fn report_sizes(symbols: usize, encoded_bits: usize) {
    let original_bits = symbols * 8;
    let ratio = if original_bits == 0 {
        0.0
    } else {
        encoded_bits as f64 / original_bits as f64
    };
    println!("original: {original_bits} bits ({symbols} symbols)");
    println!("encoded:  {encoded_bits} bits ({:.1}%)", ratio * 100.0);
}

#![deny(missing_docs)]

//! # apitree CLI
//!
//! Command line inspector for OpenAPI interface trees: loads a document
//! from disk, runs the parse, and prints the tag-grouped tree as JSON.

use apitree_core::{AppResult, OpenApiDocument, ParseOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI interface tree inspector")]
struct Cli {
    /// Path to the OpenAPI document (YAML or JSON).
    input: PathBuf,

    /// Base path stamped onto every interface node.
    #[clap(long, default_value = "", env = "APITREE_BASE_PATH")]
    base_path: String,

    /// Group label for operations without tags.
    #[clap(long, default_value = "ungrouped")]
    default_tag: String,

    /// Maximum schema recursion depth before a subtree truncates to `any`.
    #[clap(long, default_value_t = 64)]
    max_depth: usize,

    /// Pretty-print the JSON output.
    #[clap(long)]
    pretty: bool,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.input)?;
    let document: OpenApiDocument = text.parse()?;
    let options = ParseOptions {
        base_path: cli.base_path,
        default_tag: cli.default_tag,
        max_depth: cli.max_depth,
    };

    let tree = document.parse(&options);
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&tree)?
    } else {
        serde_json::to_string(&tree)?
    };
    println!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_load_and_parse_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
openapi: 3.0.0
info: {{title: Petstore, version: "1.0"}}
paths:
  /pets:
    get:
      tags: [Pets]
      summary: List pets
      responses: {{ '200': {{description: OK}} }}
"#
        )
        .unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let document: OpenApiDocument = text.parse().unwrap();
        let tree = document.parse(&ParseOptions::default());
        assert_eq!(tree["Pets"][0].sub_title, "/pets");
    }
}

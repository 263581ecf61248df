//! The Gale transpiler CLI.
//!
//! Provides the `galec` command with the following subcommand:
//!
//! - `galec translate <ast.json>` - Emit Kotlin from a lowered AST file
//!
//! Options:
//! - `--output` - Output path for the Kotlin source (default: the input
//!   path with a `.kt` extension)
//! - `--source` - Original Swift source, used only to render diagnostics
//!   with labelled spans
//! - `--registry` - JSON seed for the translation registries
//!
//! The frontend that produces the lowered AST runs elsewhere; this binary
//! covers the back half of the pipeline: AST in, Kotlin out. Structural
//! problems in the AST do not stop emission -- the Kotlin file is written
//! with error sentinels in place and the exit code reports the failure.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use gale_ast::TranspilationUnit;
use gale_codegen::{FunctionTranslation, TranslationContext};
use gale_common::Diagnostics;

#[derive(Parser)]
#[command(name = "galec", version, about = "The Gale Swift-to-Kotlin transpiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit Kotlin source from a lowered AST file
    Translate {
        /// Path to the lowered AST (JSON)
        ast: PathBuf,

        /// Output path for the Kotlin source
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Original Swift source, for labelled diagnostics
        #[arg(long)]
        source: Option<PathBuf>,

        /// JSON seed for the translation registries
        #[arg(long)]
        registry: Option<PathBuf>,
    },
}

/// Registry seed file contents. Every section is optional.
#[derive(Debug, Default, Deserialize)]
struct RegistrySeed {
    #[serde(default)]
    sealed_classes: Vec<String>,
    #[serde(default)]
    enum_classes: Vec<String>,
    #[serde(default)]
    protocols: Vec<String>,
    #[serde(default)]
    function_translations: Vec<FunctionTranslation>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Translate {
            ast,
            output,
            source,
            registry,
        } => {
            if let Err(error) = run_translate(
                &ast,
                output.as_deref(),
                source.as_deref(),
                registry.as_deref(),
            ) {
                eprintln!("error: {}", error);
                process::exit(1);
            }
        }
    }
}

/// Execute the back half of the pipeline: read AST -> seed registries ->
/// emit Kotlin -> write the output file -> report diagnostics.
fn run_translate(
    ast_path: &Path,
    output: Option<&Path>,
    source: Option<&Path>,
    registry: Option<&Path>,
) -> Result<(), String> {
    let ast_text = std::fs::read_to_string(ast_path)
        .map_err(|error| format!("Failed to read '{}': {}", ast_path.display(), error))?;
    let unit: TranspilationUnit = serde_json::from_str(&ast_text)
        .map_err(|error| format!("Failed to parse '{}': {}", ast_path.display(), error))?;

    let ctx = match registry {
        Some(path) => {
            let registry_text = std::fs::read_to_string(path)
                .map_err(|error| format!("Failed to read '{}': {}", path.display(), error))?;
            let seed: RegistrySeed = serde_json::from_str(&registry_text)
                .map_err(|error| format!("Failed to parse '{}': {}", path.display(), error))?;
            seed_context(seed)
        }
        None => TranslationContext::new(),
    };

    let mut diagnostics = Diagnostics::new();
    let kotlin = gale_codegen::translate(&unit, &ctx, &mut diagnostics);

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => ast_path.with_extension("kt"),
    };
    std::fs::write(&output_path, &kotlin)
        .map_err(|error| format!("Failed to write '{}': {}", output_path.display(), error))?;
    eprintln!("  Kotlin: {}", output_path.display());

    if diagnostics.has_errors() {
        let source_text = match source {
            Some(path) => Some(std::fs::read_to_string(path).map_err(|error| {
                format!("Failed to read '{}': {}", path.display(), error)
            })?),
            None => None,
        };
        eprint!("{}", diagnostics.render(source_text.as_deref()));
        return Err(format!(
            "Translation produced {} structural error(s); see the sentinels in '{}'.",
            diagnostics.errors().len(),
            output_path.display()
        ));
    }

    Ok(())
}

/// Move a parsed registry seed into a translation context.
fn seed_context(seed: RegistrySeed) -> TranslationContext {
    let mut ctx = TranslationContext::new();
    for name in seed.sealed_classes {
        ctx.add_sealed_class(name);
    }
    for name in seed.enum_classes {
        ctx.add_enum_class(name);
    }
    for name in seed.protocols {
        ctx.add_protocol(name);
    }
    for translation in seed.function_translations {
        ctx.add_function_translation(translation);
    }
    ctx
}

// Scopec - A minimal compiler front-end with a block-scoped symbol table
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Scopec Compiler CLI
//!
//! Analyzes a source file and prints its symbol table.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use scopec::error::{format_error, format_warning};
use scopec::output::{render, render_tokens, OutputFormat, ReportOptions};
use tracing::info;

/// Scopec - A minimal compiler front-end with a block-scoped symbol table
#[derive(Parser, Debug)]
#[command(name = "scopec")]
#[command(author = "Scopec Team")]
#[command(version)]
#[command(about = "Builds and prints the symbol table of a source file")]
#[command(long_about = r#"
Scopec reads a source file in a small C-like language, checks its
declarations and assignments against a block-scoped symbol table and
prints the resulting table.

Example usage:
  scopec program.txt
  scopec program.txt --format json
  scopec program.txt --tokens --hide-unused

Exit status:
  0  no errors
  1  compilation errors
  2  invalid command line
  3  the source file could not be read
"#)]
struct Cli {
    /// Source file to analyze
    source_file: PathBuf,

    /// Report format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Print the token stream before the report
    #[arg(short, long)]
    tokens: bool,

    /// Leave unused symbols out of the symbol listing
    #[arg(long)]
    hide_unused: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    scopec::logging::init(cli.verbose);

    let source = match std::fs::read_to_string(&cli.source_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", cli.source_file.display(), e);
            return ExitCode::from(3);
        }
    };

    // Get the filename for error messages
    let filename = cli
        .source_file
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>");

    info!(file = %cli.source_file.display(), "compiling");

    let compilation = match scopec::compile(&source) {
        Ok(compilation) => compilation,
        Err(failure) => {
            for error in failure.all() {
                eprint!("{}", format_error(error, &source, Some(filename)));
            }
            return ExitCode::from(1);
        }
    };

    for error in &compilation.analysis.errors {
        eprint!("{}", format_error(error, &source, Some(filename)));
    }
    if cli.verbose {
        for warning in &compilation.warnings {
            eprint!("{}", format_warning(warning, &source, Some(filename)));
        }
    }

    if cli.tokens && cli.format == OutputFormat::Text {
        print!("{}", render_tokens(&compilation.tokens));
        println!();
    }

    let options = ReportOptions {
        hide_unused: cli.hide_unused,
    };
    match render(&compilation, cli.format, options) {
        Ok(report) => {
            print!("{}", report);
            if cli.format == OutputFormat::Json {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: Cannot render report: {}", e);
            return ExitCode::from(1);
        }
    }

    if compilation.has_errors() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

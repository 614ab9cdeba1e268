//! Minimal CLI: load fuzzy numbers → combine → print
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::error::Error;
use crate::extension::BinaryOp;
use crate::input::{self, LoadOptions, Operand};
use crate::number::FuzzyNumber;
use crate::render::{self, OutputFormat};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// discrete fuzzy-number arithmetic via the extension principle
#[derive(Parser, Debug)]
#[command(name = "fuzzy-arith", version)]
pub struct CommandLineInterface {
    /// log at debug level when RUST_LOG is unset
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// combine two fuzzy numbers with one operator
    Apply(ApplyCmd),
    /// left-fold an operator over every input, in the order given
    Fold(FoldCmd),
    /// load and print inputs without combining them
    Show(ShowCmd),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to select the fuzzy number in each document (e.g. /data/membership)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document; every output becomes an operand
    #[arg(long)]
    jq_expr: Option<String>,

    /// reject grades outside [0, 1] and non-finite values while loading
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    /// output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct ApplyCmd {
    /// operator to extend
    #[arg(long, value_enum)]
    op: BinaryOp,

    /// left operand file
    #[arg(long)]
    lhs: String,

    /// right operand file
    #[arg(long)]
    rhs: String,

    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    output_settings: OutputSettings,
}

#[derive(clap::Parser, Debug)]
struct FoldCmd {
    /// operator to extend
    #[arg(long, value_enum)]
    op: BinaryOp,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    output_settings: OutputSettings,
}

#[derive(clap::Parser, Debug)]
struct ShowCmd {
    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    output_settings: OutputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            json_pointer: self.json_pointer.clone(),
            jq_expr: self.jq_expr.clone(),
            strict: self.strict,
        }
    }

    fn load_one(&self, pattern: &str) -> Result<FuzzyNumber> {
        let mut operands = input::load_all([pattern], &self.load_options())?;
        match operands.len() {
            1 => Ok(operands.remove(0).number),
            0 => Err(Error::NoOperands.into()),
            n => anyhow::bail!("{pattern} yields {n} fuzzy numbers, expected exactly one"),
        }
    }
}

impl OutputSettings {
    fn emit(&self, number: &FuzzyNumber) -> Result<()> {
        let text = render::render(number, self.format).context("encoding result")?;
        self.write(&text)
    }

    fn write(&self, text: &str) -> Result<()> {
        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
                std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))?;
            }
            None => {
                if text.ends_with('\n') {
                    print!("{text}");
                } else {
                    println!("{text}");
                }
            }
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Apply(target) => {
                let lhs = target.input_settings.load_one(&target.lhs)
                    .with_context(|| format!("loading left operand {}", target.lhs))?;
                let rhs = target.input_settings.load_one(&target.rhs)
                    .with_context(|| format!("loading right operand {}", target.rhs))?;
                let result = lhs.apply(target.op, &rhs);
                info!(op = %target.op, size = result.len(), "applied");
                target.output_settings.emit(&result)
            }
            Command::Fold(target) => {
                let operands = input::load_all(&target.input, &target.input_settings.load_options())?;
                let result = crate::number::fold(target.op, operands.iter().map(|o| &o.number))
                    .ok_or(Error::NoOperands)?;
                info!(op = %target.op, operands = operands.len(), size = result.len(), "folded");
                target.output_settings.emit(&result)
            }
            Command::Show(target) => {
                let operands = input::load_all(&target.input, &target.input_settings.load_options())?;
                let mut text = String::new();
                for Operand { source, number } in &operands {
                    if target.output_settings.format == OutputFormat::Table {
                        text.push_str(&format!("# {}\n", source.display()));
                    }
                    let rendered = render::render(number, target.output_settings.format)
                        .with_context(|| format!("encoding {}", source.display()))?;
                    text.push_str(&rendered);
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                target.output_settings.write(&text)
            }
        }
    }
}

//! # Generate Subcommand
//!
//! Builds an Article or Product document from a JSON/YAML input file,
//! applying configured defaults first. The result is re-checked with the
//! matching validator; a rejection is logged but does not change the exit
//! code, since generators copy required fields through unchecked.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::Value;

use svp_core::SchemaType;
use svp_schema::{
    generate_article_schema, generate_product_schema, render_script_tag, validate_schema,
    ArticleInput, JsonLd, ProductInput,
};

use crate::config::CliConfig;

/// Arguments for the `svp generate` subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(subcommand)]
    pub kind: GenerateKind,
}

#[derive(Subcommand, Debug)]
pub enum GenerateKind {
    /// Generate an Article from headline, author, dates and images.
    Article(GenerateTarget),
    /// Generate a Product from name, brand, price and rating.
    Product(GenerateTarget),
}

#[derive(Args, Debug)]
pub struct GenerateTarget {
    /// Input record (`.json`, or YAML for any other extension).
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Write here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Wrap the document in a `<script type="application/ld+json">` block.
    #[arg(long)]
    pub script: bool,
}

impl GenerateKind {
    fn target(&self) -> &GenerateTarget {
        match self {
            Self::Article(target) | Self::Product(target) => target,
        }
    }

    fn schema_type(&self) -> SchemaType {
        match self {
            Self::Article(_) => SchemaType::Article,
            Self::Product(_) => SchemaType::Product,
        }
    }
}

/// Execute the generate subcommand.
///
/// Returns exit code 0. Unreadable input and write failures propagate as
/// errors.
pub fn run_generate(args: &GenerateArgs, config: &CliConfig) -> Result<u8> {
    let target = args.kind.target();
    let document = generate_document(args.kind.schema_type(), &target.input, config)?;

    let result = validate_schema(&document);
    if !result.is_valid() {
        tracing::warn!(
            schema_type = %args.kind.schema_type(),
            errors = result.errors().len(),
            "generated document does not pass validation"
        );
        for issue in result.errors() {
            tracing::warn!(field = %issue.field, "{}", issue.message);
        }
    }

    let text = render_document(&document, target.script, config.pretty)?;
    crate::write_output(target.output.as_deref(), &text)?;
    Ok(0)
}

/// Read `input`, apply configured defaults, and generate a document of
/// type `kind`.
pub fn generate_document(kind: SchemaType, input: &Path, config: &CliConfig) -> Result<Value> {
    let document = match kind {
        SchemaType::Article => {
            let mut record: ArticleInput = crate::read_structured(input)?;
            config.apply_to_article(&mut record);
            generate_article_schema(&record).to_value()?
        }
        SchemaType::Product => {
            let mut record: ProductInput = crate::read_structured(input)?;
            config.apply_to_product(&mut record);
            generate_product_schema(&record).to_value()?
        }
        other => anyhow::bail!("no generator for schema type {other}"),
    };
    tracing::info!(schema_type = %kind, input = %input.display(), "generated document");
    Ok(document)
}

/// Render as a script block, indented JSON, or compact JSON.
pub fn render_document(document: &Value, script: bool, pretty: bool) -> Result<String> {
    let text = if script {
        render_script_tag(document)?
    } else if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(text)
}

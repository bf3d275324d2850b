//! File export for the finished catalog tree.
//!
//! Two formats, matching what the downstream shop import accepts: CSV with
//! the fixed column set (URL, Name, Images, Price, Monthly Payment,
//! Attributes) and a YML-style XML document. Images are joined with `"; "`,
//! attributes are embedded as a JSON string. Either one combined file per
//! format or one file per category.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

use catex_core::{CategoryRecord, ProductRecord};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no category named \"{0}\" in the tree")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Yml,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Yml => "yml",
        }
    }

    fn render(self, products: &[ProductRecord]) -> String {
        match self {
            ExportFormat::Csv => generate_csv(products),
            ExportFormat::Yml => generate_yml(products),
        }
    }
}

const CSV_HEADERS: [&str; 6] = [
    "URL",
    "Name",
    "Images",
    "Price",
    "Monthly Payment",
    "Attributes",
];

/// Renders products as CSV with the export column set.
#[must_use]
pub fn generate_csv(products: &[ProductRecord]) -> String {
    let mut out = CSV_HEADERS.join(",");
    out.push('\n');
    for product in products {
        let row = [
            csv_field(&product.url),
            csv_field(&product.name),
            csv_field(&product.images.join("; ")),
            product.price.to_string(),
            product.monthly_payment.to_string(),
            csv_field(&attributes_json(product)),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Renders products as a YML-style XML document.
#[must_use]
pub fn generate_yml(products: &[ProductRecord]) -> String {
    let mut out = String::from("<products>\n");
    for product in products {
        let _ = writeln!(out, "  <product>");
        let _ = writeln!(out, "    <url>{}</url>", xml_escape(&product.url));
        let _ = writeln!(out, "    <name>{}</name>", xml_escape(&product.name));
        let _ = writeln!(
            out,
            "    <images>{}</images>",
            xml_escape(&product.images.join(", "))
        );
        let _ = writeln!(out, "    <price>{}</price>", product.price);
        let _ = writeln!(
            out,
            "    <monthlyPayment>{}</monthlyPayment>",
            product.monthly_payment
        );
        let _ = writeln!(
            out,
            "    <attributes>{}</attributes>",
            xml_escape(&attributes_json(product))
        );
        let _ = writeln!(out, "  </product>");
    }
    out.push_str("</products>\n");
    out
}

/// Writes the requested formats for `tree` into `out_dir` and returns the
/// written paths.
///
/// With `split` set, one file per category named after it; otherwise one
/// combined `all_categories.{ext}` per format. `category_filter` restricts
/// the export to the named categories (and implies per-category output).
///
/// # Errors
///
/// - [`ExportError::UnknownCategory`] if a filter names a category the tree
///   does not contain.
/// - [`ExportError::Io`] on any filesystem failure.
pub fn write_exports(
    tree: &[CategoryRecord],
    formats: &[ExportFormat],
    category_filter: &[String],
    split: bool,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    for wanted in category_filter {
        if !tree.iter().any(|c| &c.category_name == wanted) {
            return Err(ExportError::UnknownCategory(wanted.clone()));
        }
    }

    let selected: Vec<&CategoryRecord> = tree
        .iter()
        .filter(|c| category_filter.is_empty() || category_filter.contains(&c.category_name))
        .collect();

    std::fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for format in formats {
        if split || !category_filter.is_empty() {
            for category in &selected {
                let name = format!(
                    "{}.{}",
                    sanitize_file_name(&category.category_name),
                    format.extension()
                );
                let path = out_dir.join(name);
                write_file(&path, &format.render(&category.products))?;
                written.push(path);
            }
        } else {
            let combined: Vec<ProductRecord> = selected
                .iter()
                .flat_map(|c| c.products.iter().cloned())
                .collect();
            let path = out_dir.join(format!("all_categories.{}", format.extension()));
            write_file(&path, &format.render(&combined))?;
            written.push(path);
        }
    }

    Ok(written)
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    std::fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn attributes_json(product: &ProductRecord) -> String {
    // Serialization of plain data into a string buffer cannot fail.
    serde_json::to_string(&product.attributes).unwrap_or_default()
}

/// Quotes a CSV field when it contains a separator, quote, or line break.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Category names become file names; anything path-hostile turns into `_`.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect();
    if cleaned.is_empty() {
        "category".to_owned()
    } else {
        cleaned
    }
}

// mod.rs - Output renderers and file writers

use crate::core::FeatureMatrix;
use chrono;
use serde::Serialize;
use std::fmt::Display;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Rendering stand-in for an absent cell
pub const DEFAULT_PLACEHOLDER: &str = "-";

/// Cell separator for plain delimited rendering
pub const DEFAULT_SEPARATOR: &str = "|";

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

fn render_cell<T: Display>(cell: &Option<T>, placeholder: &str) -> String {
    match cell {
        Some(value) => value.to_string(),
        None => placeholder.to_string(),
    }
}

fn check_row_labels<T: Clone + PartialEq>(
    matrix: &FeatureMatrix<T>,
    labels: &[String],
) -> Result<(), String> {
    if labels.len() != matrix.rows() {
        return Err(format!(
            "Row label count mismatch: {} labels for {} rows",
            labels.len(),
            matrix.rows()
        ));
    }
    Ok(())
}

fn check_column_labels<T: Clone + PartialEq>(
    matrix: &FeatureMatrix<T>,
    labels: &[String],
) -> Result<(), String> {
    let columns = if matrix.rows() == 0 {
        0
    } else {
        matrix.columns()?
    };
    if labels.len() != columns {
        return Err(format!(
            "Column label count mismatch: {} labels for {} columns",
            labels.len(),
            columns
        ));
    }
    Ok(())
}

/// Render every matrix row as its cells joined by the separator, with the
/// placeholder substituted for each absent cell. Pure projection; the matrix
/// is not consulted for anything but its values.
pub fn render_delimited<T: Display + Clone + PartialEq>(
    matrix: &FeatureMatrix<T>,
    placeholder: &str,
    separator: &str,
) -> Vec<String> {
    matrix
        .features()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| render_cell(cell, placeholder))
                .collect::<Vec<String>>()
                .join(separator)
        })
        .collect()
}

/// Render the matrix as a Markdown table: a header row of 0-based column
/// indices, a rule row, then one line per matrix row prefixed by its bolded
/// label (the 0-based row index when no labels are supplied).
pub fn render_markdown<T: Display + Clone + PartialEq>(
    matrix: &FeatureMatrix<T>,
    row_labels: Option<&[String]>,
    placeholder: &str,
) -> Result<String, String> {
    if let Some(labels) = row_labels {
        check_row_labels(matrix, labels)?;
    }

    let columns = if matrix.rows() == 0 {
        0
    } else {
        matrix.columns()?
    };

    let mut lines = Vec::with_capacity(matrix.rows() + 2);

    let header: Vec<String> = std::iter::once(String::new())
        .chain((0..columns).map(|col| col.to_string()))
        .collect();
    lines.push(format!("| {} |", header.join(" | ")));

    let rule: Vec<&str> = (0..=columns).map(|_| "---").collect();
    lines.push(format!("| {} |", rule.join(" | ")));

    for (row_idx, row) in matrix.features().iter().enumerate() {
        let label = match row_labels {
            Some(labels) => labels[row_idx].clone(),
            None => row_idx.to_string(),
        };
        let cells: Vec<String> = std::iter::once(format!("**{}**", label))
            .chain(row.iter().map(|cell| render_cell(cell, placeholder)))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    Ok(lines.join("\n") + "\n")
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    command: &'a str,
    generated: String,
    version: &'a str,
    row_labels: &'a [String],
    column_labels: &'a [String],
    cells: Vec<Vec<Option<String>>>,
}

/// Build the JSON value for a matrix: axis labels plus a nullable cell table
pub fn json_document<T: Display + Clone + PartialEq>(
    matrix: &FeatureMatrix<T>,
    row_labels: &[String],
    column_labels: &[String],
    command_line: &str,
) -> Result<serde_json::Value, String> {
    check_row_labels(matrix, row_labels)?;
    check_column_labels(matrix, column_labels)?;

    let cells: Vec<Vec<Option<String>>> = matrix
        .features()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.as_ref().map(|value| value.to_string()))
                .collect()
        })
        .collect();

    let document = JsonDocument {
        command: command_line,
        generated: chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        version: env!("CARGO_PKG_VERSION"),
        row_labels,
        column_labels,
        cells,
    };

    serde_json::to_value(&document).map_err(|e| format!("Failed to serialize matrix: {}", e))
}

/// Shared writer for the TSV/CSV formats
#[allow(clippy::too_many_arguments)]
fn write_separated<T: Display + Clone + PartialEq>(
    file_path: &str,
    separator: &str,
    matrix: &FeatureMatrix<T>,
    row_labels: &[String],
    column_labels: &[String],
    placeholder: &str,
    command_line: &str,
    format_name: &str,
) -> Result<(), String> {
    check_row_labels(matrix, row_labels)?;
    check_column_labels(matrix, column_labels)?;

    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    // Write command header
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "# Generated: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# seqtab v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;

    // Write header row
    write!(writer, "Id").map_err(|e| format!("Write error: {}", e))?;
    for label in column_labels {
        write!(writer, "{}{}", separator, label).map_err(|e| format!("Write error: {}", e))?;
    }
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;

    // Write matrix
    for (row_idx, row) in matrix.features().iter().enumerate() {
        write!(writer, "{}", row_labels[row_idx]).map_err(|e| format!("Write error: {}", e))?;
        for cell in row {
            write!(writer, "{}{}", separator, render_cell(cell, placeholder))
                .map_err(|e| format!("Write error: {}", e))?;
        }
        writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!(
        "✅ Feature matrix written to: {} ({} format)",
        file_path, format_name
    );
    Ok(())
}

/// Write the matrix in TSV format
pub fn write_tsv<T: Display + Clone + PartialEq>(
    file_path: &str,
    matrix: &FeatureMatrix<T>,
    row_labels: &[String],
    column_labels: &[String],
    placeholder: &str,
    command_line: &str,
) -> Result<(), String> {
    write_separated(
        file_path,
        "\t",
        matrix,
        row_labels,
        column_labels,
        placeholder,
        command_line,
        "TSV",
    )
}

/// Write the matrix in CSV format
pub fn write_csv<T: Display + Clone + PartialEq>(
    file_path: &str,
    matrix: &FeatureMatrix<T>,
    row_labels: &[String],
    column_labels: &[String],
    placeholder: &str,
    command_line: &str,
) -> Result<(), String> {
    write_separated(
        file_path,
        ",",
        matrix,
        row_labels,
        column_labels,
        placeholder,
        command_line,
        "CSV",
    )
}

/// Write the matrix as a Markdown table
pub fn write_markdown<T: Display + Clone + PartialEq>(
    file_path: &str,
    matrix: &FeatureMatrix<T>,
    row_labels: &[String],
    placeholder: &str,
    command_line: &str,
) -> Result<(), String> {
    let table = render_markdown(matrix, Some(row_labels), placeholder)?;

    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "<!-- Command: {} -->", command_line)
        .map_err(|e| format!("Write error: {}", e))?;
    writeln!(
        writer,
        "<!-- Generated: {} -->",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )
    .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "<!-- seqtab v{} -->", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;
    write!(writer, "{}", table).map_err(|e| format!("Write error: {}", e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Feature matrix written to: {} (Markdown format)", file_path);
    Ok(())
}

/// Write the matrix as a JSON document
pub fn write_json<T: Display + Clone + PartialEq>(
    file_path: &str,
    matrix: &FeatureMatrix<T>,
    row_labels: &[String],
    column_labels: &[String],
    command_line: &str,
) -> Result<(), String> {
    let document = json_document(matrix, row_labels, column_labels, command_line)?;

    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &document)
        .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Feature matrix written to: {} (JSON format)", file_path);
    Ok(())
}

/// Write unlabelled delimited rows joined by a caller-chosen separator
pub fn write_plain<T: Display + Clone + PartialEq>(
    file_path: &str,
    matrix: &FeatureMatrix<T>,
    placeholder: &str,
    separator: &str,
) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    let mut writer = BufWriter::new(file);

    for line in render_delimited(matrix, placeholder, separator) {
        writeln!(writer, "{}", line).map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Feature matrix written to: {} (plain format)", file_path);
    Ok(())
}

/// Write the feature matrix in the specified format
#[allow(clippy::too_many_arguments)]
pub fn write_matrix<T: Display + Clone + PartialEq>(
    file_path: &str,
    format: &str,
    matrix: &FeatureMatrix<T>,
    row_labels: &[String],
    column_labels: &[String],
    placeholder: &str,
    separator: &str,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_tsv(
            file_path,
            matrix,
            row_labels,
            column_labels,
            placeholder,
            command_line,
        ),
        "csv" => write_csv(
            file_path,
            matrix,
            row_labels,
            column_labels,
            placeholder,
            command_line,
        ),
        "markdown" | "md" => write_markdown(
            file_path,
            matrix,
            row_labels,
            placeholder,
            command_line,
        ),
        "json" => write_json(file_path, matrix, row_labels, column_labels, command_line),
        "plain" => write_plain(file_path, matrix, placeholder, separator),
        _ => Err(format!(
            "Unsupported output format: {}. Use: tsv, csv, markdown, json, plain",
            format
        )),
    }
}

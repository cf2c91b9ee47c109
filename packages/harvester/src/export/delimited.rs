//! Delimited (CSV-style) export.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::validate_delimiter;
use crate::error::Result;
use crate::types::Review;

/// Check whether a field must be quoted.
fn needs_quotes(field: &str, delimiter: char) -> bool {
    field.contains(delimiter) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row, quoting fields where needed.
fn write_row<W: Write>(writer: &mut W, fields: &[&str], delimiter: char) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            write!(writer, "{delimiter}")?;
        }
        if needs_quotes(field, delimiter) {
            write!(writer, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            writer.write_all(field.as_bytes())?;
        }
    }
    writer.write_all(b"\n")
}

/// Write a header row followed by one row per review.
///
/// # Examples
/// ```
/// use review_harvester::export::write_delimited;
/// use review_harvester::types::Review;
///
/// let review = Review { consumer: "Ann".into(), rating: "5".into(), ..Review::default() };
/// let mut out = Vec::new();
/// write_delimited(&mut out, &[review], ';').unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "consumer;title;url;content;rating;time\nAnn;;;;5;\n"
/// );
/// ```
pub fn write_delimited<W: Write>(writer: &mut W, reviews: &[Review], delimiter: char) -> io::Result<()> {
    write_row(writer, &Review::FIELD_NAMES, delimiter)?;
    for review in reviews {
        write_row(writer, &review.values(), delimiter)?;
    }
    Ok(())
}

/// Append reviews to a delimited file, creating it if missing.
///
/// Every call writes its own header row. Existing content is kept, so
/// repeated runs against the same file accumulate rows.
///
/// # Arguments
/// * `reviews` - Reviews to write
/// * `path` - Destination file
/// * `delimiter` - Field delimiter (e.g., `,` or `;`)
pub fn save_delimited(reviews: &[Review], path: &Path, delimiter: char) -> Result<()> {
    validate_delimiter(delimiter)?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    write_delimited(&mut writer, reviews, delimiter)?;
    writer.flush()?;

    tracing::debug!(path = %path.display(), count = reviews.len(), "Wrote delimited export");
    Ok(())
}

//! XML export.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{HarvesterError, Result};
use crate::types::Review;

/// Root element name.
const ROOT_ELEMENT: &str = "reviews";

/// Element name of a single review.
const REVIEW_ELEMENT: &str = "review";

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| HarvesterError::XmlWrite(e.to_string()))
}

/// Generate an XML document from reviews.
///
/// The document has a `<reviews>` root with one `<review>` per review, each
/// holding the six fields as child elements. Text is escaped.
pub fn generate_xml(reviews: &[Review]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    emit(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;

    for review in reviews {
        emit(&mut writer, Event::Start(BytesStart::new(REVIEW_ELEMENT)))?;
        for (name, value) in review.fields() {
            emit(&mut writer, Event::Start(BytesStart::new(name)))?;
            emit(&mut writer, Event::Text(BytesText::new(value)))?;
            emit(&mut writer, Event::End(BytesEnd::new(name)))?;
        }
        emit(&mut writer, Event::End(BytesEnd::new(REVIEW_ELEMENT)))?;
    }

    emit(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    let mut content = String::from_utf8(writer.into_inner())
        .map_err(|e| HarvesterError::XmlWrite(e.to_string()))?;
    content.push('\n');
    Ok(content)
}

/// Save reviews as an XML file, replacing any existing file.
///
/// Uses atomic write pattern: writes to a temp file next to the destination,
/// syncs to disk, then renames.
pub fn save_xml(reviews: &[Review], path: &Path) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        HarvesterError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Output path has no file name: {}", path.display()),
        ))
    })?;
    let temp_file = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let content = generate_xml(reviews)?;

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;

    tracing::debug!(path = %path.display(), count = reviews.len(), "Wrote XML export");
    Ok(())
}

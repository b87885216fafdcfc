use crate::catalog::MediaCatalog;
use crate::menu::types::CommandResult;

/// Renders the current catalog listing as numbered lines.
///
/// The listing is recomputed from the directory on every call; an empty
/// catalog renders as a message rather than an empty block.
pub(super) fn render_listing(catalog: &MediaCatalog) -> CommandResult {
    let entries = catalog.list()?;

    if entries.is_empty() {
        return Ok(format!(
            "No media files in {}",
            catalog.directory().display()
        ));
    }

    let mut output = format!(
        "{} media file(s) in {}:\n\n",
        entries.len(),
        catalog.directory().display()
    );

    for (index, entry) in entries.iter().enumerate() {
        let number = index + 1;
        output.push_str(&format!("{number:3}. {}\n", entry.file_name()));
    }

    output.push_str("\nUse the play entry with a file number to start playback.");
    Ok(output)
}

//! Integration tests for media catalog listing and selection.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::fs;

use tempfile::TempDir;

use playdeck::catalog::{CatalogError, MediaCatalog};

fn media_dir(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for name in files {
        fs::write(temp_dir.path().join(name), b"media").unwrap();
    }
    temp_dir
}

fn listed_names(catalog: &MediaCatalog) -> Vec<String> {
    catalog
        .list()
        .unwrap()
        .iter()
        .map(|entry| entry.file_name().to_string())
        .collect()
}

#[test]
fn excludes_files_with_other_extensions() {
    let dir = media_dir(&["a.mp3", "b.mp4", "c.txt"]);
    let catalog = MediaCatalog::new(dir.path());

    assert_eq!(listed_names(&catalog), ["a.mp3", "b.mp4"]);
}

#[test]
fn sorts_entries_by_byte_order() {
    let dir = media_dir(&["b.mp3", "B.mp3", "a.ogg"]);
    let catalog = MediaCatalog::new(dir.path());

    // Uppercase sorts before lowercase in byte order.
    assert_eq!(listed_names(&catalog), ["B.mp3", "a.ogg", "b.mp3"]);
}

#[test]
fn matches_extensions_case_insensitively() {
    let dir = media_dir(&["SONG.MP3", "clip.Mkv", "skip.TXT"]);
    let catalog = MediaCatalog::new(dir.path());

    assert_eq!(listed_names(&catalog), ["SONG.MP3", "clip.Mkv"]);
}

#[test]
fn skips_subdirectories_even_with_media_names() {
    let dir = media_dir(&["a.mp3"]);
    fs::create_dir(dir.path().join("folder.mp4")).unwrap();
    let catalog = MediaCatalog::new(dir.path());

    assert_eq!(listed_names(&catalog), ["a.mp3"]);
}

#[test]
fn listing_reflects_directory_changes() {
    let dir = media_dir(&["a.mp3"]);
    let catalog = MediaCatalog::new(dir.path());

    assert_eq!(listed_names(&catalog), ["a.mp3"]);

    fs::write(dir.path().join("b.flac"), b"media").unwrap();
    assert_eq!(listed_names(&catalog), ["a.mp3", "b.flac"]);

    fs::remove_file(dir.path().join("a.mp3")).unwrap();
    assert_eq!(listed_names(&catalog), ["b.flac"]);
}

#[test]
fn missing_directory_is_reported_as_unreadable() {
    let dir = TempDir::new().unwrap();
    let catalog = MediaCatalog::new(dir.path().join("does-not-exist"));

    assert!(matches!(
        catalog.list(),
        Err(CatalogError::DirectoryUnreadable { .. })
    ));
}

#[test]
fn resolve_is_one_based_and_bounds_checked() {
    let dir = media_dir(&["a.mp3", "b.mp4", "c.ogg"]);
    let catalog = MediaCatalog::new(dir.path());

    assert_eq!(catalog.resolve(1).unwrap().file_name(), "a.mp3");
    assert_eq!(catalog.resolve(3).unwrap().file_name(), "c.ogg");

    assert!(matches!(
        catalog.resolve(0),
        Err(CatalogError::OutOfRange { index: 0, count: 3 })
    ));
    assert!(matches!(
        catalog.resolve(4),
        Err(CatalogError::OutOfRange { index: 4, count: 3 })
    ));
}

#[test]
fn resolve_on_an_empty_catalog_is_out_of_range() {
    let dir = media_dir(&["notes.txt"]);
    let catalog = MediaCatalog::new(dir.path());

    assert!(matches!(
        catalog.resolve(1),
        Err(CatalogError::OutOfRange { index: 1, count: 0 })
    ));
}

#[test]
fn entries_carry_full_paths_into_the_directory() {
    let dir = media_dir(&["a.mp3"]);
    let catalog = MediaCatalog::new(dir.path());

    let entries = catalog.list().unwrap();
    assert_eq!(entries[0].path(), dir.path().join("a.mp3"));
}

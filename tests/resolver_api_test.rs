//! Integration tests for the front-end resolver public API.

use retemplate::config::PluginConfig;
use retemplate::entry::Entry;
use retemplate::host::{MemoryMetadataStore, MemoryRegistry, MetadataStore};
use retemplate::plugin::Plugin;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn plugin_for(theme_dir: &Path, types: &[(&str, &str)]) -> Plugin {
    let registry = MemoryRegistry::with_types(types);
    Plugin::new(PluginConfig::with_theme_dir(theme_dir), &registry)
}

fn store_choice(store: &mut MemoryMetadataStore, entry: &Entry, value: &str) {
    store
        .set_meta(entry.id, "_wp_page_template", value)
        .unwrap();
}

#[test]
fn unset_choice_passes_original_through() {
    let theme = TempDir::new().unwrap();
    let plugin = plugin_for(theme.path(), &[("event", "Events")]);
    let entry = Entry::new(1, "event");
    let store = MemoryMetadataStore::new();

    let resolved = plugin
        .resolver()
        .resolve("single-event.php".as_ref(), &entry, &store)
        .unwrap();
    assert_eq!(resolved, PathBuf::from("single-event.php"));
}

#[test]
fn sentinel_choice_passes_original_through() {
    let theme = TempDir::new().unwrap();
    let plugin = plugin_for(theme.path(), &[("event", "Events")]);
    let entry = Entry::new(1, "event");
    let mut store = MemoryMetadataStore::new();
    store_choice(&mut store, &entry, "default");

    let resolved = plugin
        .resolver()
        .resolve("single-event.php".as_ref(), &entry, &store)
        .unwrap();
    assert_eq!(resolved, PathBuf::from("single-event.php"));
}

#[test]
fn non_qualifying_type_ignores_stored_metadata() {
    let theme = TempDir::new().unwrap();
    let plugin = plugin_for(theme.path(), &[("post", "Posts"), ("event", "Events")]);
    let entry = Entry::new(1, "post");
    let mut store = MemoryMetadataStore::new();
    store_choice(&mut store, &entry, "fancy.php");

    let resolved = plugin
        .resolver()
        .resolve("single.php".as_ref(), &entry, &store)
        .unwrap();
    assert_eq!(resolved, PathBuf::from("single.php"));
}

#[test]
fn existing_path_is_returned_unchanged() {
    let theme = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let template = elsewhere.path().join("fancy.php");
    fs::write(&template, "<?php /* Template Name: Fancy */").unwrap();

    let plugin = plugin_for(theme.path(), &[("event", "Events")]);
    let entry = Entry::new(1, "event");
    let mut store = MemoryMetadataStore::new();
    store_choice(&mut store, &entry, &template.to_string_lossy());

    let resolved = plugin
        .resolver()
        .resolve("single-event.php".as_ref(), &entry, &store)
        .unwrap();
    assert_eq!(resolved, template);
}

#[test]
fn missing_file_resolves_against_theme_dir() {
    let theme = TempDir::new().unwrap();
    let plugin = plugin_for(theme.path(), &[("event", "Events")]);
    let entry = Entry::new(1, "event");
    let mut store = MemoryMetadataStore::new();
    store_choice(&mut store, &entry, "my-template.php");

    let resolved = plugin
        .resolver()
        .resolve("single-event.php".as_ref(), &entry, &store)
        .unwrap();
    assert_eq!(resolved, theme.path().join("my-template.php"));
}

#[test]
fn doubly_missing_file_is_still_handed_to_host() {
    // Existence checking is single-pass; the rewritten path goes back
    // even when nothing exists there either.
    let theme = TempDir::new().unwrap();
    let plugin = plugin_for(theme.path(), &[("event", "Events")]);
    let entry = Entry::new(1, "event");
    let mut store = MemoryMetadataStore::new();
    store_choice(&mut store, &entry, "ghost.php");

    let resolved = plugin
        .resolver()
        .resolve("single-event.php".as_ref(), &entry, &store)
        .unwrap();
    assert!(!resolved.exists());
    assert_eq!(resolved, theme.path().join("ghost.php"));
}

#[test]
fn store_failure_propagates_for_qualifying_types() {
    let theme = TempDir::new().unwrap();
    let plugin = plugin_for(theme.path(), &[("event", "Events")]);
    let entry = Entry::new(1, "event");
    let mut store = MemoryMetadataStore::new();
    store.fail_next();

    let result = plugin
        .resolver()
        .resolve("single-event.php".as_ref(), &entry, &store);
    assert!(result.is_err());
}

#[test]
fn store_failure_is_never_reached_for_reserved_types() {
    // Reserved types short-circuit before the metadata read.
    let theme = TempDir::new().unwrap();
    let plugin = plugin_for(theme.path(), &[("page", "Pages")]);
    let entry = Entry::new(1, "page");
    let mut store = MemoryMetadataStore::new();
    store.fail_next();

    let resolved = plugin
        .resolver()
        .resolve("page.php".as_ref(), &entry, &store)
        .unwrap();
    assert_eq!(resolved, PathBuf::from("page.php"));
}

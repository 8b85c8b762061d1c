//! Snapshot tests for the built-in option catalog.
//!
//! Uses insta YAML snapshots; a change here changes what users can pick.

use folio::options::OptionCatalog;

#[test]
fn snapshot_content_widths() {
    let catalog = OptionCatalog::builtin();
    insta::assert_yaml_snapshot!("content_widths", catalog.content_widths);
}

#[test]
fn snapshot_font_families() {
    let catalog = OptionCatalog::builtin();
    insta::assert_yaml_snapshot!("font_families", catalog.font_families);
}

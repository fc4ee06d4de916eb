use std::fs::{self, File};
use tempfile::tempdir;

use asx_resolver::walker;

#[test]
fn finds_playlists_at_any_depth() {
    let td = tempdir().unwrap();
    let root = td.path();
    let nested = root.join("a/b");
    fs::create_dir_all(&nested).unwrap();

    File::create(root.join("top.asx")).unwrap();
    File::create(nested.join("deep.asx")).unwrap();
    File::create(root.join("song.mp3")).unwrap();
    File::create(root.join("noext")).unwrap();

    let mut found = walker::find_playlists(root);
    found.sort();
    assert_eq!(found, vec![nested.join("deep.asx"), root.join("top.asx")]);
}

#[test]
fn extension_match_is_case_sensitive() {
    let td = tempdir().unwrap();
    File::create(td.path().join("upper.ASX")).unwrap();
    File::create(td.path().join("mixed.Asx")).unwrap();
    assert!(walker::find_playlists(td.path()).is_empty());
}

#[test]
fn missing_root_yields_empty_list() {
    let td = tempdir().unwrap();
    let gone = td.path().join("does-not-exist");
    assert!(walker::find_playlists(&gone).is_empty());
}

#[test]
fn file_root_yields_empty_list() {
    let td = tempdir().unwrap();
    let file = td.path().join("plain.txt");
    File::create(&file).unwrap();
    assert!(walker::find_playlists(&file).is_empty());
}

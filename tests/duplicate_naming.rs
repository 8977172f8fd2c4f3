use file_falcon::fs_ops::resolve_destination;
use std::ffi::OsStr;
use std::fs;
use tempfile::tempdir;

#[test]
fn first_collision_gets_underscore_one() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.mp4"), b"x").unwrap();
    assert_eq!(
        resolve_destination(td.path(), OsStr::new("a.mp4")),
        td.path().join("a_1.mp4")
    );
}

#[test]
fn numbering_increases_until_free() {
    let td = tempdir().unwrap();
    for name in ["movie.mkv", "movie_1.mkv", "movie_2.mkv"] {
        fs::write(td.path().join(name), b"x").unwrap();
    }
    assert_eq!(
        resolve_destination(td.path(), OsStr::new("movie.mkv")),
        td.path().join("movie_3.mkv")
    );
}

#[test]
fn directory_with_same_name_counts_as_taken() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("photo.jpg")).unwrap();
    assert_eq!(
        resolve_destination(td.path(), OsStr::new("photo.jpg")),
        td.path().join("photo_1.jpg")
    );
}

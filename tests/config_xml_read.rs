use file_falcon::config::{LogLevel, MatchType, Mode, OperationType, load_settings_from_xml_path};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn reads_settings_and_trims_whitespace() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    let xml = r#"<config>
  <source_folder>  /data/inbox  </source_folder>
  <dest_folder>/data/sorted</dest_folder>
  <mode> advanced </mode>
  <category>Image Basic</category>
  <selected_types>.jpg .png</selected_types>
  <keyword>holiday</keyword>
  <match_type>contains</match_type>
  <operation_type>Move</operation_type>
  <log_level>quiet</log_level>
  <log_file>/var/log/ff.log</log_file>
</config>"#;
    fs::write(&cfg_path, xml).unwrap();

    let s = load_settings_from_xml_path(&cfg_path).unwrap();
    assert_eq!(s.source.as_deref(), Some(Path::new("/data/inbox")));
    assert_eq!(s.dest.as_deref(), Some(Path::new("/data/sorted")));
    assert_eq!(s.mode, Mode::Advanced);
    assert_eq!(s.category, "Image Basic");
    assert_eq!(s.selected_types, vec![".jpg", ".png"]);
    assert_eq!(s.keyword, "holiday");
    assert_eq!(s.match_type, MatchType::Contains);
    assert_eq!(s.operation_type, OperationType::Move);
    assert_eq!(s.log_level, LogLevel::Quiet);
    assert_eq!(s.log_file.as_deref(), Some(Path::new("/var/log/ff.log")));
}

#[test]
fn missing_elements_fall_back_to_defaults() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><category>PDF</category></config>").unwrap();

    let s = load_settings_from_xml_path(&cfg_path).unwrap();
    assert_eq!(s.category, "PDF");
    assert_eq!(s.mode, Mode::Basic);
    assert_eq!(s.operation_type, OperationType::Copy);
    assert_eq!(s.log_level, LogLevel::Normal);
    assert!(s.source.is_none());
    assert!(s.keyword.is_empty());
}

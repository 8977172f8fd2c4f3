use file_falcon::config::load_settings_from_xml_path;
use std::fs;
use tempfile::tempdir;

#[test]
fn malformed_xml_errors() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    // Missing closing tag for dest_folder
    let xml = r#"<config>
  <source_folder>/tmp/in</source_folder>
  <dest_folder>/tmp/out
</config>"#;
    fs::write(&cfg_path, xml).unwrap();
    let err = load_settings_from_xml_path(&cfg_path).unwrap_err();
    assert!(format!("{err}").contains("parse config xml"));
}

#[test]
fn invalid_operation_value_errors() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><operation_type>delete</operation_type></config>").unwrap();
    let err = load_settings_from_xml_path(&cfg_path).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("operation_type"), "{msg}");
    assert!(msg.contains("delete"), "{msg}");
}

#[test]
fn missing_file_errors() {
    let td = tempdir().unwrap();
    let err = load_settings_from_xml_path(&td.path().join("nope.xml")).unwrap_err();
    assert!(format!("{err}").contains("read config xml"));
}

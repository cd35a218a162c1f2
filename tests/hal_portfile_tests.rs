use jack_portnames::hal::*;
use std::fs;
use tempfile::tempdir;

fn table_with(len: usize) -> PortNameTable {
    PortNameTable::with_len(len).unwrap()
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let mut table = table_with(2);

    let status = load_portfile(&dir.path().join("absent.ports.in"), &mut table, PortGroup::new(0, 2), DEFAULT_MAX_LINE_LEN);

    assert_eq!(status, PortfileStatus::Missing);
    assert!(!status.is_opened());
    assert!(!table.is_filled(0));
    assert!(!table.is_filled(1));
}

#[test]
fn test_load_names_with_offset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.ports.out");
    fs::write(&path, "# main outs\n1=Main L\n2=Main R\n").unwrap();

    let mut table = table_with(4);
    let status = load_portfile(&path, &mut table, PortGroup::new(2, 2), DEFAULT_MAX_LINE_LEN);

    assert_eq!(status, PortfileStatus::Loaded);
    assert_eq!(table.get(0), None);
    assert_eq!(table.get(2), Some("Main L"));
    assert_eq!(table.get(3), Some("Main R"));
}

#[test]
fn test_malformed_and_out_of_range_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.ports.in");
    fs::write(
        &path,
        "1=Mic\n\nno separator here\n0=Zero\n4=Too far\nabc=Not a number\n3=Line In\n",
    )
    .unwrap();

    let mut table = table_with(3);
    let status = load_portfile(&path, &mut table, PortGroup::new(0, 3), DEFAULT_MAX_LINE_LEN);

    assert_eq!(status, PortfileStatus::Loaded);
    assert_eq!(table.get(0), Some("Mic"));
    assert_eq!(table.get(1), None);
    assert_eq!(table.get(2), Some("Line In"));
}

#[test]
fn test_existing_names_are_kept() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.ports.in");
    fs::write(&path, "1=From file\n2=Second\n2=Duplicate\n").unwrap();

    let mut table = table_with(2);
    table.fill(0, "Earlier");
    load_portfile(&path, &mut table, PortGroup::new(0, 2), DEFAULT_MAX_LINE_LEN);

    assert_eq!(table.get(0), Some("Earlier"));
    assert_eq!(table.get(1), Some("Second"));
}

#[test]
fn test_value_is_taken_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.ports.in");
    fs::write(&path, "1=a=b \n 2=Spaced key\n").unwrap();

    let mut table = table_with(2);
    load_portfile(&path, &mut table, PortGroup::new(0, 2), DEFAULT_MAX_LINE_LEN);

    assert_eq!(table.get(0), Some("a=b "));
    assert_eq!(table.get(1), Some("Spaced key"));
}

#[test]
fn test_too_long_line_aborts_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.ports.in");
    let long_name = "x".repeat(DEFAULT_MAX_LINE_LEN);
    fs::write(&path, format!("1=Mic\n2={}\n3=Never read\n", long_name)).unwrap();

    let mut table = table_with(3);
    let status = load_portfile(&path, &mut table, PortGroup::new(0, 3), DEFAULT_MAX_LINE_LEN);

    assert_eq!(status, PortfileStatus::Aborted);
    assert!(status.is_opened());
    assert_eq!(table.get(0), Some("Mic"));
    assert_eq!(table.get(1), None);
    assert_eq!(table.get(2), None);
}

#[test]
fn test_line_at_limit_is_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.ports.in");
    let name = "y".repeat(DEFAULT_MAX_LINE_LEN - 2);
    fs::write(&path, format!("1={}\n", name)).unwrap();

    let mut table = table_with(1);
    let status = load_portfile(&path, &mut table, PortGroup::new(0, 1), DEFAULT_MAX_LINE_LEN);

    assert_eq!(status, PortfileStatus::Loaded);
    assert_eq!(table.get(0), Some(name.as_str()));
}

#[test]
fn test_unterminated_last_line_is_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("card.ports.in");
    fs::write(&path, "1=Mic\n2=No newline").unwrap();

    let mut table = table_with(2);
    load_portfile(&path, &mut table, PortGroup::new(0, 2), DEFAULT_MAX_LINE_LEN);

    assert_eq!(table.get(0), Some("Mic"));
    assert_eq!(table.get(1), None);
}

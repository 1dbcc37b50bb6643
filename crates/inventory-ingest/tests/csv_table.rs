use std::fs;

use inventory_ingest::{read_csv_table, read_inventory};
use inventory_model::InputColumn;

#[test]
fn reads_inventory_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("inventory_raw.csv");
    fs::write(
        &path,
        "ip,hostname,fqdn,mac,owner,device_type,site,notes,source_row_id,vlan\n\
         192.168.010.005,,srv-1.example.com,AA-BB-CC-DD-EE-FF,\"priya (platform) priya@corp.example.com\",,HQ-BUILDING-1,,1,20\n\
         10.0.1.300,bad_host,,AABBCC,,,,\"edge gw, rack 4\",2,30\n",
    )
    .expect("write csv");

    let rows = read_inventory(&path).expect("read inventory");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get(InputColumn::Ip), Some("192.168.010.005"));
    assert_eq!(rows[0].get(InputColumn::Hostname), Some(""));
    assert_eq!(
        rows[0].get(InputColumn::Owner),
        Some("priya (platform) priya@corp.example.com")
    );
    assert_eq!(rows[1].get(InputColumn::Notes), Some("edge gw, rack 4"));
    assert_eq!(rows[1].get(InputColumn::SourceRowId), Some("2"));
}

#[test]
fn keeps_headers_in_file_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("inventory.csv");
    fs::write(&path, "Source_Row_ID,IP\n7,10.0.0.1\n").expect("write csv");

    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["Source_Row_ID", "IP"]);
    assert_eq!(table.column_index(InputColumn::Ip), Some(1));
    let rows = table.raw_rows();
    assert_eq!(rows[0].source_row_id.as_deref(), Some("7"));
    assert_eq!(rows[0].fqdn, None);
}

#[test]
fn missing_file_is_an_error_naming_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let error = read_inventory(&path).expect_err("missing file");
    assert!(format!("{error:#}").contains("absent.csv"));
}

#[test]
fn delimiter_only_lines_are_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("inventory.csv");
    fs::write(
        &path,
        "ip,hostname,source_row_id\n10.0.0.1,a,1\n,,\n\n10.0.0.2,b,3\n",
    )
    .expect("write csv");

    let rows = read_inventory(&path).expect("read inventory");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].ip.as_deref(), Some(""));
    assert_eq!(rows[1].source_row_id.as_deref(), Some(""));
    assert_eq!(rows[2].source_row_id.as_deref(), Some("3"));
}

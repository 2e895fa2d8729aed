mod common;

use std::io::Cursor;

use common::DirectoryBuilder;
use cs2_vpk::{
    error::{Error, Result},
    scan, LocationDescriptor, ScanOptions, VpkDirectory, WantedSet,
};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn wanted(pairs: &[(&str, &str)]) -> WantedSet {
    pairs
        .iter()
        .map(|(path, key)| (path.to_string(), key.to_string()))
        .collect()
}

#[traced_test]
#[test]
fn scan_single_radar() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let index = dir.path().join("pak01_dir.vpk");
    DirectoryBuilder::default()
        .entry("vtex_c", "panorama/images/overheadmaps", "de_test", 0, 1000, 2048)
        .write_to(&index);

    let found = scan(
        &index,
        &wanted(&[("panorama/images/overheadmaps/de_test.vtex_c", "de_test")]),
    )?;

    assert_eq!(found.len(), 1);
    assert_eq!(found["de_test"], LocationDescriptor::new(0, 1000, 2048));

    Ok(())
}

#[traced_test]
#[test]
fn scan_interleaved_entries_stays_aligned() -> Result<()> {
    let data = DirectoryBuilder::default()
        .entry_with_preload("txt", "resource/overviews", "cs_office", (1, 0, 10), b"preload")
        .entry("txt", "resource/overviews", "de_dust2", 2, 100, 200)
        .entry_with_preload("txt", "resource/overviews", "de_zzz", (3, 7, 9), &[0xFF; 300])
        .entry("txt", "resource", "gameinfo", 0, 1, 1)
        .entry("txt", " ", "readme", 0, 2, 2)
        .entry_with_preload(
            "vtex_c",
            "panorama/images/overheadmaps",
            "de_aaa_radar_psd",
            (4, 0, 1),
            &[0x00, 0x00, 0x00],
        )
        .entry("vtex_c", "panorama/images/overheadmaps", "de_dust2_radar_psd", 5, 4096, 8192)
        .entry("vtex_c", "panorama/images/overheadmaps", "de_dust2_lower_radar_psd", 6, 1, 2)
        .entry("vmat_c", "materials", "de_dust2_radar_psd", 7, 3, 4)
        .entry("vtex_c", "materials/overheadmaps", "de_dust2_radar_psd", 8, 5, 6)
        .build();

    let found = VpkDirectory::scan_reader(
        Cursor::new(data),
        &wanted(&[
            ("resource/overviews/de_dust2.txt", "_txt_de_dust2"),
            ("readme.txt", "readme"),
            (
                "panorama/images/overheadmaps/de_dust2_radar_psd.vtex_c",
                "de_dust2",
            ),
            (
                "panorama/images/overheadmaps/de_dust2_lower_radar_psd.vtex_c",
                "de_dust2_lower",
            ),
            ("panorama/images/overheadmaps/de_mirage_radar_psd.vtex_c", "de_mirage"),
        ]),
        ScanOptions::default(),
    )?;

    assert_eq!(found.len(), 4);
    assert_eq!(found["_txt_de_dust2"], LocationDescriptor::new(2, 100, 200));
    assert_eq!(found["readme"], LocationDescriptor::new(0, 2, 2));
    assert_eq!(found["de_dust2"], LocationDescriptor::new(5, 4096, 8192));
    assert_eq!(found["de_dust2_lower"], LocationDescriptor::new(6, 1, 2));
    assert!(!found.contains_key("de_mirage"));

    Ok(())
}

#[traced_test]
#[test]
fn scan_without_matches_is_empty() -> Result<()> {
    let data = DirectoryBuilder::default()
        .entry("txt", "resource/overviews", "de_dust2", 0, 0, 10)
        .entry("vtex_c", "panorama/images/overheadmaps", "de_dust2_radar_psd", 0, 10, 10)
        .build();

    let found = VpkDirectory::scan_reader(
        Cursor::new(data.clone()),
        &wanted(&[("resource/overviews/de_nuke.txt", "_txt_de_nuke")]),
        ScanOptions::default(),
    )?;
    assert!(found.is_empty());

    let found =
        VpkDirectory::scan_reader(Cursor::new(data), &WantedSet::new(), ScanOptions::default())?;
    assert!(found.is_empty());

    Ok(())
}

#[traced_test]
#[test]
fn read_whole_directory() -> Result<()> {
    let data = DirectoryBuilder::default()
        .entry_with_preload("txt", "resource/overviews", "de_nuke", (0, 0, 4), b"\"de_")
        .entry("vtex_c", "panorama/images/overheadmaps", "de_nuke_radar_psd", 1, 64, 128)
        .build();

    let vpk = VpkDirectory::new(Cursor::new(data))?;

    assert_eq!(vpk.len(), 2);
    assert_eq!(vpk.header().signature, 0x55AA1234);
    assert_eq!(
        vpk.file_names().collect::<Vec<_>>(),
        vec![
            "resource/overviews/de_nuke.txt",
            "panorama/images/overheadmaps/de_nuke_radar_psd.vtex_c"
        ]
    );

    let meta = vpk
        .by_name("resource/overviews/de_nuke.txt")
        .expect("entry exists");
    assert_eq!(meta.preload, b"\"de_");
    assert_eq!(meta.trailer.crc, 0xDEADBEEF);

    Ok(())
}

#[traced_test]
#[test]
fn scan_missing_directory_file() {
    let dir = tempfile::tempdir().expect("tempdir");

    let result = scan(dir.path().join("pak01_dir.vpk"), &WantedSet::new());
    assert!(matches!(result, Err(Error::IOError(_))));
}

#[traced_test]
#[test]
fn scan_truncated_directory_file() {
    let mut data = DirectoryBuilder::default()
        .entry("txt", "resource/overviews", "de_dust2", 0, 0, 10)
        .build();
    data.truncate(data.len() - 3);

    let result = VpkDirectory::scan_reader(
        Cursor::new(data),
        &wanted(&[("resource/overviews/de_dust2.txt", "_txt_de_dust2")]),
        ScanOptions::default(),
    );
    assert!(matches!(result, Err(Error::Format(_))));
}

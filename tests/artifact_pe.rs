//! Checks against the built fixture image on windows-msvc

#![cfg(all(windows, target_env = "msvc"))]

use std::fs;

use goblin::pe::PE;
use probe_fixture::layout::TEST_VARIABLE_SECTION;
use probe_fixture::TEST_VARIABLE_VALUE;

const FIXTURE: &str = env!("CARGO_BIN_EXE_probe_fixture");

#[test]
fn tagged_section_is_found_by_name() {
    let buffer = fs::read(FIXTURE).unwrap();
    let pe = PE::parse(&buffer).unwrap();

    let section = pe
        .sections
        .iter()
        .find(|s| s.name().ok() == Some(TEST_VARIABLE_SECTION))
        .unwrap();
    assert!(section.size_of_raw_data >= 8);

    let start = section.pointer_to_raw_data as usize;
    let leading: [u8; 8] = buffer[start..start + 8].try_into().unwrap();
    assert_eq!(u64::from_le_bytes(leading), TEST_VARIABLE_VALUE);
}

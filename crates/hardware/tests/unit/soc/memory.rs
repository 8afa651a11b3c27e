//! # Memory Tests
//!
//! Little-endian word access, region bounds, image loading and dumps.

use legv8_core::common::{AccessType, MemoryError};
use legv8_core::config::MemoryConfig;
use legv8_core::soc::memory::buffer::RegionBuffer;
use legv8_core::soc::{Ram, WordMemory};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

const BASE: u64 = 0x1000;

#[fixture]
fn ram() -> Ram {
    Ram::new(vec![
        RegionBuffer::new("low", BASE, 64),
        RegionBuffer::new("high", 0x8000, 16),
    ])
}

#[rstest]
fn words_are_little_endian(mut ram: Ram) {
    ram.write_word(BASE, 0x1122_3344).unwrap();
    ram.load_bytes(BASE + 8, &[0x78, 0x56, 0x34, 0x12]).unwrap();
    assert_eq!(ram.read_word(BASE).unwrap(), 0x1122_3344);
    assert_eq!(ram.read_word(BASE + 8).unwrap(), 0x1234_5678);
}

#[rstest]
fn unaligned_words_are_allowed(mut ram: Ram) {
    ram.write_word(BASE, 0x4433_2211).unwrap();
    ram.write_word(BASE + 4, 0x8877_6655).unwrap();
    assert_eq!(ram.read_word(BASE + 2).unwrap(), 0x6655_4433);
}

#[rstest]
fn fresh_memory_reads_zero(ram: Ram) {
    assert_eq!(ram.read_word(BASE + 60).unwrap(), 0);
    assert_eq!(ram.read_word(0x800C).unwrap(), 0);
}

#[rstest]
#[case(BASE - 4)]
#[case(BASE + 61)]
#[case(BASE + 64)]
#[case(0x4000)]
#[case(u64::MAX - 1)]
fn reads_outside_regions_fault(ram: Ram, #[case] addr: u64) {
    assert_eq!(
        ram.read_word(addr),
        Err(MemoryError::OutOfRange {
            addr,
            access: AccessType::Read
        })
    );
}

#[rstest]
fn writes_outside_regions_fault_without_side_effects(mut ram: Ram) {
    let before = ram.clone();
    assert_eq!(
        ram.write_word(BASE + 62, 0xFFFF_FFFF),
        Err(MemoryError::OutOfRange {
            addr: BASE + 62,
            access: AccessType::Write
        })
    );
    assert_eq!(ram, before);
}

#[rstest]
fn word_may_not_span_two_regions() {
    let mut ram = Ram::new(vec![
        RegionBuffer::new("a", 0x0, 8),
        RegionBuffer::new("b", 0x8, 8),
    ]);
    assert!(ram.write_word(0x6, 1).is_err());
    assert!(ram.write_word(0x8, 1).is_ok());
}

#[rstest]
fn oversized_image_is_rejected(mut ram: Ram) {
    let image = vec![0xAA; 17];
    assert!(ram.load_bytes(0x8000, &image).is_err());
    assert_eq!(ram.read_word(0x8000).unwrap(), 0);
}

#[rstest]
fn dump_is_inclusive_of_end(mut ram: Ram) {
    ram.write_word(BASE + 4, 7).unwrap();
    let words = ram.dump(BASE, BASE + 8).unwrap();
    assert_eq!(words, vec![(BASE, 0), (BASE + 4, 7), (BASE + 8, 0)]);
}

#[rstest]
fn dump_stops_at_first_fault(ram: Ram) {
    let err = ram.dump(BASE + 56, BASE + 64).unwrap_err();
    assert_eq!(err.addr(), BASE + 64);
}

#[test]
fn default_map_has_three_regions() {
    let ram = Ram::from_config(&MemoryConfig::default());
    let names: Vec<&str> = ram.regions().iter().map(RegionBuffer::name).collect();
    assert_eq!(names, vec!["text", "data", "stack"]);
    assert!(ram.read_word(0x7FF0_0000 + 0xF_FFFC).is_ok());
    assert!(ram.read_word(0x7FF0_0000 + 0xF_FFFD).is_err());
}

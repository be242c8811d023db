#![cfg(target_has_atomic = "64")]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use memxfer::{AlignmentClass, atomicity::AtomicityPolicy};

const WORDS: usize = 64;
const PATTERN_A: u64 = 0x0101_0101_0101_0101;
const PATTERN_B: u64 = 0xFEFE_FEFE_FEFE_FEFE;

#[test]
fn reader_never_observes_torn_words() {
    let a = vec![PATTERN_A; WORDS];
    let b = vec![PATTERN_B; WORDS];
    let dst: Vec<AtomicU64> = (0..WORDS).map(|_| AtomicU64::new(PATTERN_A)).collect();
    let extent = WORDS * 8;

    let to = dst.as_ptr().cast::<u8>();
    assert!(AtomicityPolicy::covers(
        a.as_ptr().cast(),
        to,
        extent,
        AlignmentClass::Long
    ));

    let done = AtomicBool::new(false);
    std::thread::scope(|s| {
        s.spawn(|| {
            let to = dst.as_ptr().cast::<u8>().cast_mut();
            for i in 0..2000 {
                let src = if i % 2 == 0 { &b } else { &a };
                unsafe { memxfer::copy(src.as_ptr().cast(), to, extent) };
            }
            done.store(true, Ordering::Release);
        });
        s.spawn(|| {
            let mut reads = 0u64;
            while !done.load(Ordering::Acquire) || reads == 0 {
                for word in &dst {
                    let v = word.load(Ordering::Relaxed);
                    assert!(v == PATTERN_A || v == PATTERN_B, "torn value {v:#018x}");
                    reads += 1;
                }
            }
        });
    });
}

#[test]
fn unaligned_fill_never_tears_interior_words() {
    let dst: Vec<AtomicU64> = (0..33).map(|_| AtomicU64::new(0)).collect();
    let done = AtomicBool::new(false);
    std::thread::scope(|s| {
        s.spawn(|| {
            let to = dst.as_ptr().cast::<u8>().cast_mut();
            for i in 0..20000 {
                let value = if i % 2 == 0 { 0xFF } else { 0x00 };
                // Bytes 1..256: words 1..32 lie wholly inside the region.
                unsafe { memxfer::fill(to.add(1), 255, value) };
            }
            done.store(true, Ordering::Release);
        });
        s.spawn(|| {
            let mut reads = 0u64;
            while !done.load(Ordering::Acquire) || reads == 0 {
                for word in &dst[1..32] {
                    let v = word.load(Ordering::Relaxed);
                    assert!(v == 0 || v == u64::MAX, "torn value {v:#018x}");
                    reads += 1;
                }
            }
        });
    });
    let bytes: Vec<u8> = dst
        .iter()
        .flat_map(|w| w.load(Ordering::Relaxed).to_ne_bytes())
        .collect();
    assert_eq!(bytes[0], 0);
    assert!(bytes[1..256].iter().all(|&b| b == 0));
    assert_eq!(bytes[256], 0);
}

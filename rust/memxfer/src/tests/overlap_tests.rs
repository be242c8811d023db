use memxfer_bytes::AlignedBuf;
use memxfer_testkit::data_gen::{ascending_bytes, reference_memmove};

use crate::{copy, copy_backward, copy_forward};

fn stress(from: usize, to: usize, extent: usize) {
    let init = ascending_bytes(64);
    let mut expected = init.clone();
    reference_memmove(&mut expected, from, to, extent);
    let mut buf = AlignedBuf::copy_from_slice(&init);
    let base = buf.as_mut_ptr();
    unsafe { copy(base.add(from), base.add(to), extent) };
    assert_eq!(buf.as_slice(), &expected[..], "from={from} to={to} extent={extent}");
}

#[test]
fn overlapping_upward_shift_of_48_bytes() {
    stress(0, 16, 48);
}

#[test]
fn overlapping_downward_shift_of_48_bytes() {
    stress(16, 0, 48);
}

#[test]
fn overlapping_shifts_by_small_distances() {
    for distance in 1..=9 {
        for start in 0..8 {
            let extent = 64 - start - distance;
            stress(start, start + distance, extent);
            stress(start + distance, start, extent);
        }
    }
}

#[test]
fn explicit_direction_on_overlap_matches_memmove() {
    let init = ascending_bytes(96);
    for distance in [1, 2, 4, 8, 13, 32] {
        let extent = 96 - distance;

        let mut expected = init.clone();
        reference_memmove(&mut expected, distance, 0, extent);
        let mut buf = AlignedBuf::copy_from_slice(&init);
        let base = buf.as_mut_ptr();
        unsafe { copy_forward(base.add(distance), base, extent) };
        assert_eq!(buf.as_slice(), &expected[..], "forward distance={distance}");

        let mut expected = init.clone();
        reference_memmove(&mut expected, 0, distance, extent);
        let mut buf = AlignedBuf::copy_from_slice(&init);
        let base = buf.as_mut_ptr();
        unsafe { copy_backward(base, base.add(distance), extent) };
        assert_eq!(buf.as_slice(), &expected[..], "backward distance={distance}");
    }
}

#![no_main]
use huffcode::{decode, encode, BitString};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<bool>)| {
    let (input, noise) = data;

    let (bits, tree) = match encode(&input) {
        Ok(v) => v,
        Err(_) => return,
    };

    let output = decode(&bits, tree.as_ref()).expect("roundtrip decode failed");
    assert_eq!(input, output);

    // Arbitrary bits against the same tree may fail, but must not panic.
    let noise = BitString::from(noise);
    let _ = decode(&noise, tree.as_ref());
});

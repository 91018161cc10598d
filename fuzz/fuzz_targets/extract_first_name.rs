#![no_main]
use libfuzzer_sys::fuzz_target;
use name_gender::normalize::{extract_first_name, Order};

fuzz_target!(|data: &str| {
    let first = extract_first_name(data, Order::Direct);
    assert!(first.chars().count() != 1);
    extract_first_name(data, Order::Inverse);
});

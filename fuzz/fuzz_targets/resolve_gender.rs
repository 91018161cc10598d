#![no_main]
use libfuzzer_sys::fuzz_target;
use name_gender::{Options, Resolver, Tables};
use once_cell::sync::Lazy;

static RESOLVER: Lazy<Resolver> = Lazy::new(|| Resolver::new(Tables::default(), Options::default()));

fuzz_target!(|data: &str| {
    RESOLVER.resolve_gender(data, None);
    RESOLVER.resolve_gender(data, Some("Russia"));
    RESOLVER.resolve_gender(data, Some("The Netherlands"));
});

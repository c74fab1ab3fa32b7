#![no_main]
use libfuzzer_sys::fuzz_target;
use timelog_core::Composition;

fuzz_target!(|data: &str| {
    // Parse errors are fine; panics are not. A parsed config must validate
    // without panicking and map onto a composition.
    if let Ok(cfg) = timelog_config::load_toml(data) {
        let _ = cfg.validate();
        let _ = Composition::from(&cfg);
    }
});

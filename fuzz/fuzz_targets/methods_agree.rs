#![no_main]

use libfuzzer_sys::fuzz_target;

use partcount::count::Method;
use partcount::input::Puzzle;
use partcount::report::cross_check;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(puzzle) = text.parse::<Puzzle>() else {
        return;
    };
    let prefix = Method::Prefix.counter();
    let suffix = Method::Suffix.counter();
    for target in &puzzle.targets {
        assert_eq!(
            prefix.count(&puzzle.patterns, target),
            suffix.count(&puzzle.patterns, target),
            "{target:?}"
        );
    }
    assert!(cross_check(&puzzle.patterns, &puzzle.targets).is_empty());
});

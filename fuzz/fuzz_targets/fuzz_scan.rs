#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sufmatch::matcher::Matcher;

#[derive(Arbitrary, Debug)]
struct Input {
    pattern: Vec<u8>,
    haystack: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let Ok(matcher) = Matcher::with_defaults(&input.pattern) else {
        return;
    };

    let found = matcher.find(&input.haystack);
    let expected: Vec<usize> = if input.haystack.len() < input.pattern.len() {
        Vec::new()
    } else {
        input
            .haystack
            .windows(input.pattern.len())
            .enumerate()
            .filter(|(_, w)| *w == input.pattern.as_slice())
            .map(|(i, _)| i)
            .collect()
    };
    assert_eq!(found, expected);
});

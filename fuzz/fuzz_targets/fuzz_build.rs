#![no_main]

use libfuzzer_sys::fuzz_target;
use sufmatch::tree::SuffixTree;

fuzz_target!(|data: &[u8]| {
    // Inputs containing the sentinel are rejected; everything else must
    // produce one leaf per suffix
    if let Ok(tree) = SuffixTree::build(data, 0) {
        assert_eq!(tree.leaf_count(), data.len() + 1);
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let parsed = nextname_syntax::parse(s);
        // Rejected spans must point into the template
        for err in parsed.rejected.iter().chain(&parsed.warnings) {
            let span = err.span();
            assert!(span.start <= span.end && span.end <= s.len());
            assert!(s.is_char_boundary(span.start) && s.is_char_boundary(span.end));
        }
    }
});

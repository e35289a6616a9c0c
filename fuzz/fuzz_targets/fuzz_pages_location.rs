#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // link, namespace, name and an optional CNAME, newline separated
    let mut parts = input.splitn(4, '\n');
    let repo = ghpages::RepoMetadata {
        link: parts.next().map(str::to_string),
        namespace: parts.next().unwrap_or_default().to_string(),
        name: parts.next().unwrap_or_default().to_string(),
    };
    let cname = parts.next();

    let _ = ghpages::resolve_pages_location(cname, &repo);
});

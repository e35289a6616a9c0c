//! Property tests for remote URL parsing.

use proptest::prelude::*;

use ghpages::RemoteUrl;

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,15}(\\.[a-z][a-z0-9]{0,15}){1,3}").unwrap()
}

fn repo_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = RemoteUrl::parse(&s);
    }

    /// PROPERTY: http(s) remotes keep their text and expose their host.
    #[test]
    fn property_http_remote_exposes_host(
        secure in any::<bool>(),
        host in host(),
        path in repo_path(),
    ) {
        let scheme = if secure { "https" } else { "http" };
        let raw = format!("{}://{}/{}.git", scheme, host, path);

        let remote = RemoteUrl::parse(&raw).unwrap();

        prop_assert_eq!(remote.as_str(), raw.as_str());
        prop_assert_eq!(remote.host(), Some(host.as_str()));
        prop_assert!(remote.is_http());
    }

    /// PROPERTY: scp-like remotes resolve to the host before the colon.
    #[test]
    fn property_scp_remote_exposes_host(
        host in host(),
        path in repo_path(),
    ) {
        let raw = format!("git@{}:{}.git", host, path);

        let remote = RemoteUrl::parse(&raw).unwrap();

        prop_assert_eq!(remote.host(), Some(host.as_str()));
        prop_assert!(!remote.is_http());
    }
}

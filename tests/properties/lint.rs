//! Property tests for the configuration linter.

use proptest::prelude::*;

use ghpages::application::lint_args;
use ghpages::RawArgs;

fn setting() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::string::string_regex("[a-z/@:.]{0,12}").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the summary header counts exactly the listed warnings.
    #[test]
    fn property_summary_matches_warnings(
        remote_url in setting(),
        upstream_name in setting(),
        netrc_machine in setting(),
        temporary_base in setting(),
        ssh_key in setting(),
        password in setting(),
        pages_directory in setting(),
        target_directory in setting(),
        link in setting(),
    ) {
        let mut args = RawArgs {
            remote_url,
            upstream_name,
            netrc_machine,
            temporary_base,
            ssh_key,
            password,
            pages_directory,
            target_directory,
            ..RawArgs::default()
        };
        args.build.repo.link = link;

        let report = lint_args(&args);
        let summary = report.summary();
        let mut lines = summary.lines();

        prop_assert!(report.issues() <= 7);
        let header = format!("lint: {} issue(s) found", report.issues());
        prop_assert_eq!(lines.next(), Some(header.as_str()));
        prop_assert_eq!(lines.count(), report.issues());
    }
}

//! Architecture contract tests.

mod support;

use support::architecture::find_lines_containing;

#[test]
fn domain_has_no_io_or_outer_layer_imports() {
    let hits = find_lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
            "alloy_provider",
        ],
    );

    assert!(
        hits.is_empty(),
        "found forbidden imports in domain layer: {hits:#?}"
    );
}

#[test]
fn ports_do_not_depend_on_adapters() {
    let hits = find_lines_containing(
        "src/port",
        &["crate::adapter", "crate::infrastructure", "crate::application"],
    );

    assert!(
        hits.is_empty(),
        "ports should depend only on domain: {hits:#?}"
    );
}

#[test]
fn application_layer_has_no_direct_adapter_imports() {
    let hits = find_lines_containing(
        "src/application",
        &["crate::adapter::", "crate::infrastructure::", "alloy_provider", "reqwest::"],
    );

    assert!(
        hits.is_empty(),
        "application layer should not import adapters directly: {hits:#?}"
    );
}

#[test]
fn only_adapters_talk_to_the_network() {
    let hits = find_lines_containing("src/infrastructure", &["reqwest::"]);

    assert!(
        hits.is_empty(),
        "HTTP access belongs in adapters: {hits:#?}"
    );
}

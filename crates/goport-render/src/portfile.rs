use goport_types::{ChecksumRecord, RecipeBundle, split_version_prefix};

const HEADER: &str = "# -*- coding: utf-8; mode: tcl; tab-width: 4; indent-tabs-mode: nil; c-basic-offset: 4 -*- vim:fenc=utf-8:ft=tcl:et:sw=4:ts=4:sts=4\n";

/// Keyword column width.
const KEY_WIDTH: usize = 20;
/// Indent of values nested under a keyword.
const NESTED_INDENT: usize = 24;

pub fn render_portfile(bundle: &RecipeBundle) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&keyword_line("PortSystem", "1.0"));
    out.push_str(&keyword_line("PortGroup", "golang 1.0"));
    out.push('\n');

    let (prefix, version) = split_version_prefix(&bundle.version);
    let setup = if prefix.is_empty() {
        format!("{} {version}", bundle.package_id)
    } else {
        format!("{} {version} {prefix}", bundle.package_id)
    };
    out.push_str(&keyword_line("go.setup", &setup));
    if let Some(alias) = &bundle.alias {
        out.push_str(&keyword_line("go.package", alias));
    }

    out.push_str("categories\nmaintainers\nlicense\n\ndescription\n\nlong_description\n\n");
    out.push_str(&render_checksums(bundle));
    out.push('\n');

    let vendors = render_go_vendors(bundle);
    if !vendors.is_empty() {
        out.push('\n');
        out.push_str(&vendors);
        out.push('\n');
    }
    out
}

/// The `checksums` block for the package's own archive.
///
/// With vendored dependencies the archive must be named explicitly, so the digests move to
/// their own lines under `${distname}${extract.suffix}`.
pub fn render_checksums(bundle: &RecipeBundle) -> String {
    let unavailable = ChecksumRecord::unavailable();
    let checksum = bundle.primary_checksum().unwrap_or(&unavailable);
    if bundle.dependencies.is_empty() {
        format!(
            "{:<KEY_WIDTH$}{}",
            "checksums",
            checksum_lines(checksum, KEY_WIDTH).trim_start()
        )
    } else {
        format!(
            "{:<KEY_WIDTH$}${{distname}}${{extract.suffix}} \\\n{}",
            "checksums",
            checksum_lines(checksum, NESTED_INDENT)
        )
    }
}

/// The `go.vendors` block, or an empty string without dependencies.
pub fn render_go_vendors(bundle: &RecipeBundle) -> String {
    let entries: Vec<String> = bundle
        .vendored()
        .map(|(dep, entry)| {
            format!(
                "{} \\\n{}lock    {} \\\n{}",
                dep.name,
                " ".repeat(NESTED_INDENT),
                dep.version,
                checksum_lines(&entry.checksum, NESTED_INDENT)
            )
        })
        .collect();
    if entries.is_empty() {
        return String::new();
    }
    let separator = format!(" \\\n{}", " ".repeat(KEY_WIDTH));
    format!("{:<KEY_WIDTH$}{}", "go.vendors", entries.join(&separator))
}

fn keyword_line(keyword: &str, value: &str) -> String {
    format!("{keyword:<KEY_WIDTH$}{value}\n")
}

fn checksum_lines(checksum: &ChecksumRecord, indent: usize) -> String {
    let pad = " ".repeat(indent);
    format!(
        "{pad}rmd160  {} \\\n{pad}sha256  {} \\\n{pad}size    {}",
        checksum.rmd160, checksum.sha256, checksum.size
    )
}

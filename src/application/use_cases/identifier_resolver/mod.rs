// ============================================================
// IDENTIFIER RESOLVER
// ============================================================
// Extracts candidate document identifiers from scraped URLs. Real
// URLs are inconsistent: direct reader links carry the ref as a query
// parameter, hub links embed an 8-character id in the path, and the
// oldest hub links carry no id at all and need the static fallback
// table. The resolver returns every textual candidate; the join stage
// drops the ones without a catalog match.

mod static_urls;

use once_cell::sync::Lazy;
use regex::Regex;

use static_urls::STATIC_HUB_IDS;

/// Marker of a direct reader URL; the ref follows it.
const READER_MARKER: &str = "read.oecd-ilibrary.org/view/?ref=";

/// Marker of a hub URL; the id is embedded in the path.
const HUB_MARKER: &str = "oecd.org/coronavirus/policy-responses/";

/// A usable ref after the reader marker is at least this long.
const MIN_REF_LENGTH: usize = 21;

/// Separators and stray words that raw analytics data appends after
/// the ref in reader URLs.
const NOISE_TOKENS: &[&str] = &["&", "?", "\\", "title", "country", "hyperlink", "and"];

/// Hub ids are exactly 8 alphanumerics, preceded by `-` and followed
/// by a separator. Input is lowercased before matching; a trailing `/`
/// is appended to guarantee a boundary at end-of-string.
static HUB_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([a-z0-9]{8})[/\.\?&]").unwrap());

/// Control and other non-printable characters leaking into raw data.
static NON_PRINTABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{C}+").unwrap());

/// Whether a URL should be considered for resolution at all: a reader
/// URL with enough characters after the marker, a hub URL with at
/// least one embedded id, or a legacy hub URL known to the static
/// fallback table.
pub fn is_relevant_url(url: &str) -> bool {
    let url = url.to_lowercase();
    is_reader_url(&url)
        || (url.contains(HUB_MARKER) && !hub_pattern_ids(&url).is_empty())
        || static_fragment_id(&url).is_some()
}

/// Extract candidate identifiers from a raw URL, in strict precedence
/// order: reader marker with a full-length ref, hub id pattern, static
/// fallback table, then a short reader ref when no other scheme
/// applies. A URL matching none of the schemes is returned as-is
/// (trimmed, lowercased) on the assumption that it already is an
/// identifier; a hub URL yielding nothing produces an empty candidate
/// set.
pub fn resolve_ids(url: &str) -> Vec<String> {
    let url = NON_PRINTABLE.replace_all(url, "").to_lowercase();
    if is_reader_url(&url) {
        return vec![reader_ref(&url)];
    }
    if url.contains(HUB_MARKER) {
        let ids = hub_pattern_ids(&url);
        if !ids.is_empty() {
            return ids;
        }
        return static_fragment_id(&url)
            .map(|id| vec![id.to_string()])
            .unwrap_or_default();
    }
    if url.contains(READER_MARKER) {
        // short ref, nothing else in the URL to extract from
        return vec![reader_ref(&url)];
    }
    vec![url.trim().to_string()]
}

fn is_reader_url(url: &str) -> bool {
    url.contains(READER_MARKER) && after_last(url, READER_MARKER).len() >= MIN_REF_LENGTH
}

/// Ref from a reader URL: everything after the marker, cut at the
/// first noise token.
fn reader_ref(url: &str) -> String {
    let mut tail = after_last(url, READER_MARKER);
    let cut = NOISE_TOKENS
        .iter()
        .filter_map(|token| tail.find(token))
        .min()
        .unwrap_or(tail.len());
    tail = &tail[..cut];
    tail.trim().to_string()
}

/// All non-overlapping hub id matches across the whole string. The
/// regex may match more than one token per URL; only one is the real
/// id but the wrong ones are discarded by the join later.
fn hub_pattern_ids(url: &str) -> Vec<String> {
    let padded = format!("{}/", url);
    HUB_ID_PATTERN
        .captures_iter(&padded)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Last-chance lookup for legacy hub URLs without an embedded id.
fn static_fragment_id(url: &str) -> Option<&'static str> {
    STATIC_HUB_IDS
        .iter()
        .find(|(fragment, _)| url.contains(fragment))
        .map(|(_, id)| *id)
}

/// Segment after the last occurrence of `marker`, empty when the
/// marker is absent or terminal.
fn after_last<'a>(value: &'a str, marker: &str) -> &'a str {
    match value.rfind(marker) {
        Some(position) => &value[position + marker.len()..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_url_yields_single_lowercased_ref() {
        let ids = resolve_ids("https://read.oecd-ilibrary.org/view/?ref=20210101001E1");
        assert_eq!(ids, vec!["20210101001e1".to_string()]);
    }

    #[test]
    fn test_reader_url_is_cut_at_noise_tokens() {
        for url in [
            "https://read.oecd-ilibrary.org/view/?ref=1060_1060600-i9kjbe67dc&title=oecd-skills",
            "https://read.oecd-ilibrary.org/view/?ref=1060_1060600-i9kjbe67dc?utm_source=x",
            "https://read.oecd-ilibrary.org/view/?ref=1060_1060600-i9kjbe67dctitlefoo",
        ] {
            assert_eq!(resolve_ids(url), vec!["1060_1060600-i9kjbe67dc".to_string()]);
        }
    }

    #[test]
    fn test_reader_marker_uses_last_occurrence() {
        let url = "https://read.oecd-ilibrary.org/view/?ref=x&hyperlink=read.oecd-ilibrary.org/view/?ref=1060_1060600-i9kjbe67dc";
        assert_eq!(resolve_ids(url), vec!["1060_1060600-i9kjbe67dc".to_string()]);
    }

    #[test]
    fn test_non_printable_characters_are_stripped() {
        let url = "https://read.oecd-ilibrary.org/view/?ref=1060_10\u{200b}60600-i9kjbe67dc\u{0007}";
        assert_eq!(resolve_ids(url), vec!["1060_1060600-i9kjbe67dc".to_string()]);
    }

    #[test]
    fn test_hub_url_yields_embedded_id() {
        let ids = resolve_ids(
            "https://www.oecd.org/coronavirus/policy-responses/covid-19-and-global-food-systems-aeb1434b/",
        );
        assert_eq!(ids, vec!["aeb1434b".to_string()]);
    }

    #[test]
    fn test_hub_id_is_found_at_end_of_string_without_separator() {
        let ids = resolve_ids(
            "https://www.oecd.org/coronavirus/policy-responses/covid-19-and-global-food-systems-aeb1434b",
        );
        assert_eq!(ids, vec!["aeb1434b".to_string()]);
    }

    #[test]
    fn test_short_reader_link_does_not_mask_hub_id() {
        // a stray reader marker with a too-short ref must not shadow
        // the id embedded in the hub path
        let ids = resolve_ids(
            "https://www.oecd.org/coronavirus/policy-responses/covid-19-and-global-food-systems-aeb1434b/?next=read.oecd-ilibrary.org/view/?ref=short",
        );
        assert_eq!(ids, vec!["aeb1434b".to_string()]);
    }

    #[test]
    fn test_hub_url_with_several_matches_returns_all_candidates() {
        let ids = resolve_ids(
            "https://www.oecd.org/coronavirus/policy-responses/foo-aeb1434b/annex-12345678.pdf",
        );
        assert_eq!(ids, vec!["aeb1434b".to_string(), "12345678".to_string()]);
    }

    #[test]
    fn test_id_shorter_or_longer_than_eight_does_not_match() {
        assert!(resolve_ids(
            "https://www.oecd.org/coronavirus/policy-responses/some-unlisted-page-abc123/"
        )
        .is_empty());
        assert!(resolve_ids(
            "https://www.oecd.org/coronavirus/policy-responses/some-unlisted-page-abc123456789/"
        )
        .is_empty());
    }

    #[test]
    fn test_legacy_hub_url_resolves_through_static_table() {
        let ids = resolve_ids(
            "https://www.oecd.org/coronavirus/policy-responses/cities-policy-responses/?utm=x",
        );
        assert_eq!(ids, vec!["fd1053ff".to_string()]);
    }

    #[test]
    fn test_unmatched_hub_url_yields_empty_candidate_set() {
        let url = "https://www.oecd.org/coronavirus/policy-responses/some-unlisted-page/";
        assert!(resolve_ids(url).is_empty());
        assert!(!is_relevant_url(url));
    }

    #[test]
    fn test_non_hub_non_reader_url_is_returned_as_identifier() {
        let ids = resolve_ids("  Sites/Education-2021 ");
        assert_eq!(ids, vec!["sites/education-2021".to_string()]);
    }

    #[test]
    fn test_relevance_predicate() {
        // reader marker with a long enough tail
        assert!(is_relevant_url(
            "https://READ.oecd-ilibrary.org/view/?ref=1060_1060600-i9kjbe67dc"
        ));
        // reader marker with a short tail is noise
        assert!(!is_relevant_url("https://read.oecd-ilibrary.org/view/?ref=short"));
        // hub URL with an embedded id
        assert!(is_relevant_url(
            "https://www.oecd.org/coronavirus/policy-responses/covid-19-and-global-food-systems-aeb1434b/"
        ));
        // legacy hub URL known to the static table
        assert!(is_relevant_url(
            "https://www.oecd.org/coronavirus/policy-responses/cities-policy-responses/"
        ));
        // unrelated URL
        assert!(!is_relevant_url("https://www.oecd.org/about/"));
    }

    #[test]
    fn test_static_table_precedence_is_first_match() {
        // two fragments where one is a substring of the other; the
        // earlier entry must win
        let earlier = STATIC_HUB_IDS
            .iter()
            .position(|(f, _)| {
                f == &"coronavirus/policy-responses/the-territorial-impact-of-covid-19-managing-the-crisis-across-levels-of-government"
            })
            .unwrap();
        let later = STATIC_HUB_IDS
            .iter()
            .position(|(f, _)| {
                f == &"coronavirus/policy-responses/the-territorial-impact-of-covid-19-managing-the-crisis-and-recovery-across-levels-of-government"
            })
            .unwrap();
        assert!(earlier < later);
        let ids = resolve_ids(
            "https://www.oecd.org/coronavirus/policy-responses/the-territorial-impact-of-covid-19-managing-the-crisis-across-levels-of-government/",
        );
        assert_eq!(ids, vec!["d3e314e1".to_string()]);
    }
}

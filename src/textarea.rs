use crate::storage::models::NewHit;

const ORIGINAL_KIND: &str = "original";

/// Parses pasted textarea content into hit records, one per non-blank line.
///
/// A line with at least four bracket groups is an original-source record,
/// `[number][title][color][text]`, with optional fifth and sixth groups for
/// tension and flag. Anything else becomes a custom hit with the whole line
/// as its text. Index assignment belongs to the insertion path.
pub fn parse_textarea(input: &str) -> Vec<NewHit> {
    let mut hits = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let groups = bracket_groups(line);
        if groups.len() >= 4 {
            hits.push(NewHit {
                kind: ORIGINAL_KIND.to_string(),
                number: Some(groups[0].to_string()),
                title: Some(groups[1].to_string()),
                color: Some(groups[2].to_string()),
                text: Some(groups[3].to_string()),
                tension: groups.get(4).map(|s| s.to_string()),
                flag: groups.get(5).map(|s| s.to_string()),
            });
        } else {
            hits.push(NewHit::custom(line));
        }
    }
    hits
}

/// Contents of each `[...]` segment, left to right. Unclosed brackets end
/// the scan.
fn bracket_groups(line: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find('[') {
        let after = &rest[start + 1..];
        match after.find(']') {
            Some(end) => {
                groups.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_line() {
        let hits = parse_textarea("[1][A][red][hi]");
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.kind, "original");
        assert_eq!(hit.number.as_deref(), Some("1"));
        assert_eq!(hit.title.as_deref(), Some("A"));
        assert_eq!(hit.color.as_deref(), Some("red"));
        assert_eq!(hit.text.as_deref(), Some("hi"));
        assert_eq!(hit.tension, None);
        assert_eq!(hit.flag, None);
    }

    #[test]
    fn test_structured_line_with_tension_and_flag() {
        let hits = parse_textarea("[1][A][red][hi][low][starred]");
        assert_eq!(hits[0].tension.as_deref(), Some("low"));
        assert_eq!(hits[0].flag.as_deref(), Some("starred"));
    }

    #[test]
    fn test_plain_line_is_custom() {
        let hits = parse_textarea("just a note");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_custom());
        assert_eq!(hits[0].text.as_deref(), Some("just a note"));
    }

    #[test]
    fn test_too_few_groups_falls_back_to_custom() {
        let hits = parse_textarea("[1][A] partial");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].is_custom());
        assert_eq!(hits[0].text.as_deref(), Some("[1][A] partial"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let hits = parse_textarea("\n[1][A][red][hi]\n\n   \nnote\n");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, "original");
        assert!(hits[1].is_custom());
    }

    #[test]
    fn test_mixed_input_preserves_line_order() {
        let input = "[1][A][red][first]\naside\n[2][B][blue][second]";
        let kinds: Vec<_> = parse_textarea(input)
            .into_iter()
            .map(|h| h.kind)
            .collect();
        assert_eq!(kinds, vec!["original", "custom", "original"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_textarea("").is_empty());
    }

    #[test]
    fn test_unclosed_bracket_ends_scan() {
        let hits = parse_textarea("[1][A][red][hi");
        assert!(hits[0].is_custom());
    }

    #[test]
    fn test_empty_groups_are_kept() {
        let hits = parse_textarea("[1][][red][hi]");
        assert_eq!(hits[0].title.as_deref(), Some(""));
    }
}

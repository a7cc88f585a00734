//! Lazy markdown link extraction

use skillshelf_types::ReferenceLink;
use tracing::warn;

/// Extract reference links from a document body.
///
/// The returned iterator is lazy and finite: links are parsed as they are
/// consumed, in order of first appearance, with duplicates preserved.
pub fn extract_links(body: &str) -> Links<'_> {
    Links { body, pos: 0 }
}

/// Iterator over the reference links in one document body
pub struct Links<'a> {
    body: &'a str,
    pos: usize,
}

impl<'a> Links<'a> {
    /// Scan forward from `self.pos` to the next well-formed link.
    ///
    /// Byte offsets are safe to slice on: every delimiter we search for is
    /// ASCII, so `find` results land on char boundaries.
    fn scan(&mut self) -> Option<ReferenceLink> {
        while self.pos < self.body.len() {
            let open = self.body[self.pos..].find('[')? + self.pos;

            let close = match self.body[open + 1..].find(']') {
                Some(off) => open + 1 + off,
                // No closing bracket anywhere after this point, so no
                // further link can complete either.
                None => return None,
            };

            // `[text]` without `(` is a shortcut reference, not our syntax.
            if self.body.as_bytes().get(close + 1) != Some(&b'(') {
                self.pos = open + 1;
                continue;
            }

            let target_start = close + 2;
            let end = match self.body[target_start..].find(')') {
                Some(off) => target_start + off,
                None => {
                    warn!("Unterminated reference link at byte offset {}", open);
                    return None;
                }
            };

            let raw = self.body[target_start..end].trim();

            if raw.is_empty() {
                warn!("Empty reference link target at byte offset {}", open);
                self.pos = end + 1;
                continue;
            }

            // A '[' or newline inside the target means the link never
            // closed and we swallowed the following text; resume scanning
            // inside it so a later well-formed link is still found.
            if raw.contains('[') || raw.contains('\n') {
                warn!("Unterminated reference link at byte offset {}", open);
                self.pos = target_start;
                continue;
            }

            self.pos = end + 1;

            // Intra-document anchors and absolute URLs do not point at
            // other documents.
            if raw.starts_with('#') || raw.contains("://") {
                continue;
            }

            return Some(ReferenceLink::parse(raw));
        }
        None
    }
}

impl<'a> Iterator for Links<'a> {
    type Item = ReferenceLink;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(body: &str) -> Vec<String> {
        extract_links(body).map(|l| l.target).collect()
    }

    #[test]
    fn test_links_in_source_order_with_duplicates() {
        let body = "See [X](x.md), then [Y](y.md), then [X](x.md) again.";
        assert_eq!(targets(body), vec!["x.md", "y.md", "x.md"]);
    }

    #[test]
    fn test_fragment_is_split_off() {
        let links: Vec<ReferenceLink> = extract_links("Read [setup](guide.md#install).").collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "guide.md");
        assert_eq!(links[0].fragment.as_deref(), Some("install"));
    }

    #[test]
    fn test_empty_target_skipped() {
        let body = "A [broken]() link, then [good](ok.md).";
        assert_eq!(targets(body), vec!["ok.md"]);
    }

    #[test]
    fn test_unterminated_link_does_not_block_later_links() {
        let body = "An [open](never-closed then [good](ok.md) after.";
        assert_eq!(targets(body), vec!["ok.md"]);
    }

    #[test]
    fn test_shortcut_reference_ignored() {
        let body = "A [bare] bracket and a [real](doc.md) link.";
        assert_eq!(targets(body), vec!["doc.md"]);
    }

    #[test]
    fn test_anchors_and_urls_ignored() {
        let body = "Jump [here](#section) or visit [site](https://example.com) or [doc](doc.md).";
        assert_eq!(targets(body), vec!["doc.md"]);
    }

    #[test]
    fn test_no_links() {
        assert!(targets("Plain prose with no links at all.").is_empty());
    }

    #[test]
    fn test_lazy_consumption() {
        let body = "[a](a.md) [b](b.md) [c](c.md)";
        let mut links = extract_links(body);
        assert_eq!(links.next().map(|l| l.target), Some("a.md".to_string()));
        // Remaining links are still pending; nothing was parsed ahead.
        let rest: Vec<String> = links.map(|l| l.target).collect();
        assert_eq!(rest, vec!["b.md", "c.md"]);
    }
}

//! Cross-reference markup in constellation descriptions.
//!
//! Descriptive text names other constellations with `<Name>` markers. The
//! lexer splits the text into alternating plain and reference segments so a
//! UI can render each reference as a control. Rules:
//!
//! - Markers are matched leftmost-first and never nest. A `<` seen while a
//!   marker is open abandons the open one; the abandoned text stays plain.
//! - `<>` is dropped entirely and does not split the surrounding text.
//! - An unclosed `<` and a stray `>` are plain text.
//! - The output always starts and ends with a `Plain` segment (possibly
//!   empty), so references sit at the odd positions.

use tracing::debug;

use crate::error::ChartError;

/// What activating a reference asks the surrounding UI to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Make the named constellation the current selection.
    SelectConstellation(String),
}

/// One piece of an annotated description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    Plain(String),
    Reference {
        display_name: String,
        target: String,
    },
}

impl TextSegment {
    /// Text shown for this segment, with marker brackets removed.
    pub fn text(&self) -> &str {
        match self {
            TextSegment::Plain(s) => s,
            TextSegment::Reference { display_name, .. } => display_name,
        }
    }

    /// Action to perform when the segment is activated; `None` for plain text.
    pub fn action(&self) -> Option<NavigationAction> {
        match self {
            TextSegment::Plain(_) => None,
            TextSegment::Reference { target, .. } => {
                Some(NavigationAction::SelectConstellation(target.clone()))
            }
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, TextSegment::Reference { .. })
    }
}

/// A parsed description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub segments: Vec<TextSegment>,
    /// One `MalformedMarker` per dropped `<>`.
    pub dropped_markers: Vec<ChartError>,
}

impl Narrative {
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut dropped_markers = Vec::new();

        let mut plain = String::new();
        // Start of text not yet copied into `plain` or a segment
        let mut cursor = 0usize;
        let mut open: Option<usize> = None;

        // '<' and '>' are ASCII, so their byte offsets are char boundaries
        for (i, b) in text.bytes().enumerate() {
            match b {
                b'<' => open = Some(i),
                b'>' => {
                    let Some(start) = open.take() else {
                        continue;
                    };
                    plain.push_str(&text[cursor..start]);
                    let name = &text[start + 1..i];
                    if name.is_empty() {
                        debug!("Dropping empty marker at byte {}", start);
                        dropped_markers.push(ChartError::MalformedMarker { offset: start });
                    } else {
                        segments.push(TextSegment::Plain(std::mem::take(&mut plain)));
                        segments.push(TextSegment::Reference {
                            display_name: name.to_string(),
                            target: name.to_string(),
                        });
                    }
                    cursor = i + 1;
                }
                _ => {}
            }
        }
        plain.push_str(&text[cursor..]);
        segments.push(TextSegment::Plain(plain));

        Self {
            segments,
            dropped_markers,
        }
    }

    /// The readable text: plain segments and reference names joined in order.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(TextSegment::text).collect()
    }

    /// Reference targets in order of appearance (duplicates kept).
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            TextSegment::Reference { target, .. } => Some(target.as_str()),
            TextSegment::Plain(_) => None,
        })
    }
}

/// Split `text` into plain and reference segments.
pub fn annotate(text: &str) -> Vec<TextSegment> {
    Narrative::parse(text).segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> TextSegment {
        TextSegment::Plain(s.to_string())
    }

    fn reference(s: &str) -> TextSegment {
        TextSegment::Reference {
            display_name: s.to_string(),
            target: s.to_string(),
        }
    }

    #[test]
    fn splits_markers_in_order() {
        let n = Narrative::parse("See <Orion> and <Lyra> tonight");
        assert_eq!(
            n.segments,
            vec![
                plain("See "),
                reference("Orion"),
                plain(" and "),
                reference("Lyra"),
                plain(" tonight"),
            ]
        );
        assert_eq!(n.plain_text(), "See Orion and Lyra tonight");
        assert_eq!(n.references().collect::<Vec<_>>(), vec!["Orion", "Lyra"]);
        assert!(n.dropped_markers.is_empty());
    }

    #[test]
    fn no_markers_is_single_plain() {
        let text = "Orion is a prominent constellation on the celestial equator.";
        assert_eq!(annotate(text), vec![plain(text)]);
        assert_eq!(annotate(""), vec![plain("")]);
    }

    #[test]
    fn adjacent_and_edge_markers_emit_empty_plain() {
        assert_eq!(
            annotate("<Canis Major><Canis Minor>"),
            vec![
                plain(""),
                reference("Canis Major"),
                plain(""),
                reference("Canis Minor"),
                plain(""),
            ]
        );
    }

    #[test]
    fn empty_marker_is_dropped() {
        let n = Narrative::parse("<>");
        assert_eq!(n.segments, vec![plain("")]);
        assert_eq!(n.plain_text(), "");
        assert_eq!(n.dropped_markers, vec![ChartError::MalformedMarker { offset: 0 }]);

        let n = Narrative::parse("near <> <Taurus>");
        assert_eq!(n.segments, vec![plain("near  "), reference("Taurus"), plain("")]);
        assert_eq!(n.plain_text(), "near  Taurus");
    }

    #[test]
    fn narratives_compare_with_their_diagnostics() {
        fn assert_total_eq<T: Eq>(_: &T) {}
        let a = Narrative::parse("see <> and <Lyra>");
        assert_total_eq(&a);
        assert_eq!(a, Narrative::parse("see <> and <Lyra>"));
        assert_ne!(a, Narrative::parse("see  and <Lyra>"));
    }

    #[test]
    fn nested_open_bracket_breaks_outer_marker() {
        assert_eq!(
            annotate("a <b <Cygnus> c"),
            vec![plain("a <b "), reference("Cygnus"), plain(" c")]
        );
    }

    #[test]
    fn unbalanced_brackets_stay_plain() {
        assert_eq!(annotate("x > y"), vec![plain("x > y")]);
        assert_eq!(annotate("x < y"), vec![plain("x < y")]);
        assert_eq!(
            annotate("<Lyra> >"),
            vec![plain(""), reference("Lyra"), plain(" >")]
        );
    }

    #[test]
    fn handles_multibyte_text() {
        let n = Narrative::parse("Bright β star near <Boötes>, see also <Coma Berenices>…");
        assert_eq!(
            n.references().collect::<Vec<_>>(),
            vec!["Boötes", "Coma Berenices"]
        );
        assert_eq!(n.plain_text(), "Bright β star near Boötes, see also Coma Berenices…");
    }

    #[test]
    fn reference_carries_navigation_action() {
        let segs = annotate("Next to <Perseus>");
        assert_eq!(segs[0].action(), None);
        assert_eq!(
            segs[1].action(),
            Some(NavigationAction::SelectConstellation("Perseus".to_string()))
        );
        assert!(segs[1].is_reference());
    }
}

//! Rich-text run splitter
//!
//! Splits a paragraph into [`StyledRun`]s. Exact bold phrases are emitted as
//! bold runs, the `{day}{suffix}` ordinal marker is emitted as a day run
//! followed by a superscript suffix run, and everything else is emitted as
//! plain word runs (a word plus its trailing whitespace).
//!
//! At any offset a bold phrase wins over the ordinal marker, phrases are
//! tried in the order given, and a marker nested inside a bold phrase still
//! gets its superscript suffix (bold as well). The run sequence is
//! line-agnostic: wrapping is left to the renderers.

use transmittal_ast::{SessionDate, StyledRun};

/// The `{day}{suffix}` pair whose suffix is raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMarker {
    pub day: String,
    pub suffix: String,
}

impl SuffixMarker {
    pub fn new(day: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            suffix: suffix.into(),
        }
    }

    /// Marker for a session date (`"N/A"` with no suffix for the sentinel)
    pub fn from_session(date: &SessionDate) -> Self {
        Self::new(date.day_text(), date.suffix_text())
    }

    /// The literal text searched for in the template
    pub fn literal(&self) -> String {
        format!("{}{}", self.day, self.suffix)
    }

    fn push_runs(&self, bold: bool, runs: &mut Vec<StyledRun>) {
        runs.push(StyledRun::emphasized(self.day.clone(), bold));
        if !self.suffix.is_empty() {
            runs.push(StyledRun::superscript(self.suffix.clone(), bold));
        }
    }
}

/// Splits paragraphs into styled runs
#[derive(Debug, Clone, Default)]
pub struct RunSplitter {
    bold_phrases: Vec<String>,
    marker: Option<SuffixMarker>,
}

impl RunSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a phrase to render bold; earlier phrases take priority
    pub fn bold(mut self, phrase: impl Into<String>) -> Self {
        let phrase = phrase.into();
        if !phrase.is_empty() {
            self.bold_phrases.push(phrase);
        }
        self
    }

    /// Set the ordinal marker whose suffix is raised
    pub fn with_marker(mut self, marker: SuffixMarker) -> Self {
        if !marker.day.is_empty() {
            self.marker = Some(marker);
        }
        self
    }

    /// Split a template into runs
    pub fn split(&self, template: &str) -> Vec<StyledRun> {
        let mut runs = Vec::new();
        let mut pos = 0;

        while pos < template.len() {
            let rest = &template[pos..];

            if let Some(phrase) = self.bold_at(rest) {
                self.push_emphasized(phrase, &mut runs);
                pos += phrase.len();
            } else if let Some(marker) = self.marker_at(rest) {
                marker.push_runs(false, &mut runs);
                pos += marker.literal().len();
            } else {
                let len = self.plain_len(rest);
                runs.push(StyledRun::plain(&rest[..len]));
                pos += len;
            }
        }

        runs
    }

    fn bold_at(&self, rest: &str) -> Option<&str> {
        self.bold_phrases
            .iter()
            .find(|phrase| rest.starts_with(phrase.as_str()))
            .map(String::as_str)
    }

    fn marker_at(&self, rest: &str) -> Option<&SuffixMarker> {
        self.marker
            .as_ref()
            .filter(|marker| rest.starts_with(&marker.literal()))
    }

    fn candidate_at(&self, rest: &str) -> bool {
        self.bold_at(rest).is_some() || self.marker_at(rest).is_some()
    }

    /// Length of the plain run starting at `rest`: one word and the
    /// whitespace after it, cut short where a phrase or marker begins
    fn plain_len(&self, rest: &str) -> usize {
        let mut chars = rest.char_indices();
        let mut in_space = match chars.next() {
            Some((_, first)) => first.is_whitespace(),
            None => return 0,
        };

        for (i, ch) in chars {
            if self.candidate_at(&rest[i..]) {
                return i;
            }
            if ch.is_whitespace() {
                in_space = true;
            } else if in_space {
                return i;
            }
        }

        rest.len()
    }

    /// Emit a bold phrase, raising any marker suffix inside it
    fn push_emphasized(&self, phrase: &str, runs: &mut Vec<StyledRun>) {
        let Some(marker) = &self.marker else {
            runs.push(StyledRun::bold(phrase));
            return;
        };

        let literal = marker.literal();
        let mut rest = phrase;
        while let Some(at) = rest.find(&literal) {
            if at > 0 {
                runs.push(StyledRun::bold(&rest[..at]));
            }
            marker.push_runs(true, runs);
            rest = &rest[at + literal.len()..];
        }
        if !rest.is_empty() {
            runs.push(StyledRun::bold(rest));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transmittal_ast::{plain_text, RunStyle};

    fn marker_21st() -> SuffixMarker {
        SuffixMarker::new("21", "st")
    }

    #[test]
    fn test_plain_words_keep_whitespace() {
        let runs = RunSplitter::new().split("for your  information.");
        let texts: Vec<_> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["for ", "your  ", "information."]);
        assert!(runs.iter().all(|r| r.style == RunStyle::Plain));
    }

    #[test]
    fn test_bold_phrase() {
        let runs = RunSplitter::new()
            .bold("Ordinance No. 12")
            .split("a copy of Ordinance No. 12, entitled");
        assert!(runs.contains(&StyledRun::bold("Ordinance No. 12")));
        assert_eq!(plain_text(&runs), "a copy of Ordinance No. 12, entitled");
    }

    #[test]
    fn test_marker_outside_bold() {
        let runs = RunSplitter::new()
            .with_marker(marker_21st())
            .split("on the 21st day");
        assert_eq!(
            runs,
            vec![
                StyledRun::plain("on "),
                StyledRun::plain("the "),
                StyledRun::plain("21"),
                StyledRun::superscript("st", false),
                StyledRun::plain(" "),
                StyledRun::plain("day"),
            ]
        );
    }

    #[test]
    fn test_marker_nested_in_bold_phrase() {
        let runs = RunSplitter::new()
            .bold("21st day of January 2024")
            .bold("January")
            .with_marker(marker_21st())
            .split("held on the 21st day of January 2024.");
        assert!(runs.contains(&StyledRun::bold("21")));
        assert!(runs.contains(&StyledRun::superscript("st", true)));
        assert!(runs.contains(&StyledRun::bold(" day of January 2024")));
        assert_eq!(runs.last(), Some(&StyledRun::plain(".")));
    }

    #[test]
    fn test_bold_wins_over_marker_at_same_offset() {
        let runs = RunSplitter::new()
            .bold("21st")
            .with_marker(marker_21st())
            .split("21st");
        // The phrase is consumed as bold; the suffix is still raised inside it
        assert_eq!(
            runs,
            vec![StyledRun::bold("21"), StyledRun::superscript("st", true)]
        );
    }

    #[test]
    fn test_phrase_priority_follows_input_order() {
        let runs = RunSplitter::new()
            .bold("January")
            .bold("January 2024")
            .split("January 2024");
        assert_eq!(runs[0], StyledRun::bold("January"));
    }

    #[test]
    fn test_phrase_starting_mid_word() {
        let runs = RunSplitter::new()
            .bold("Resolution No. 3")
            .split("(Resolution No. 3)");
        assert_eq!(runs[0], StyledRun::plain("("));
        assert_eq!(runs[1], StyledRun::bold("Resolution No. 3"));
        assert_eq!(runs[2], StyledRun::plain(")"));
    }

    #[test]
    fn test_sentinel_marker_has_no_superscript() {
        let marker = SuffixMarker::from_session(&SessionDate::Unknown);
        let runs = RunSplitter::new()
            .with_marker(marker)
            .split("on the N/A day of");
        assert!(runs.iter().all(|r| !r.is_superscript()));
        assert!(runs.contains(&StyledRun::plain("N/A")));
    }

    #[test]
    fn test_empty_phrases_ignored() {
        let runs = RunSplitter::new()
            .bold("")
            .with_marker(SuffixMarker::new("", ""))
            .split("abc");
        assert_eq!(runs, vec![StyledRun::plain("abc")]);
    }

    #[test]
    fn test_lossless_concatenation() {
        let templates = [
            "",
            " ",
            "Respectfully transmitting herewith a copy of Ordinance No. 2024-017, approved during the Regular Session held on the 21st day of January 2024, entitled:",
            "21st21st 21st",
            "Mañana, el 1st día … año 2024 😀 final",
            "  leading and trailing  ",
            "January January 2024 2024",
            "tabs\tand\nnewlines 21st\n",
            "N/A day of  , N/A",
        ];
        let splitters = [
            RunSplitter::new(),
            RunSplitter::new().with_marker(marker_21st()),
            RunSplitter::new()
                .bold("Ordinance No. 2024-017")
                .bold("21st day of January 2024")
                .bold("January")
                .bold("2024")
                .with_marker(marker_21st()),
            RunSplitter::new()
                .bold("2024")
                .bold("día")
                .with_marker(SuffixMarker::new("1", "st")),
            RunSplitter::new()
                .bold("N/A day of  ")
                .with_marker(SuffixMarker::from_session(&SessionDate::Unknown)),
        ];

        for template in templates {
            for splitter in &splitters {
                let runs = splitter.split(template);
                assert_eq!(plain_text(&runs), template, "template {:?}", template);
                assert!(runs.iter().all(|r| !r.text.is_empty()));
            }
        }
    }
}

use super::fields::Name;

/// Which entries of a directory are currently displayed.
///
/// Index-based commands resolve against the displayed entries, so changing
/// the filter changes what "index 1" means.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// Name contains at least one of the keywords as a whole word, ignoring case.
    NameContains(Vec<String>),
}

impl Filter {
    pub fn name_contains<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::NameContains(keywords.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, name: &Name) -> bool {
        match self {
            Filter::All => true,
            Filter::NameContains(keywords) => keywords
                .iter()
                .any(|keyword| contains_word_ignore_case(name.as_str(), keyword)),
        }
    }
}

fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return false;
    }
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    #[test]
    fn all_matches_everything() {
        assert!(Filter::All.matches(&name("Anything")));
    }

    #[test]
    fn keywords_match_whole_words_ignoring_case() {
        let filter = Filter::name_contains(["villa"]);
        assert!(filter.matches(&name("Sunny Villa")));
        assert!(!filter.matches(&name("Villas Galore")));
        assert!(!filter.matches(&name("Sunny Condo")));
    }

    #[test]
    fn any_keyword_is_enough() {
        let filter = Filter::name_contains(["condo", "SUNNY"]);
        assert!(filter.matches(&name("Sunny Villa")));
        assert!(filter.matches(&name("Pinnacle Condo")));
    }

    #[test]
    fn empty_keyword_list_matches_nothing() {
        let filter = Filter::name_contains(Vec::<String>::new());
        assert!(!filter.matches(&name("Sunny Villa")));
    }
}

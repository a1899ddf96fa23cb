//! Heuristic part-of-speech tagging over a token sequence
//!
//! Tags come from three layers: token shape (hashtags, mentions, URLs,
//! punctuation, numbers), a closed-class lexicon plus the irregular-verb
//! table of the lemma rules, and suffix patterns. A second pass then looks at
//! each token's neighbours, which is why tagging works on the whole phrase.

use crate::nlp::lemma_rules::LemmaRules;
use crate::types::{PosTag, TaggedToken, TokenShape, WordCategory};

/// A rule-based tagger producing coarse universal tags
#[derive(Debug, Clone, Copy, Default)]
pub struct PosTagger;

impl PosTagger {
    /// Create a new tagger
    pub fn new() -> Self {
        Self
    }

    /// Tag a tokenized phrase
    pub fn tag<S: AsRef<str>>(&self, tokens: &[S], rules: &LemmaRules) -> Vec<TaggedToken> {
        let mut tags: Vec<PosTag> = tokens
            .iter()
            .map(|t| self.lexical_tag(t.as_ref(), rules))
            .collect();

        self.apply_context(tokens, &mut tags);

        tokens
            .iter()
            .zip(tags)
            .map(|(t, pos)| TaggedToken::new(t.as_ref(), pos))
            .collect()
    }

    /// Tag a single token without context
    pub fn lexical_tag(&self, token: &str, rules: &LemmaRules) -> PosTag {
        let shape = TokenShape::of(token);
        if shape.is_atomic() {
            return PosTag::Other;
        }
        if shape == TokenShape::Punctuation {
            return PosTag::Punctuation;
        }

        let lower = token.to_lowercase();

        if lower
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Numeral;
        }

        if is_number_word(&lower) {
            return PosTag::Numeral;
        }

        if let Some(pos) = function_word_pos(&lower) {
            return pos;
        }

        if rules.is_exception(&lower, WordCategory::Verb)
            && !rules.is_exception(&lower, WordCategory::Noun)
        {
            return PosTag::Verb;
        }

        suffix_pos(&lower)
    }

    /// Correct lexical guesses using neighbouring tags
    fn apply_context<S: AsRef<str>>(&self, tokens: &[S], tags: &mut [PosTag]) {
        for i in 1..tags.len() {
            let prev_token = tokens[i - 1].as_ref().to_lowercase();
            let prev = tags[i - 1];
            let current = tags[i];
            let next = tags.get(i + 1).copied();

            // "to make", "will drill", "can run"
            if (prev_token == "to" || is_modal(&prev_token))
                && matches!(current, PosTag::Noun | PosTag::Adjective)
                && !has_noun_suffix(tokens[i].as_ref())
            {
                tags[i] = PosTag::Verb;
                continue;
            }

            // "they drill", "we protest"
            if prev == PosTag::Pronoun
                && is_subject_pronoun(&prev_token)
                && current == PosTag::Noun
                && !has_noun_suffix(tokens[i].as_ref())
            {
                tags[i] = PosTag::Verb;
                continue;
            }

            // "the conducted drills" reads adjectival, "the running" nominal
            if prev == PosTag::Determiner && current == PosTag::Verb {
                tags[i] = if next == Some(PosTag::Noun) {
                    PosTag::Adjective
                } else {
                    PosTag::Noun
                };
            }
        }
    }
}

fn function_word_pos(lower: &str) -> Option<PosTag> {
    let pos = match lower {
        // Determiners
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
        | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no" | "all"
        | "both" | "another" => PosTag::Determiner,
        // Conjunctions
        "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while" | "though"
        | "although" | "unless" | "until" | "since" | "whether" => PosTag::Conjunction,
        // Adpositions
        "of" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as" | "into"
        | "like" | "through" | "after" | "over" | "between" | "out" | "against" | "during"
        | "without" | "before" | "under" | "around" | "among" | "across" | "toward"
        | "towards" | "upon" | "within" | "via" => PosTag::Adposition,
        // Pronouns
        "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us" | "them"
        | "myself" | "yourself" | "himself" | "herself" | "itself" | "ourselves"
        | "themselves" | "who" | "whom" | "what" | "which" | "mine" | "yours" | "ours"
        | "theirs" | "someone" | "somebody" | "something" | "everyone" | "everybody"
        | "everything" | "anyone" | "anybody" | "anything" | "nobody" | "nothing" => {
            PosTag::Pronoun
        }
        // Particles
        "to" | "n't" | "'s" => PosTag::Particle,
        // Adverbs that suffixes don't catch
        "not" | "very" | "too" | "also" | "just" | "never" | "always" | "often" | "still"
        | "already" | "again" | "soon" | "here" | "there" | "now" | "then" | "when" | "where"
        | "why" | "how" | "even" | "ever" | "almost" | "away" | "ago" | "indeed"
        | "everywhere" | "anywhere" | "somewhere" | "nowhere" | "anyway" => PosTag::Adverb,
        // Auxiliaries and modals
        "be" | "do" | "have" | "will" | "would" | "can" | "could" | "shall" | "should"
        | "may" | "might" | "must" => PosTag::Verb,
        _ => return None,
    };
    Some(pos)
}

fn suffix_pos(lower: &str) -> PosTag {
    // Plural nouns carry their suffix on the singular ("provocations")
    let base = lower
        .strip_suffix('s')
        .filter(|b| b.len() > 3 && !b.ends_with('s'))
        .unwrap_or(lower);

    if has_noun_suffix(base) {
        return PosTag::Noun;
    }

    if ends_with_any(
        lower,
        &["ful", "less", "ous", "ive", "able", "ible", "ical", "ish", "ary"],
    ) || (lower.len() > 4 && ends_with_any(lower, &["al", "ic"]))
    {
        return PosTag::Adjective;
    }

    if lower.len() > 4
        && ends_with_any(lower, &["ing", "ed", "ize", "ise", "ify"])
        && !is_inflection_lookalike(lower)
    {
        return PosTag::Verb;
    }

    if lower.len() > 4 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }

    // Default to noun (most content words are nouns)
    PosTag::Noun
}

/// Spelled-out numbers
fn is_number_word(lower: &str) -> bool {
    matches!(
        lower,
        "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine" | "ten"
            | "eleven" | "twelve" | "twenty" | "thirty" | "forty" | "fifty" | "hundred"
            | "hundreds" | "thousand" | "thousands" | "million" | "millions" | "billion"
            | "billions"
    )
}

/// Nouns that only look like `-ing` / `-ed` verb forms
fn is_inflection_lookalike(lower: &str) -> bool {
    let base = lower.strip_suffix('s').unwrap_or(lower);
    matches!(
        base,
        "morning" | "evening" | "thing" | "string" | "spring" | "ceiling" | "wedding"
            | "pudding" | "sibling" | "darling" | "offspring" | "beijing" | "kindred"
            | "hatred" | "sacred" | "naked" | "wicked" | "rugged"
    ) || lower.strip_suffix("ed").is_some_and(|stem| !has_vowel(stem))
}

fn has_vowel(word: &str) -> bool {
    word.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

fn has_noun_suffix(word: &str) -> bool {
    let lower = word.to_lowercase();
    lower.len() > 4
        && ends_with_any(
            &lower,
            &["tion", "sion", "ness", "ment", "ity", "ism", "ist", "ance", "ence", "ship"],
        )
}

fn is_modal(word: &str) -> bool {
    matches!(
        word,
        "will" | "would" | "can" | "could" | "shall" | "should" | "may" | "might" | "must"
    )
}

fn is_subject_pronoun(word: &str) -> bool {
    matches!(word, "i" | "you" | "we" | "they" | "he" | "she")
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(phrase: &[&str]) -> Vec<PosTag> {
        PosTagger::new()
            .tag(phrase, &LemmaRules::english())
            .into_iter()
            .map(|t| t.pos)
            .collect()
    }

    #[test]
    fn test_shapes_are_not_lemmatizable() {
        assert_eq!(
            tags(&["#taiwan", "@who", "https://t.co/x", ",", "42"]),
            vec![
                PosTag::Other,
                PosTag::Other,
                PosTag::Other,
                PosTag::Punctuation,
                PosTag::Numeral
            ]
        );
    }

    #[test]
    fn test_pos_guessing() {
        let tagger = PosTagger::new();
        let rules = LemmaRules::english();

        assert_eq!(tagger.lexical_tag("beautiful", &rules), PosTag::Adjective);
        assert_eq!(tagger.lexical_tag("massive", &rules), PosTag::Adjective);
        assert_eq!(tagger.lexical_tag("serious", &rules), PosTag::Adjective);
        assert_eq!(tagger.lexical_tag("conducted", &rules), PosTag::Verb);
        assert_eq!(tagger.lexical_tag("quickly", &rules), PosTag::Adverb);
        assert_eq!(tagger.lexical_tag("information", &rules), PosTag::Noun);
        assert_eq!(tagger.lexical_tag("provocations", &rules), PosTag::Noun);
        assert_eq!(tagger.lexical_tag("drills", &rules), PosTag::Noun);
        assert_eq!(tagger.lexical_tag("made", &rules), PosTag::Verb);
        assert_eq!(tagger.lexical_tag("us", &rules), PosTag::Pronoun);
        assert_eq!(tagger.lexical_tag("the", &rules), PosTag::Determiner);
        assert_eq!(tagger.lexical_tag("around", &rules), PosTag::Adposition);
    }

    #[test]
    fn test_indefinite_pronouns_and_number_words() {
        let tagger = PosTagger::new();
        let rules = LemmaRules::english();

        for word in ["everything", "anything", "everyone", "anybody", "somebody"] {
            assert_eq!(tagger.lexical_tag(word, &rules), PosTag::Pronoun, "{word}");
        }
        assert_eq!(tagger.lexical_tag("indeed", &rules), PosTag::Adverb);
        assert_eq!(tagger.lexical_tag("hundred", &rules), PosTag::Numeral);
        assert_eq!(tagger.lexical_tag("one", &rules), PosTag::Numeral);
    }

    #[test]
    fn test_ing_ed_nouns_are_not_verbs() {
        let tagger = PosTagger::new();
        let rules = LemmaRules::english();

        for word in ["morning", "evenings", "things", "beijing", "hatred"] {
            assert_eq!(tagger.lexical_tag(word, &rules), PosTag::Noun, "{word}");
        }
        assert_eq!(tagger.lexical_tag("agreed", &rules), PosTag::Verb);
        assert_eq!(tags(&["to", "proceed"])[1], PosTag::Verb);
    }

    #[test]
    fn test_context_after_to_and_modals() {
        assert_eq!(tags(&["to", "drill"])[1], PosTag::Verb);
        assert_eq!(tags(&["will", "protest"])[1], PosTag::Verb);
        assert_eq!(tags(&["to", "information"])[1], PosTag::Noun);
    }

    #[test]
    fn test_context_after_subject_pronoun() {
        assert_eq!(tags(&["they", "drill"])[1], PosTag::Verb);
        assert_eq!(tags(&["us", "drill"])[1], PosTag::Noun);
    }

    #[test]
    fn test_context_after_determiner() {
        assert_eq!(tags(&["the", "conducted", "drill"])[1], PosTag::Adjective);
        assert_eq!(tags(&["the", "running"])[1], PosTag::Noun);
    }

    #[test]
    fn test_tweet_phrase() {
        let phrase = [
            "rt", "#latest", "when", "the", "pla", "conducted", "massive", "drills", "around",
            "#taiwan",
        ];
        assert_eq!(
            tags(&phrase),
            vec![
                PosTag::Noun,
                PosTag::Other,
                PosTag::Adverb,
                PosTag::Determiner,
                PosTag::Noun,
                PosTag::Verb,
                PosTag::Adjective,
                PosTag::Noun,
                PosTag::Adposition,
                PosTag::Other
            ]
        );
    }

    #[test]
    fn test_empty_phrase() {
        let empty: &[&str] = &[];
        assert!(PosTagger::new().tag(empty, &LemmaRules::english()).is_empty());
    }
}

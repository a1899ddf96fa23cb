//! Lemma rules: irregular-form tables and suffix morphology
//!
//! Reduction for a word in a given category tries, in order:
//!
//! 1. the category's exception table (`made` → `make`, `children` → `child`)
//! 2. with a vocabulary loaded, every morphological substitution for the
//!    category, keeping the shortest candidate that is a known base form
//! 3. without a vocabulary, heuristic suffix stripping with `e` restoration
//!    and consonant undoubling
//!
//! Words that match nothing come back unchanged.

use crate::errors::{PreprocessError, Result};
use crate::types::WordCategory;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// Suffix substitutions tried against the vocabulary, per category
const NOUN_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_SUBSTITUTIONS: &[(&str, &str)] =
    &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("crises", "crisis"),
    ("analyses", "analysis"),
    ("theses", "thesis"),
    ("phenomena", "phenomenon"),
    ("criteria", "criterion"),
    ("data", "datum"),
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("made", "make"),
    ("said", "say"),
    ("took", "take"),
    ("taken", "take"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("left", "leave"),
    ("felt", "feel"),
    ("kept", "keep"),
    ("began", "begin"),
    ("begun", "begin"),
    ("brought", "bring"),
    ("bought", "buy"),
    ("built", "build"),
    ("ran", "run"),
    ("sent", "send"),
    ("spent", "spend"),
    ("stood", "stand"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("met", "meet"),
    ("paid", "pay"),
    ("lost", "lose"),
    ("led", "lead"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("fought", "fight"),
    ("won", "win"),
    ("sold", "sell"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("broke", "break"),
    ("broken", "break"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("caught", "catch"),
    ("taught", "teach"),
    ("sought", "seek"),
    ("shot", "shoot"),
    ("struck", "strike"),
    ("understood", "understand"),
    ("became", "become"),
    ("meant", "mean"),
    ("heard", "hear"),
    ("sped", "speed"),
    ("used", "use"),
    ("using", "use"),
    ("uses", "use"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("farther", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

const ADVERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "well"),
    ("best", "well"),
    ("worse", "badly"),
    ("worst", "badly"),
    ("further", "far"),
];

/// Lexical model mapping an inflected word and category to its base form
#[derive(Debug, Clone, Default)]
pub struct LemmaRules {
    exceptions: FxHashMap<(WordCategory, String), String>,
    vocabulary: Option<FxHashSet<String>>,
}

impl LemmaRules {
    /// Rules with no exceptions and no vocabulary (heuristics only)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in English irregular forms plus suffix heuristics
    pub fn english() -> Self {
        let mut rules = Self::empty();
        let tables = [
            (WordCategory::Noun, NOUN_EXCEPTIONS),
            (WordCategory::Verb, VERB_EXCEPTIONS),
            (WordCategory::Adjective, ADJECTIVE_EXCEPTIONS),
            (WordCategory::Adverb, ADVERB_EXCEPTIONS),
        ];
        for (category, table) in tables {
            for (inflected, lemma) in table {
                rules.add_exception(category, *inflected, *lemma);
            }
        }
        rules
    }

    /// Register an irregular form
    pub fn add_exception(
        &mut self,
        category: WordCategory,
        inflected: impl Into<String>,
        lemma: impl Into<String>,
    ) {
        self.exceptions
            .insert((category, inflected.into()), lemma.into());
    }

    /// Load exceptions from a `category<TAB>inflected<TAB>lemma` file.
    ///
    /// Categories use WordNet codes (`n`, `v`, `a`/`s`, `r`). Blank lines and
    /// lines starting with `#` are ignored.
    pub fn load_exceptions(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let resource = format!("lemma exceptions {}", path.display());
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PreprocessError::resource_unavailable(&resource, e.to_string()))?;

        let mut loaded = 0;
        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            let &[code, inflected, lemma] = fields.as_slice() else {
                return Err(PreprocessError::resource_unavailable(
                    &resource,
                    format!("line {}: expected 3 tab-separated fields", line_no + 1),
                ));
            };
            let category = WordCategory::from_code(code).ok_or_else(|| {
                PreprocessError::resource_unavailable(
                    &resource,
                    format!("line {}: unknown category '{code}'", line_no + 1),
                )
            })?;
            self.add_exception(category, inflected, lemma);
            loaded += 1;
        }

        log::debug!("Loaded {loaded} lemma exceptions from {}", path.display());
        Ok(loaded)
    }

    /// Use a vocabulary of known base forms for candidate checking
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Load a one-word-per-line vocabulary file
    pub fn load_vocabulary(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PreprocessError::resource_unavailable(
                format!("lemma vocabulary {}", path.display()),
                e.to_string(),
            )
        })?;
        let words: FxHashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        let count = words.len();
        self.vocabulary.get_or_insert_with(FxHashSet::default).extend(words);
        log::debug!("Loaded {count} vocabulary entries from {}", path.display());
        Ok(count)
    }

    /// Check if `word` is an irregular form in `category`
    pub fn is_exception(&self, word: &str, category: WordCategory) -> bool {
        self.exceptions.contains_key(&(category, word.to_string()))
    }

    /// Check whether a vocabulary is loaded
    pub fn has_vocabulary(&self) -> bool {
        self.vocabulary.is_some()
    }

    /// Number of registered irregular forms
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Reduce `word` to its base form for `category`
    pub fn lemmatize(&self, word: &str, category: WordCategory) -> String {
        if let Some(lemma) = self.exceptions.get(&(category, word.to_string())) {
            return lemma.clone();
        }

        match &self.vocabulary {
            Some(vocabulary) => morphy(word, category, vocabulary),
            None => heuristic(word, category),
        }
    }
}

fn substitutions(category: WordCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        WordCategory::Noun => NOUN_SUBSTITUTIONS,
        WordCategory::Verb => VERB_SUBSTITUTIONS,
        WordCategory::Adjective => ADJECTIVE_SUBSTITUTIONS,
        WordCategory::Adverb => &[],
    }
}

/// Vocabulary-checked reduction: shortest known candidate wins
fn morphy(word: &str, category: WordCategory, vocabulary: &FxHashSet<String>) -> String {
    let mut best: Option<String> = vocabulary.contains(word).then(|| word.to_string());

    for (suffix, replacement) in substitutions(category) {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        let candidate = format!("{stem}{replacement}");
        if !vocabulary.contains(&candidate) {
            continue;
        }
        if best.as_ref().map_or(true, |b| candidate.len() < b.len()) {
            best = Some(candidate);
        }
    }

    best.unwrap_or_else(|| word.to_string())
}

/// Suffix rules used when no vocabulary is available
fn heuristic(word: &str, category: WordCategory) -> String {
    if !word.chars().all(|c| c.is_ascii_lowercase() || c == '\'' || c == '-') {
        return word.to_string();
    }
    match category {
        WordCategory::Noun => noun_heuristic(word),
        WordCategory::Verb => verb_heuristic(word),
        WordCategory::Adjective => adjective_heuristic(word),
        WordCategory::Adverb => word.to_string(),
    }
}

/// Nouns whose singular and plural are the same word
const INVARIANT_PLURALS: &[&str] = &["series", "species"];

/// Words ending in `eed` whose `ee` belongs to the base (`proceed`, not `agreed`)
const EED_BASES: &[&str] = &[
    "need", "feed", "seed", "weed", "deed", "heed", "reed", "bleed", "breed", "creed", "greed",
    "speed", "steed", "tweed", "indeed",
];

fn noun_heuristic(word: &str) -> String {
    if word.len() <= 3 || INVARIANT_PLURALS.iter().any(|w| word.ends_with(w)) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() > 1 {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with('s') && !ends_with_any(word, &["ss", "us", "is", "ics", "news"]) {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn verb_heuristic(word: &str) -> String {
    if word.len() <= 3 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        if stem.len() > 1 {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = word.strip_suffix("eed") {
        if word.ends_with("ceed") || EED_BASES.contains(&word) {
            return word.to_string();
        }
        return format!("{stem}ee");
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 3 && has_vowel(stem) {
                return restore_stem(stem);
            }
            return word.to_string();
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ends_with_any(stem, &["ch", "sh", "ss", "x", "z", "o"]) {
            return stem.to_string();
        }
    }
    if word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

fn adjective_heuristic(word: &str) -> String {
    for (suffix, min_stem) in [("iest", 2), ("ier", 2)] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= min_stem {
                return format!("{stem}y");
            }
        }
    }
    for suffix in ["est", "er"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            if stem.len() >= 2 && ends_with_double_consonant(stem) {
                return stem[..stem.len() - 1].to_string();
            }
        }
    }
    word.to_string()
}

/// Repair a stem left by removing `-ed` / `-ing`
/// (`creat` → `create`, `stopp` → `stop`, `hop` → `hope`)
fn restore_stem(stem: &str) -> String {
    if ends_with_any(stem, &["at", "bl", "iz", "is", "uc", "iv", "rg", "dg"]) {
        return format!("{stem}e");
    }
    if ends_with_double_consonant(stem) && !ends_with_any(stem, &["ll", "ss", "zz", "ff"]) {
        return stem[..stem.len() - 1].to_string();
    }
    if measure(stem) == 1 && ends_cvc(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}

fn is_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(chars, i - 1),
        _ => true,
    }
}

fn has_vowel(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    (0..chars.len()).any(|i| !is_consonant(&chars, i))
}

fn ends_with_double_consonant(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    n >= 2 && chars[n - 1] == chars[n - 2] && is_consonant(&chars, n - 1)
}

/// Number of vowel-consonant sequences in the stem
fn measure(stem: &str) -> usize {
    let chars: Vec<char> = stem.chars().collect();
    let mut count = 0;
    let mut prev_vowel = false;
    for i in 0..chars.len() {
        let vowel = !is_consonant(&chars, i);
        if prev_vowel && !vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    count
}

/// consonant-vowel-consonant ending, last consonant not w/x/y
fn ends_cvc(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    n >= 3
        && is_consonant(&chars, n - 3)
        && !is_consonant(&chars, n - 2)
        && is_consonant(&chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english(word: &str, category: WordCategory) -> String {
        LemmaRules::english().lemmatize(word, category)
    }

    #[test]
    fn test_noun_plurals() {
        assert_eq!(english("drills", WordCategory::Noun), "drill");
        assert_eq!(english("provocations", WordCategory::Noun), "provocation");
        assert_eq!(english("studies", WordCategory::Noun), "study");
        assert_eq!(english("boxes", WordCategory::Noun), "box");
        assert_eq!(english("churches", WordCategory::Noun), "church");
        assert_eq!(english("leaves", WordCategory::Noun), "leaf");
        assert_eq!(english("children", WordCategory::Noun), "child");
    }

    #[test]
    fn test_noun_non_plurals_untouched() {
        assert_eq!(english("us", WordCategory::Noun), "us");
        assert_eq!(english("crisis", WordCategory::Noun), "crisis");
        assert_eq!(english("class", WordCategory::Noun), "class");
        assert_eq!(english("virus", WordCategory::Noun), "virus");
        assert_eq!(english("politics", WordCategory::Noun), "politics");
        assert_eq!(english("news", WordCategory::Noun), "news");
        assert_eq!(english("series", WordCategory::Noun), "series");
        assert_eq!(english("species", WordCategory::Noun), "species");
    }

    #[test]
    fn test_verb_inflections() {
        assert_eq!(english("conducted", WordCategory::Verb), "conduct");
        assert_eq!(english("made", WordCategory::Verb), "make");
        assert_eq!(english("running", WordCategory::Verb), "run");
        assert_eq!(english("created", WordCategory::Verb), "create");
        assert_eq!(english("hoping", WordCategory::Verb), "hope");
        assert_eq!(english("stopped", WordCategory::Verb), "stop");
        assert_eq!(english("looking", WordCategory::Verb), "look");
        assert_eq!(english("falling", WordCategory::Verb), "fall");
        assert_eq!(english("played", WordCategory::Verb), "play");
        assert_eq!(english("opened", WordCategory::Verb), "open");
        assert_eq!(english("studied", WordCategory::Verb), "study");
        assert_eq!(english("watches", WordCategory::Verb), "watch");
        assert_eq!(english("makes", WordCategory::Verb), "make");
        assert_eq!(english("was", WordCategory::Verb), "be");
    }

    #[test]
    fn test_eed_verbs() {
        assert_eq!(english("agreed", WordCategory::Verb), "agree");
        assert_eq!(english("freed", WordCategory::Verb), "free");
        assert_eq!(english("guaranteed", WordCategory::Verb), "guarantee");
        assert_eq!(english("agreeing", WordCategory::Verb), "agree");
        assert_eq!(english("proceed", WordCategory::Verb), "proceed");
        assert_eq!(english("exceed", WordCategory::Verb), "exceed");
        assert_eq!(english("succeed", WordCategory::Verb), "succeed");
        assert_eq!(english("need", WordCategory::Verb), "need");
        assert_eq!(english("bleed", WordCategory::Verb), "bleed");
        assert_eq!(english("proceeded", WordCategory::Verb), "proceed");
    }

    #[test]
    fn test_short_verbs_untouched() {
        assert_eq!(english("sing", WordCategory::Verb), "sing");
        assert_eq!(english("bed", WordCategory::Verb), "bed");
    }

    #[test]
    fn test_adjectives() {
        assert_eq!(english("better", WordCategory::Adjective), "good");
        assert_eq!(english("happiest", WordCategory::Adjective), "happy");
        assert_eq!(english("bigger", WordCategory::Adjective), "big");
        assert_eq!(english("massive", WordCategory::Adjective), "massive");
        assert_eq!(english("serious", WordCategory::Adjective), "serious");
    }

    #[test]
    fn test_adverbs_use_exceptions_only() {
        assert_eq!(english("better", WordCategory::Adverb), "well");
        assert_eq!(english("quickly", WordCategory::Adverb), "quickly");
    }

    #[test]
    fn test_non_word_tokens_untouched() {
        assert_eq!(english("#drills", WordCategory::Noun), "#drills");
        assert_eq!(english("c3pos", WordCategory::Noun), "c3pos");
    }

    #[test]
    fn test_vocabulary_mode_prefers_shortest_known_candidate() {
        let rules = LemmaRules::empty().with_vocabulary(["drill", "use", "us", "u", "leaf"]);

        assert_eq!(rules.lemmatize("drills", WordCategory::Noun), "drill");
        // `uses` → `use` (es→e) and `us` (s→"") are both known; shortest wins
        assert_eq!(rules.lemmatize("uses", WordCategory::Verb), "us");
        assert_eq!(rules.lemmatize("us", WordCategory::Noun), "u");
        assert_eq!(rules.lemmatize("leaves", WordCategory::Noun), "leaf");
        assert_eq!(rules.lemmatize("unknown", WordCategory::Noun), "unknown");
    }

    #[test]
    fn test_exceptions_beat_vocabulary() {
        let mut rules = LemmaRules::empty().with_vocabulary(["mad"]);
        rules.add_exception(WordCategory::Verb, "made", "make");
        assert_eq!(rules.lemmatize("made", WordCategory::Verb), "make");
        assert!(rules.is_exception("made", WordCategory::Verb));
        assert!(!rules.is_exception("made", WordCategory::Noun));
    }

    #[test]
    fn test_load_exceptions_file() {
        let path = std::env::temp_dir().join(format!(
            "tweet_preprocess_lemma_exc_{}.tsv",
            std::process::id()
        ));
        std::fs::write(&path, "# irregulars\nv\tsped\tspeed\nn\toxen\tox\n\n").unwrap();

        let mut rules = LemmaRules::empty();
        let loaded = rules.load_exceptions(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, 2);
        assert_eq!(rules.lemmatize("oxen", WordCategory::Noun), "ox");
        assert_eq!(rules.lemmatize("sped", WordCategory::Verb), "speed");
    }

    #[test]
    fn test_load_exceptions_rejects_bad_lines() {
        let path = std::env::temp_dir().join(format!(
            "tweet_preprocess_lemma_bad_{}.tsv",
            std::process::id()
        ));
        std::fs::write(&path, "q\tfoo\tbar\n").unwrap();

        let err = LemmaRules::empty().load_exceptions(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, PreprocessError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_stem_helpers() {
        assert_eq!(measure("tr"), 0);
        assert_eq!(measure("hop"), 1);
        assert_eq!(measure("conduct"), 2);
        assert!(ends_cvc("hop"));
        assert!(!ends_cvc("fix"));
        assert!(ends_with_double_consonant("stopp"));
        assert!(!ends_with_double_consonant("look"));
    }
}

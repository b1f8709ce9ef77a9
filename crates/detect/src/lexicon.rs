//! Static word lists and patterns for lexical scoring
//!
//! Membership is a tuning parameter, not a contract: the sets hold
//! high-frequency function words plus the vocabulary learners actually
//! type at a language school (cours, inscription, register, class).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Common French words (high frequency, distinctive)
pub(crate) static FRENCH_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "je", "tu", "il", "elle", "nous", "vous", "ils", "elles", "on",
        "le", "la", "les", "un", "une", "des", "du", "de", "au", "aux",
        "est", "sont", "être", "avoir", "fait", "faire", "suis", "es", "sommes", "êtes",
        "et", "ou", "mais", "donc", "car", "ni", "que", "qui", "quoi",
        "bonjour", "merci", "comment", "pourquoi", "quand", "où", "combien",
        "avec", "pour", "dans", "sur", "sous", "par", "sans", "chez",
        "ce", "cette", "ces", "cet", "mon", "ma", "mes", "ton", "ta", "tes",
        "ne", "pas", "plus", "jamais", "rien", "personne",
        "oui", "non", "bien", "très", "aussi", "encore", "déjà", "toujours",
        "cours", "français", "apprendre", "parler", "inscription", "information",
        "voudrais", "veux", "peux", "dois", "faut", "peut", "doit",
    ])
});

/// Common English words (high frequency, distinctive)
///
/// The bare auxiliaries (do, does, did) are left out: they show up in
/// the short English tails of Khmer-first messages and would outweigh
/// the Khmer script signal there, while English sentences that lead
/// with them almost always carry pronouns the set already covers.
pub(crate) static ENGLISH_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
        "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "its",
        "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had",
        "will", "would", "could", "should", "can", "may", "might",
        "and", "or", "but", "so", "because", "if", "when", "where", "what", "who", "how",
        "hello", "hi", "please", "thank", "thanks", "sorry", "yes", "no", "okay", "ok",
        "with", "for", "in", "on", "at", "to", "from", "by", "about", "into",
        "want", "need", "like", "know", "think", "see", "get", "make", "go", "come",
        "class", "course", "learn", "study", "speak", "information", "register",
    ])
});

/// French-specific accented characters (lowercase)
pub(crate) const FRENCH_ACCENTS: &[char] = &[
    'à', 'â', 'ä', 'é', 'è', 'ê', 'ë', 'ï', 'î', 'ô', 'ù', 'û', 'ü', 'ç', 'œ', 'æ',
];

/// Maximal runs of Latin letters, French accented letters included.
/// Elided forms split at the apostrophe ("d'ouverture" -> "d", "ouverture").
pub(crate) static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zàâäéèêëïîôùûüçœæ]+").expect("word pattern"));

/// French elisions: qu', l', d', c', j', n', s' directly before a word
pub(crate) static ELISION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(qu|l|d|c|j|n|s)'\w").expect("elision pattern"));

/// French article construction: "le <noun> de/du/des"
pub(crate) static ARTICLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\ble\s+\w+\s+(de|du|des)\b").expect("article pattern"));

/// Check lowercased text for French diacritics
pub(crate) fn has_french_accents(lowered: &str) -> bool {
    lowered.chars().any(|c| FRENCH_ACCENTS.contains(&c))
}

//! Static content tables: phrases, vocabulary, and glyphs per language.
//!
//! Lookup functions are total over the code enums, so a selected code always
//! yields a non-empty pool. Callers that parse user-supplied code strings
//! fall back to the default code when parsing fails.

use tui_lingo_types::{GlyphEntry, LanguageCode, PhraseEntry, ScriptCode, VocabEntry};

const ES_PHRASES: &[PhraseEntry] = &[
    PhraseEntry { text: "Buenos días, ¿cómo estás hoy?", translation: "Good morning, how are you today?" },
    PhraseEntry { text: "Me gustaría aprender más idiomas.", translation: "I would like to learn more languages." },
    PhraseEntry { text: "La vida es bella cuando hablas otro idioma.", translation: "Life is beautiful when you speak another language." },
    PhraseEntry { text: "Cada palabra es una nueva ventana al mundo.", translation: "Every word is a new window to the world." },
    PhraseEntry { text: "El conocimiento de idiomas abre puertas.", translation: "Knowledge of languages opens doors." },
];

const FR_PHRASES: &[PhraseEntry] = &[
    PhraseEntry { text: "Bonjour, comment allez-vous aujourd\u{2019}hui?", translation: "Hello, how are you today?" },
    PhraseEntry { text: "Apprendre une langue, c\u{2019}est vivre une autre vie.", translation: "Learning a language is living another life." },
    PhraseEntry { text: "Je voudrais parler français couramment.", translation: "I would like to speak French fluently." },
    PhraseEntry { text: "Chaque mot est une nouvelle aventure.", translation: "Every word is a new adventure." },
    PhraseEntry { text: "La langue est la clé de la culture.", translation: "Language is the key to culture." },
];

const JA_PHRASES: &[PhraseEntry] = &[
    PhraseEntry { text: "おはようございます。今日もよい一日を。", translation: "Good morning. Have a good day today." },
    PhraseEntry { text: "言語を学ぶことは文化を学ぶことです。", translation: "Learning a language is learning a culture." },
    PhraseEntry { text: "毎日少しずつ練習することが大切です。", translation: "It is important to practice little by little every day." },
    PhraseEntry { text: "あなたの夢は何ですか？", translation: "What is your dream?" },
];

const AR_PHRASES: &[PhraseEntry] = &[
    PhraseEntry { text: "صباح الخير، كيف حالك اليوم؟", translation: "Good morning, how are you today?" },
    PhraseEntry { text: "تعلم اللغة يفتح الأبواب.", translation: "Learning a language opens doors." },
    PhraseEntry { text: "كل كلمة جديدة هي نافذة على العالم.", translation: "Every new word is a window to the world." },
];

const DE_PHRASES: &[PhraseEntry] = &[
    PhraseEntry { text: "Guten Morgen, wie geht es Ihnen heute?", translation: "Good morning, how are you today?" },
    PhraseEntry { text: "Sprachen lernen macht das Leben reicher.", translation: "Learning languages makes life richer." },
    PhraseEntry { text: "Jedes Wort ist ein Schlüssel zur Welt.", translation: "Every word is a key to the world." },
    PhraseEntry { text: "Ich möchte fließend Deutsch sprechen.", translation: "I want to speak German fluently." },
];

const IT_PHRASES: &[PhraseEntry] = &[
    PhraseEntry { text: "Buongiorno, come stai oggi?", translation: "Good morning, how are you today?" },
    PhraseEntry { text: "Imparare una lingua è aprire una porta.", translation: "Learning a language is opening a door." },
    PhraseEntry { text: "La vita è bella quando parli italiano.", translation: "Life is beautiful when you speak Italian." },
    PhraseEntry { text: "Ogni parola è un nuovo mondo.", translation: "Every word is a new world." },
];

const ES_VOCAB: &[VocabEntry] = &[
    VocabEntry { word: "mariposa", meaning: "butterfly" },
    VocabEntry { word: "cielo", meaning: "sky" },
    VocabEntry { word: "luna", meaning: "moon" },
    VocabEntry { word: "fuego", meaning: "fire" },
    VocabEntry { word: "agua", meaning: "water" },
    VocabEntry { word: "tierra", meaning: "earth" },
    VocabEntry { word: "corazón", meaning: "heart" },
    VocabEntry { word: "alma", meaning: "soul" },
    VocabEntry { word: "sueño", meaning: "dream" },
    VocabEntry { word: "amor", meaning: "love" },
    VocabEntry { word: "paz", meaning: "peace" },
    VocabEntry { word: "noche", meaning: "night" },
];

const FR_VOCAB: &[VocabEntry] = &[
    VocabEntry { word: "papillon", meaning: "butterfly" },
    VocabEntry { word: "ciel", meaning: "sky" },
    VocabEntry { word: "lune", meaning: "moon" },
    VocabEntry { word: "feu", meaning: "fire" },
    VocabEntry { word: "eau", meaning: "water" },
    VocabEntry { word: "terre", meaning: "earth" },
    VocabEntry { word: "coeur", meaning: "heart" },
    VocabEntry { word: "âme", meaning: "soul" },
    VocabEntry { word: "rêve", meaning: "dream" },
    VocabEntry { word: "amour", meaning: "love" },
    VocabEntry { word: "paix", meaning: "peace" },
    VocabEntry { word: "nuit", meaning: "night" },
];

const JA_VOCAB: &[VocabEntry] = &[
    VocabEntry { word: "蝶", meaning: "butterfly" },
    VocabEntry { word: "空", meaning: "sky" },
    VocabEntry { word: "月", meaning: "moon" },
    VocabEntry { word: "火", meaning: "fire" },
    VocabEntry { word: "水", meaning: "water" },
    VocabEntry { word: "大地", meaning: "earth" },
    VocabEntry { word: "心", meaning: "heart" },
    VocabEntry { word: "魂", meaning: "soul" },
    VocabEntry { word: "夢", meaning: "dream" },
    VocabEntry { word: "愛", meaning: "love" },
    VocabEntry { word: "平和", meaning: "peace" },
    VocabEntry { word: "夜", meaning: "night" },
];

const AR_VOCAB: &[VocabEntry] = &[
    VocabEntry { word: "فراشة", meaning: "butterfly" },
    VocabEntry { word: "سماء", meaning: "sky" },
    VocabEntry { word: "قمر", meaning: "moon" },
    VocabEntry { word: "نار", meaning: "fire" },
    VocabEntry { word: "ماء", meaning: "water" },
    VocabEntry { word: "أرض", meaning: "earth" },
    VocabEntry { word: "قلب", meaning: "heart" },
    VocabEntry { word: "روح", meaning: "soul" },
    VocabEntry { word: "حلم", meaning: "dream" },
    VocabEntry { word: "حب", meaning: "love" },
    VocabEntry { word: "سلام", meaning: "peace" },
    VocabEntry { word: "ليل", meaning: "night" },
];

const DE_VOCAB: &[VocabEntry] = &[
    VocabEntry { word: "Schmetterling", meaning: "butterfly" },
    VocabEntry { word: "Himmel", meaning: "sky" },
    VocabEntry { word: "Mond", meaning: "moon" },
    VocabEntry { word: "Feuer", meaning: "fire" },
    VocabEntry { word: "Wasser", meaning: "water" },
    VocabEntry { word: "Erde", meaning: "earth" },
    VocabEntry { word: "Herz", meaning: "heart" },
    VocabEntry { word: "Seele", meaning: "soul" },
    VocabEntry { word: "Traum", meaning: "dream" },
    VocabEntry { word: "Liebe", meaning: "love" },
    VocabEntry { word: "Frieden", meaning: "peace" },
    VocabEntry { word: "Nacht", meaning: "night" },
];

const IT_VOCAB: &[VocabEntry] = &[
    VocabEntry { word: "farfalla", meaning: "butterfly" },
    VocabEntry { word: "cielo", meaning: "sky" },
    VocabEntry { word: "luna", meaning: "moon" },
    VocabEntry { word: "fuoco", meaning: "fire" },
    VocabEntry { word: "acqua", meaning: "water" },
    VocabEntry { word: "terra", meaning: "earth" },
    VocabEntry { word: "cuore", meaning: "heart" },
    VocabEntry { word: "anima", meaning: "soul" },
    VocabEntry { word: "sogno", meaning: "dream" },
    VocabEntry { word: "amore", meaning: "love" },
    VocabEntry { word: "pace", meaning: "peace" },
    VocabEntry { word: "notte", meaning: "night" },
];

const JA_GLYPHS: &[GlyphEntry] = &[
    GlyphEntry { character: "あ", answer: "a" },
    GlyphEntry { character: "い", answer: "i" },
    GlyphEntry { character: "う", answer: "u" },
    GlyphEntry { character: "え", answer: "e" },
    GlyphEntry { character: "お", answer: "o" },
    GlyphEntry { character: "か", answer: "ka" },
    GlyphEntry { character: "き", answer: "ki" },
    GlyphEntry { character: "く", answer: "ku" },
    GlyphEntry { character: "け", answer: "ke" },
    GlyphEntry { character: "こ", answer: "ko" },
    GlyphEntry { character: "さ", answer: "sa" },
    GlyphEntry { character: "し", answer: "shi" },
    GlyphEntry { character: "す", answer: "su" },
    GlyphEntry { character: "せ", answer: "se" },
    GlyphEntry { character: "そ", answer: "so" },
    GlyphEntry { character: "た", answer: "ta" },
    GlyphEntry { character: "な", answer: "na" },
    GlyphEntry { character: "に", answer: "ni" },
    GlyphEntry { character: "は", answer: "ha" },
    GlyphEntry { character: "ま", answer: "ma" },
];

const AR_GLYPHS: &[GlyphEntry] = &[
    GlyphEntry { character: "ا", answer: "alif" },
    GlyphEntry { character: "ب", answer: "ba" },
    GlyphEntry { character: "ت", answer: "ta" },
    GlyphEntry { character: "ث", answer: "tha" },
    GlyphEntry { character: "ج", answer: "jim" },
    GlyphEntry { character: "ح", answer: "ha" },
    GlyphEntry { character: "خ", answer: "kha" },
    GlyphEntry { character: "د", answer: "dal" },
    GlyphEntry { character: "ر", answer: "ra" },
    GlyphEntry { character: "ز", answer: "zay" },
    GlyphEntry { character: "س", answer: "sin" },
    GlyphEntry { character: "ش", answer: "shin" },
    GlyphEntry { character: "ع", answer: "ayn" },
    GlyphEntry { character: "غ", answer: "ghayn" },
    GlyphEntry { character: "ف", answer: "fa" },
    GlyphEntry { character: "ق", answer: "qaf" },
];

const ZH_GLYPHS: &[GlyphEntry] = &[
    GlyphEntry { character: "人", answer: "rén (person)" },
    GlyphEntry { character: "山", answer: "shān (mountain)" },
    GlyphEntry { character: "水", answer: "shuǐ (water)" },
    GlyphEntry { character: "火", answer: "huǒ (fire)" },
    GlyphEntry { character: "木", answer: "mù (wood)" },
    GlyphEntry { character: "日", answer: "rì (sun)" },
    GlyphEntry { character: "月", answer: "yuè (moon)" },
    GlyphEntry { character: "大", answer: "dà (big)" },
    GlyphEntry { character: "小", answer: "xiǎo (small)" },
    GlyphEntry { character: "心", answer: "xīn (heart)" },
    GlyphEntry { character: "天", answer: "tiān (sky)" },
    GlyphEntry { character: "地", answer: "dì (earth)" },
];

const GR_GLYPHS: &[GlyphEntry] = &[
    GlyphEntry { character: "α", answer: "alpha" },
    GlyphEntry { character: "β", answer: "beta" },
    GlyphEntry { character: "γ", answer: "gamma" },
    GlyphEntry { character: "δ", answer: "delta" },
    GlyphEntry { character: "ε", answer: "epsilon" },
    GlyphEntry { character: "ζ", answer: "zeta" },
    GlyphEntry { character: "η", answer: "eta" },
    GlyphEntry { character: "θ", answer: "theta" },
    GlyphEntry { character: "λ", answer: "lambda" },
    GlyphEntry { character: "μ", answer: "mu" },
    GlyphEntry { character: "π", answer: "pi" },
    GlyphEntry { character: "σ", answer: "sigma" },
    GlyphEntry { character: "φ", answer: "phi" },
    GlyphEntry { character: "χ", answer: "chi" },
    GlyphEntry { character: "ψ", answer: "psi" },
    GlyphEntry { character: "ω", answer: "omega" },
];

/// Phrase pool for a language
pub fn phrases(lang: LanguageCode) -> &'static [PhraseEntry] {
    match lang {
        LanguageCode::Es => ES_PHRASES,
        LanguageCode::Fr => FR_PHRASES,
        LanguageCode::Ja => JA_PHRASES,
        LanguageCode::Ar => AR_PHRASES,
        LanguageCode::De => DE_PHRASES,
        LanguageCode::It => IT_PHRASES,
    }
}

/// Vocabulary pool for a language
pub fn vocab(lang: LanguageCode) -> &'static [VocabEntry] {
    match lang {
        LanguageCode::Es => ES_VOCAB,
        LanguageCode::Fr => FR_VOCAB,
        LanguageCode::Ja => JA_VOCAB,
        LanguageCode::Ar => AR_VOCAB,
        LanguageCode::De => DE_VOCAB,
        LanguageCode::It => IT_VOCAB,
    }
}

/// Glyph pool for a script
pub fn glyphs(script: ScriptCode) -> &'static [GlyphEntry] {
    match script {
        ScriptCode::Ja => JA_GLYPHS,
        ScriptCode::Ar => AR_GLYPHS,
        ScriptCode::Zh => ZH_GLYPHS,
        ScriptCode::Gr => GR_GLYPHS,
    }
}

/// Parse a language code string, falling back to the default pool's code
pub fn language_or_default(code: &str) -> LanguageCode {
    LanguageCode::from_str(code).unwrap_or_default()
}

/// Parse a script code string, falling back to the default pool's code
pub fn script_or_default(code: &str) -> ScriptCode {
    ScriptCode::from_str(code).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pools_nonempty() {
        for lang in LanguageCode::ALL {
            assert!(!phrases(lang).is_empty());
            assert!(!vocab(lang).is_empty());
        }
        for script in ScriptCode::ALL {
            assert!(!glyphs(script).is_empty());
        }
    }

    #[test]
    fn test_choice_pools_support_four_choices() {
        // Distractor generation needs a correct entry plus 3 others.
        for lang in LanguageCode::ALL {
            assert!(vocab(lang).len() >= 4);
        }
        for script in ScriptCode::ALL {
            assert!(glyphs(script).len() >= 4);
        }
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        assert_eq!(language_or_default("xx"), LanguageCode::Es);
        assert_eq!(language_or_default("fr"), LanguageCode::Fr);
        assert_eq!(script_or_default("nope"), ScriptCode::Ja);
        assert_eq!(script_or_default("gr"), ScriptCode::Gr);
    }
}

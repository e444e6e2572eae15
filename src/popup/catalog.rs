//! Machine-translation disclosure sentences, keyed by language tag code.

use std::collections::BTreeMap;

/// Built-in disclosure table. Keys are lowercase tag codes.
const DISCLOSURES: &[(&str, &str)] = &[
    (
        "en",
        "This article was translated automatically from its original language. \
         Some nuances may have been lost in translation.",
    ),
    (
        "br",
        "Este artigo foi traduzido automaticamente do idioma original. \
         Algumas nuances podem ter se perdido na tradução.",
    ),
    (
        "de",
        "Dieser Artikel wurde automatisch aus der Originalsprache übersetzt. \
         Einige Nuancen sind bei der Übersetzung möglicherweise verloren gegangen.",
    ),
    (
        "es",
        "Este artículo fue traducido automáticamente de su idioma original. \
         Es posible que algunos matices se hayan perdido en la traducción.",
    ),
    (
        "fr",
        "Cet article a été traduit automatiquement de sa langue d'origine. \
         Certaines nuances ont pu se perdre lors de la traduction.",
    ),
    (
        "hi",
        "यह लेख अपनी मूल भाषा से स्वचालित रूप से अनुवादित किया गया है। \
         अनुवाद में कुछ बारीकियाँ छूट गई हो सकती हैं।",
    ),
    (
        "id",
        "Artikel ini diterjemahkan secara otomatis dari bahasa aslinya. \
         Beberapa nuansa mungkin hilang dalam terjemahan.",
    ),
    (
        "jp",
        "この記事は原文から自動的に翻訳されました。\
         翻訳の過程で一部のニュアンスが失われている可能性があります。",
    ),
    (
        "tr",
        "Bu makale orijinal dilinden otomatik olarak çevrilmiştir. \
         Çeviri sırasında bazı nüanslar kaybolmuş olabilir.",
    ),
];

/// Static mapping from tag code to disclosure sentence.
#[derive(Debug, Clone, Copy)]
pub struct DisclosureCatalog {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for DisclosureCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DisclosureCatalog {
    /// The built-in nine-language catalog.
    pub const fn builtin() -> Self {
        Self {
            entries: DISCLOSURES,
        }
    }

    /// Catalog over a caller-supplied table.
    pub const fn from_entries(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Disclosure for `code`. Exact, case-sensitive match.
    ///
    /// Empty entries count as absent.
    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, text)| *text)
            .filter(|text| !text.is_empty())
    }

    /// Tag codes with a disclosure.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(key, _)| *key)
    }

    /// JSON object `{code: sentence}` for the page script.
    pub fn to_json(&self) -> String {
        let map: BTreeMap<_, _> = self
            .entries
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .copied()
            .collect();
        // A map of strings always serializes
        serde_json::to_string(&map).unwrap_or_else(|_| "{}".into())
    }
}

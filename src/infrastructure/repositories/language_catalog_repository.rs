use crate::domain::language::{voice_locale, LanguageCatalog, LanguageCatalogRepository};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Speech recognition locales offered as translation sources
const SOURCE_LANGUAGES: &[(&str, &str)] = &[
    ("Afrikaans (South Africa)", "af-ZA"),
    ("Amharic (Ethiopia)", "am-ET"),
    ("Arabic (United Arab Emirates)", "ar-AE"),
    ("Arabic (Bahrain)", "ar-BH"),
    ("Arabic (Algeria)", "ar-DZ"),
    ("Arabic (Egypt)", "ar-EG"),
    ("Arabic (Israel)", "ar-IL"),
    ("Arabic (Iraq)", "ar-IQ"),
    ("Arabic (Jordan)", "ar-JO"),
    ("Arabic (Kuwait)", "ar-KW"),
    ("Arabic (Lebanon)", "ar-LB"),
    ("Arabic (Libya)", "ar-LY"),
    ("Arabic (Morocco)", "ar-MA"),
    ("Arabic (Oman)", "ar-OM"),
    ("Arabic (Palestinian Authority)", "ar-PS"),
    ("Arabic (Qatar)", "ar-QA"),
    ("Arabic (Saudi Arabia)", "ar-SA"),
    ("Arabic (Syria)", "ar-SY"),
    ("Arabic (Tunisia)", "ar-TN"),
    ("Arabic (Yemen)", "ar-YE"),
    ("Assamese (India)", "as-IN"),
    ("Azerbaijani (Latin, Azerbaijan)", "az-AZ"),
    ("Bulgarian (Bulgaria)", "bg-BG"),
    ("Bengali (India)", "bn-IN"),
    ("Bosnian (Bosnia and Herzegovina)", "bs-BA"),
    ("Catalan", "ca-ES"),
    ("Czech (Czechia)", "cs-CZ"),
    ("Welsh (United Kingdom)", "cy-GB"),
    ("Danish (Denmark)", "da-DK"),
    ("German (Austria)", "de-AT"),
    ("German (Switzerland)", "de-CH"),
    ("German (Germany)", "de-DE"),
    ("Greek (Greece)", "el-GR"),
    ("English (Australia)", "en-AU"),
    ("English (Canada)", "en-CA"),
    ("English (United Kingdom)", "en-GB"),
    ("English (Ghana)", "en-GH"),
    ("English (Hong Kong SAR)", "en-HK"),
    ("English (Ireland)", "en-IE"),
    ("English (India)", "en-IN"),
    ("English (Kenya)", "en-KE"),
    ("English (Nigeria)", "en-NG"),
    ("English (New Zealand)", "en-NZ"),
    ("English (Philippines)", "en-PH"),
    ("English (Singapore)", "en-SG"),
    ("English (Tanzania)", "en-TZ"),
    ("English (United States)", "en-US"),
    ("English (South Africa)", "en-ZA"),
    ("Spanish (Argentina)", "es-AR"),
    ("Spanish (Bolivia)", "es-BO"),
    ("Spanish (Chile)", "es-CL"),
    ("Spanish (Colombia)", "es-CO"),
    ("Spanish (Costa Rica)", "es-CR"),
    ("Spanish (Cuba)", "es-CU"),
    ("Spanish (Dominican Republic)", "es-DO"),
    ("Spanish (Ecuador)", "es-EC"),
    ("Spanish (Spain)", "es-ES"),
    ("Spanish (Equatorial Guinea)", "es-GQ"),
    ("Spanish (Guatemala)", "es-GT"),
    ("Spanish (Honduras)", "es-HN"),
    ("Spanish (Mexico)", "es-MX"),
    ("Spanish (Nicaragua)", "es-NI"),
    ("Spanish (Panama)", "es-PA"),
    ("Spanish (Peru)", "es-PE"),
    ("Spanish (Puerto Rico)", "es-PR"),
    ("Spanish (Paraguay)", "es-PY"),
    ("Spanish (El Salvador)", "es-SV"),
    ("Spanish (United States)", "es-US"),
    ("Spanish (Uruguay)", "es-UY"),
    ("Spanish (Venezuela)", "es-VE"),
    ("Estonian (Estonia)", "et-EE"),
    ("Basque", "eu-ES"),
    ("Persian (Iran)", "fa-IR"),
    ("Finnish (Finland)", "fi-FI"),
    ("Filipino (Philippines)", "fil-PH"),
    ("French (Belgium)", "fr-BE"),
    ("French (Canada)", "fr-CA"),
    ("French (Switzerland)", "fr-CH"),
    ("French (France)", "fr-FR"),
    ("Irish (Ireland)", "ga-IE"),
    ("Galician", "gl-ES"),
    ("Gujarati (India)", "gu-IN"),
    ("Hebrew (Israel)", "he-IL"),
    ("Hindi (India)", "hi-IN"),
    ("Croatian (Croatia)", "hr-HR"),
    ("Hungarian (Hungary)", "hu-HU"),
    ("Armenian (Armenia)", "hy-AM"),
    ("Indonesian (Indonesia)", "id-ID"),
    ("Icelandic (Iceland)", "is-IS"),
    ("Italian (Switzerland)", "it-CH"),
    ("Italian (Italy)", "it-IT"),
    ("Japanese (Japan)", "ja-JP"),
    ("Georgian (Georgia)", "ka-GE"),
    ("Kazakh (Kazakhstan)", "kk-KZ"),
    ("Khmer (Cambodia)", "km-KH"),
    ("Kannada (India)", "kn-IN"),
    ("Korean (Korea)", "ko-KR"),
    ("Lao (Laos)", "lo-LA"),
    ("Lithuanian (Lithuania)", "lt-LT"),
    ("Latvian (Latvia)", "lv-LV"),
    ("Macedonian (North Macedonia)", "mk-MK"),
    ("Malayalam (India)", "ml-IN"),
    ("Mongolian (Mongolia)", "mn-MN"),
    ("Marathi (India)", "mr-IN"),
    ("Malay (Malaysia)", "ms-MY"),
    ("Maltese (Malta)", "mt-MT"),
    ("Burmese (Myanmar)", "my-MM"),
    ("Norwegian Bokmål (Norway)", "nb-NO"),
    ("Nepali (Nepal)", "ne-NP"),
    ("Dutch (Belgium)", "nl-BE"),
    ("Dutch (Netherlands)", "nl-NL"),
    ("Odia (India)", "or-IN"),
    ("Punjabi (India)", "pa-IN"),
    ("Polish (Poland)", "pl-PL"),
    ("Pashto (Afghanistan)", "ps-AF"),
    ("Portuguese (Brazil)", "pt-BR"),
    ("Portuguese (Portugal)", "pt-PT"),
    ("Romanian (Romania)", "ro-RO"),
    ("Russian (Russia)", "ru-RU"),
    ("Sinhala (Sri Lanka)", "si-LK"),
    ("Slovak (Slovakia)", "sk-SK"),
    ("Slovenian (Slovenia)", "sl-SI"),
    ("Somali (Somalia)", "so-SO"),
    ("Albanian (Albania)", "sq-AL"),
    ("Serbian (Cyrillic, Serbia)", "sr-RS"),
    ("Swedish (Sweden)", "sv-SE"),
    ("Kiswahili (Kenya)", "sw-KE"),
    ("Kiswahili (Tanzania)", "sw-TZ"),
    ("Tamil (India)", "ta-IN"),
    ("Telugu (India)", "te-IN"),
    ("Thai (Thailand)", "th-TH"),
    ("Turkish (Türkiye)", "tr-TR"),
    ("Ukrainian (Ukraine)", "uk-UA"),
    ("Urdu (India)", "ur-IN"),
    ("Uzbek (Latin, Uzbekistan)", "uz-UZ"),
    ("Vietnamese (Vietnam)", "vi-VN"),
    ("Chinese (Cantonese, Simplified)", "yue-CN"),
    ("Chinese (Mandarin, Simplified)", "zh-CN"),
    ("Chinese (Jilu Mandarin, Simplified)", "zh-CN-shandong"),
    ("Chinese (Southwestern Mandarin, Simplified)", "zh-CN-sichuan"),
    ("Chinese (Cantonese, Traditional)", "zh-HK"),
    ("Chinese (Taiwanese Mandarin, Traditional)", "zh-TW"),
    ("isiZulu (South Africa)", "zu-ZA"),
];

/// Translation target languages
const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("Afrikaans", "af"),
    ("Albanian", "sq"),
    ("Amharic", "am"),
    ("Arabic", "ar"),
    ("Armenian", "hy"),
    ("Assamese", "as"),
    ("Azerbaijani", "az"),
    ("Bangla", "bn"),
    ("Bosnian (Latin)", "bs"),
    ("Bulgarian", "bg"),
    ("Cantonese (Traditional)", "yue"),
    ("Catalan", "ca"),
    ("Chinese Simplified", "zh-Hans"),
    ("Chinese Traditional", "zh-Hant"),
    ("Croatian", "hr"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("Dari", "prs"),
    ("Dutch", "nl"),
    ("English", "en"),
    ("Estonian", "et"),
    ("Filipino", "fil"),
    ("Finnish", "fi"),
    ("French", "fr"),
    ("French (Canada)", "fr-ca"),
    ("German", "de"),
    ("Greek", "el"),
    ("Gujarati", "gu"),
    ("Hebrew", "he"),
    ("Hindi", "hi"),
    ("Hungarian", "hu"),
    ("Icelandic", "is"),
    ("Indonesian", "id"),
    ("Irish", "ga"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Kannada", "kn"),
    ("Kazakh", "kk"),
    ("Khmer", "km"),
    ("Korean", "ko"),
    ("Lao", "lo"),
    ("Latvian", "lv"),
    ("Lithuanian", "lt"),
    ("Macedonian", "mk"),
    ("Malay", "ms"),
    ("Malayalam", "ml"),
    ("Maltese", "mt"),
    ("Marathi", "mr"),
    ("Myanmar", "my"),
    ("Nepali", "ne"),
    ("Norwegian", "nb"),
    ("Odia", "or"),
    ("Pashto", "ps"),
    ("Persian", "fa"),
    ("Polish", "pl"),
    ("Portuguese (Brazil)", "pt"),
    ("Portuguese (Portugal)", "pt-pt"),
    ("Punjabi", "pa"),
    ("Romanian", "ro"),
    ("Russian", "ru"),
    ("Serbian (Cyrillic)", "sr-Cyrl"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Somali", "so"),
    ("Spanish", "es"),
    ("Swahili", "sw"),
    ("Swedish", "sv"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Thai", "th"),
    ("Tongan", "to"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
    ("Urdu", "ur"),
    ("Uzbek", "uz"),
    ("Vietnamese", "vi"),
    ("Welsh", "cy"),
];

/// Neural voice used to speak each target language
const VOICES: &[(&str, &str)] = &[
    ("af", "af-ZA-AdriNeural"),
    ("sq", "sq-AL-AnilaNeural"),
    ("am", "am-ET-AmehaNeural"),
    ("ar", "ar-SA-ZariyahNeural"),
    ("hy", "hy-AM-AnahitNeural"),
    ("as", "as-IN-NilakshiNeural"),
    ("az", "az-AZ-BanuNeural"),
    ("bn", "bn-IN-TanishaNeural"),
    ("bs", "bs-BA-VesnaNeural"),
    ("bg", "bg-BG-KalinaNeural"),
    ("yue", "zh-HK-HiuGaaiNeural"),
    ("ca", "ca-ES-JoanaNeural"),
    ("zh-Hans", "zh-CN-XiaoxiaoNeural"),
    ("zh-Hant", "zh-TW-HsiaoChenNeural"),
    ("hr", "hr-HR-GabrijelaNeural"),
    ("cs", "cs-CZ-VlastaNeural"),
    ("da", "da-DK-ChristelNeural"),
    ("prs", "prs-AF-LatifaNeural"),
    ("nl", "nl-NL-FennaNeural"),
    ("en", "en-US-AriaNeural"),
    ("et", "et-EE-AnuNeural"),
    ("fil", "fil-PH-BlessicaNeural"),
    ("fi", "fi-FI-NooraNeural"),
    ("fr", "fr-FR-DeniseNeural"),
    ("fr-ca", "fr-CA-SylvieNeural"),
    ("de", "de-DE-KatjaNeural"),
    ("el", "el-GR-AthinaNeural"),
    ("gu", "gu-IN-DhwaniNeural"),
    ("he", "he-IL-HilaNeural"),
    ("hi", "hi-IN-SwaraNeural"),
    ("hu", "hu-HU-NoemiNeural"),
    ("is", "is-IS-GudrunNeural"),
    ("id", "id-ID-GadisNeural"),
    ("ga", "ga-IE-OrlaNeural"),
    ("it", "it-IT-ElsaNeural"),
    ("ja", "ja-JP-NanamiNeural"),
    ("kn", "kn-IN-SapnaNeural"),
    ("kk", "kk-KZ-AigulNeural"),
    ("km", "km-KH-SreymomNeural"),
    ("ko", "ko-KR-SunHiNeural"),
    ("lo", "lo-LA-KeomanyNeural"),
    ("lv", "lv-LV-EveritaNeural"),
    ("lt", "lt-LT-OnaNeural"),
    ("mk", "mk-MK-MarijaNeural"),
    ("ms", "ms-MY-YasminNeural"),
    ("ml", "ml-IN-SobhanaNeural"),
    ("mt", "mt-MT-GraceNeural"),
    ("mr", "mr-IN-AarohiNeural"),
    ("my", "my-MM-NilarNeural"),
    ("ne", "ne-NP-SagarikaNeural"),
    ("nb", "nb-NO-PernilleNeural"),
    ("or", "or-IN-AshaNeural"),
    ("ps", "ps-AF-LatifaNeural"),
    ("fa", "fa-IR-DilaraNeural"),
    ("pl", "pl-PL-ZofiaNeural"),
    ("pt", "pt-BR-FranciscaNeural"),
    ("pt-pt", "pt-PT-RaquelNeural"),
    ("pa", "pa-IN-AseesNeural"),
    ("ro", "ro-RO-AlinaNeural"),
    ("ru", "ru-RU-SvetlanaNeural"),
    ("sr-Cyrl", "sr-RS-SophieNeural"),
    ("sk", "sk-SK-ViktoriaNeural"),
    ("sl", "sl-SI-PetraNeural"),
    ("so", "so-SO-UbaxNeural"),
    ("es", "es-ES-ElviraNeural"),
    ("sw", "sw-KE-ZuriNeural"),
    ("sv", "sv-SE-SofieNeural"),
    ("ta", "ta-IN-PallaviNeural"),
    ("te", "te-IN-ShrutiNeural"),
    ("th", "th-TH-PremwadeeNeural"),
    ("to", "to-TO-AnaNeural"),
    ("tr", "tr-TR-EmelNeural"),
    ("uk", "uk-UA-PolinaNeural"),
    ("ur", "ur-PK-UzmaNeural"),
    ("uz", "uz-UZ-SardorNeural"),
    ("vi", "vi-VN-HoaiMyNeural"),
    ("cy", "cy-GB-NiaNeural"),
];

static VOICE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| VOICES.iter().copied().collect());

static SOURCE_CATALOG: LazyLock<LanguageCatalog> =
    LazyLock::new(|| sorted_catalog(SOURCE_LANGUAGES));

static TARGET_CATALOG: LazyLock<LanguageCatalog> =
    LazyLock::new(|| sorted_catalog(TARGET_LANGUAGES));

pub struct HardcodedLanguageCatalogRepository;

impl HardcodedLanguageCatalogRepository {
    pub fn new() -> Self {
        // Verify data integrity at construction time
        debug_assert_eq!(
            unique_keys(SOURCE_LANGUAGES),
            SOURCE_LANGUAGES.len(),
            "Source language names must be unique"
        );
        debug_assert_eq!(
            unique_keys(TARGET_LANGUAGES),
            TARGET_LANGUAGES.len(),
            "Target language names must be unique"
        );
        debug_assert_eq!(VOICE_MAP.len(), VOICES.len(), "Voice codes must be unique");

        for (name, code) in TARGET_LANGUAGES {
            debug_assert!(
                VOICE_MAP.contains_key(code),
                "Target language {} ({}) has no voice",
                name,
                code
            );
        }

        for voice in VOICE_MAP.values() {
            debug_assert_eq!(
                voice_locale(voice).split('-').count(),
                2,
                "Voice {} does not embed a locale",
                voice
            );
        }

        Self
    }
}

fn unique_keys(table: &[(&str, &str)]) -> usize {
    table.iter().map(|(name, _)| *name).collect::<HashSet<_>>().len()
}

fn sorted_catalog(table: &[(&str, &str)]) -> LanguageCatalog {
    table
        .iter()
        .map(|(name, code)| (name.to_string(), code.to_string()))
        .collect()
}

impl LanguageCatalogRepository for HardcodedLanguageCatalogRepository {
    fn source_languages(&self) -> &LanguageCatalog {
        &SOURCE_CATALOG
    }

    fn target_languages(&self) -> &LanguageCatalog {
        &TARGET_CATALOG
    }

    fn voice_for(&self, language_code: &str) -> Option<String> {
        VOICE_MAP.get(language_code).map(|voice| voice.to_string())
    }
}

impl Default for HardcodedLanguageCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

//! Theme module - embedded daily word pools
//!
//! One pool per theme; the factory picks `day mod THEME_COUNT`. Pool
//! entries are stored pre-normalized (ASCII uppercase) but still pass
//! through normalization at ingestion like every other word source.

pub struct Theme {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

pub const THEMES: &[Theme] = &[
    Theme {
        name: "Animals",
        words: &[
            "CAT", "DOG", "FOX", "OWL", "BEAR", "WOLF", "DEER", "HARE", "OTTER", "TIGER",
            "ZEBRA", "LLAMA", "CAMEL", "BADGER", "RABBIT", "FERRET", "WALRUS", "CHEETAH",
            "GIRAFFE", "HEDGEHOG", "ELEPHANT", "PANGOLIN", "PORCUPINE",
        ],
    },
    Theme {
        name: "Food",
        words: &[
            "PIE", "JAM", "EGG", "RICE", "TACO", "SOUP", "KALE", "BREAD", "APPLE", "OLIVE",
            "MANGO", "CHEESE", "NOODLE", "WAFFLE", "TOMATO", "PAPRIKA", "PRETZEL", "AVOCADO",
            "DUMPLING", "PANCAKES", "CROISSANT",
        ],
    },
    Theme {
        name: "Space",
        words: &[
            "SUN", "ORB", "MARS", "MOON", "STAR", "NOVA", "COMET", "ORBIT", "VENUS", "PLUTO",
            "METEOR", "SATURN", "GALAXY", "NEBULA", "JUPITER", "ECLIPSE", "ASTEROID",
            "SATELLITE", "TELESCOPE", "SUPERNOVA",
        ],
    },
    Theme {
        name: "Ocean",
        words: &[
            "EEL", "RAY", "KELP", "CRAB", "WAVE", "TIDE", "REEF", "CORAL", "SQUID", "WHALE",
            "SHARK", "URCHIN", "MARLIN", "LAGOON", "OCTOPUS", "DOLPHIN", "NARWHAL",
            "PLANKTON", "JELLYFISH", "SEAHORSE",
        ],
    },
    Theme {
        name: "Music",
        words: &[
            "KEY", "BOW", "DUET", "ARIA", "NOTE", "DRUM", "HARP", "TEMPO", "CHORD", "VIOLA",
            "PIANO", "FLUTE", "GUITAR", "VIOLIN", "MELODY", "TRUMPET", "OCTAVE", "BASSOON",
            "CLARINET", "ORCHESTRA",
        ],
    },
    Theme {
        name: "Weather",
        words: &[
            "FOG", "ICE", "HAIL", "RAIN", "SNOW", "WIND", "GALE", "STORM", "CLOUD", "FROST",
            "SLEET", "BREEZE", "MONSOON", "CYCLONE", "TORNADO", "THUNDER", "RAINBOW",
            "BLIZZARD", "DOWNPOUR", "LIGHTNING",
        ],
    },
    Theme {
        name: "Garden",
        words: &[
            "BEE", "SOD", "SOIL", "SEED", "ROSE", "FERN", "MOSS", "TULIP", "DAISY", "THORN",
            "CLOVER", "ORCHID", "TROWEL", "COMPOST", "FOXGLOVE", "LAVENDER", "MARIGOLD",
            "SUNFLOWER", "GREENHOUSE",
        ],
    },
    Theme {
        name: "Travel",
        words: &[
            "MAP", "BAG", "VISA", "TAXI", "SHIP", "ROAD", "TRAIN", "HOTEL", "PLANE", "FERRY",
            "CANYON", "JUNGLE", "AIRPORT", "HARBOR", "COMPASS", "PASSPORT", "SUITCASE",
            "ITINERARY", "LIGHTHOUSE",
        ],
    },
];

/// Last-resort pool when length filtering empties a theme; every entry
/// fits even the smallest grid
pub const SAFE_WORDS: &[&str] = &[
    "CAT", "DOG", "SUN", "MAP", "STAR", "TREE", "FISH", "MOON", "BIRD", "LAKE",
];

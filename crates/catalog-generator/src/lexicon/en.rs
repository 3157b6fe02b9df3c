use super::Lexicon;

pub(super) static LEXICON: Lexicon = Lexicon {
    words: &[
        "river", "silent", "garden", "winter", "broken", "light", "shadow", "golden", "empire",
        "whisper", "forgotten", "ocean", "mountain", "last", "secret", "road", "house", "glass",
        "storm", "letters", "distant", "fire", "small", "kingdom", "echo", "morning", "wild",
        "stone", "heart", "summer", "north", "hidden", "iron", "city", "bright", "dream", "long",
        "night", "paper", "orchard", "stranger", "bitter", "harbor", "quiet", "thread", "salt",
        "crown", "wolves", "island", "memory", "after", "before", "beneath", "between", "sparrow",
        "lantern", "velvet", "hollow", "promise", "ashes",
    ],
    first_names: &[
        "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
        "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
        "Sarah", "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Betty",
        "Mark", "Margaret", "Steven", "Emily",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson",
        "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee", "Thompson", "White",
        "Harris", "Clark", "Lewis", "Walker", "Hall", "Young", "King", "Wright", "Hill", "Scott",
        "Green", "Baker",
    ],
    company_suffixes: &["Inc", "LLC", "Group", "and Sons", "Press", "Publishing"],
    conjunction: "and",
};

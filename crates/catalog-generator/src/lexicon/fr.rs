use super::Lexicon;

pub(super) static LEXICON: Lexicon = Lexicon {
    words: &[
        "rivière", "silence", "jardin", "hiver", "lumière", "ombre", "doré", "empire", "murmure",
        "oublié", "océan", "montagne", "dernier", "secret", "route", "maison", "verre", "orage",
        "lettres", "lointain", "feu", "petit", "royaume", "écho", "matin", "sauvage", "pierre",
        "cœur", "été", "nord", "caché", "fer", "ville", "clair", "rêve", "long", "nuit", "papier",
        "verger", "étranger", "amer", "port", "calme", "fil", "sel", "couronne", "loups", "île",
        "mémoire", "après", "avant", "sous", "entre", "moineau", "lanterne", "velours", "creux",
        "promesse", "cendres", "vent",
    ],
    first_names: &[
        "Jean", "Marie", "Pierre", "Nathalie", "Michel", "Isabelle", "Philippe", "Sylvie",
        "Alain", "Catherine", "Nicolas", "Françoise", "Christophe", "Sandrine", "Patrick",
        "Valérie", "Julien", "Céline", "Olivier", "Camille", "Thomas", "Chloé", "Antoine",
        "Juliette", "Louis", "Manon", "Hugo", "Léa", "Mathieu", "Élodie",
    ],
    last_names: &[
        "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand", "Leroy",
        "Moreau", "Simon", "Laurent", "Lefebvre", "Michel", "Garcia", "David", "Bertrand",
        "Roux", "Vincent", "Fournier", "Morel", "Girard", "André", "Lefèvre", "Mercier", "Dupont",
        "Lambert", "Bonnet", "François", "Fontaine",
    ],
    company_suffixes: &["SA", "SARL", "SAS", "EURL", "et Fils", "Éditions"],
    conjunction: "et",
};

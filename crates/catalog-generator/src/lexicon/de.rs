use super::Lexicon;

pub(super) static LEXICON: Lexicon = Lexicon {
    words: &[
        "Fluss", "still", "Garten", "Winter", "zerbrochen", "Licht", "Schatten", "golden", "Reich",
        "Flüstern", "vergessen", "Meer", "Berg", "letzte", "Geheimnis", "Straße", "Haus", "Glas",
        "Sturm", "Briefe", "fern", "Feuer", "klein", "Königreich", "Echo", "Morgen", "wild",
        "Stein", "Herz", "Sommer", "Norden", "verborgen", "Eisen", "Stadt", "hell", "Traum",
        "lang", "Nacht", "Papier", "Obstgarten", "Fremde", "bitter", "Hafen", "leise", "Faden",
        "Salz", "Krone", "Wölfe", "Insel", "Erinnerung", "nach", "vor", "unter", "zwischen",
        "Sperling", "Laterne", "Samt", "Senke", "Versprechen", "Asche",
    ],
    first_names: &[
        "Peter", "Anna", "Michael", "Ursula", "Thomas", "Monika", "Andreas", "Petra", "Wolfgang",
        "Sabine", "Klaus", "Renate", "Jürgen", "Karin", "Stefan", "Birgit", "Frank", "Claudia",
        "Markus", "Julia", "Lukas", "Lena", "Jonas", "Sophie", "Felix", "Marie", "Tobias", "Jana",
        "Matthias", "Katrin",
    ],
    last_names: &[
        "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
        "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf", "Schröder",
        "Neumann", "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann", "Hartmann", "Lange",
        "Schmitt", "Werner", "Schmitz", "Krause", "Meier",
    ],
    company_suffixes: &["GmbH", "AG", "KG", "GmbH & Co. KG", "OHG", "Verlag"],
    conjunction: "und",
};

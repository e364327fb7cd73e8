//! Symbol catalog offered for icon overlays

/// A named group of symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolCategory {
    pub name: &'static str,
    /// (glyph, name)
    pub symbols: &'static [(&'static str, &'static str)],
}

pub const CATEGORIES: &[SymbolCategory] = &[
    SymbolCategory {
        name: "Finanzen & Währung",
        symbols: &[
            ("€", "Euro"),
            ("$", "Dollar"),
            ("£", "Pfund"),
            ("¥", "Yen"),
            ("₣", "Franken"),
            ("₿", "Bitcoin"),
            ("¢", "Cent"),
            ("‰", "Promille"),
            ("%", "Prozent"),
        ],
    },
    SymbolCategory {
        name: "Buchhaltung",
        symbols: &[
            ("∑", "Summe"),
            ("±", "Plus/Minus"),
            ("÷", "Division"),
            ("×", "Multiplikation"),
            ("=", "Gleich"),
            ("≠", "Ungleich"),
            ("≤", "Kleiner gleich"),
            ("≥", "Größer gleich"),
            ("#", "Nummer"),
            ("№", "Numero"),
        ],
    },
    SymbolCategory {
        name: "Dokumente & Ordner",
        symbols: &[
            ("📁", "Ordner"),
            ("📂", "Ordner offen"),
            ("📄", "Dokument"),
            ("📋", "Klemmbrett"),
            ("📑", "Registerkarten"),
            ("📊", "Diagramm"),
            ("📈", "Aufwärtstrend"),
            ("📉", "Abwärtstrend"),
            ("🗂️", "Karteikasten"),
            ("🗃️", "Karteikarten"),
        ],
    },
    SymbolCategory {
        name: "Geschäftlich",
        symbols: &[
            ("✓", "Häkchen"),
            ("✗", "Kreuz"),
            ("★", "Stern"),
            ("●", "Punkt"),
            ("■", "Quadrat"),
            ("▲", "Dreieck"),
            ("◆", "Raute"),
            ("→", "Pfeil rechts"),
            ("←", "Pfeil links"),
            ("↑", "Pfeil hoch"),
            ("↓", "Pfeil runter"),
            ("⚡", "Blitz"),
        ],
    },
    SymbolCategory {
        name: "Kalender & Zeit",
        symbols: &[
            ("📅", "Kalender"),
            ("🗓️", "Kalenderblatt"),
            ("⏰", "Wecker"),
            ("⌛", "Sanduhr"),
            ("📆", "Abreißkalender"),
        ],
    },
    SymbolCategory {
        name: "Sonstiges",
        symbols: &[
            ("⚠️", "Warnung"),
            ("❗", "Wichtig"),
            ("❓", "Frage"),
            ("💡", "Idee"),
            ("🔒", "Schloss"),
            ("🔑", "Schlüssel"),
            ("📌", "Pinnnadel"),
            ("🏠", "Haus"),
            ("🏢", "Gebäude"),
            ("👤", "Person"),
            ("👥", "Personen"),
            ("✉️", "Brief"),
        ],
    },
];

/// Find the catalog name of a glyph.
pub fn name_of(glyph: &str) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .flat_map(|c| c.symbols.iter())
        .find(|(g, _)| *g == glyph)
        .map(|(_, name)| *name)
}

//! Built-in label templates

use crate::geometry::LabelFormat;
use crate::types::{Percent, Px};

use super::defaults;
use super::label::{Divider, FontWeight, Label, LabelId, LineStyle, TextSection};

/// A named label preset. Instantiating it mints a fresh id.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Swatch color for the picker
    pub preview: &'static str,
    pub header: TextSection,
    pub divider: Divider,
    pub body: TextSection,
    pub background_color: &'static str,
}

impl Template {
    pub fn instantiate(&self) -> Label {
        Label {
            id: LabelId::generate(),
            format: LabelFormat::Standard,
            header: self.header.clone(),
            divider: self.divider.clone(),
            body: self.body.clone(),
            background_color: self.background_color.to_string(),
            icon: None,
        }
    }
}

fn divider(visible: bool, split: f64) -> Divider {
    Divider {
        visible,
        horizontal_position: Percent(split),
        ..defaults::divider()
    }
}

/// All built-in templates, in picker order.
pub fn builtin() -> Vec<Template> {
    use FontWeight::{Bold, Normal};

    vec![
        Template {
            id: "blank",
            name: "Leer",
            description: "Leeres Etikett ohne Inhalt",
            preview: "#ffffff",
            header: TextSection::styled("", 16.0, Bold),
            divider: divider(false, 40.0),
            body: TextSection::styled("", 12.0, Normal),
            background_color: "#ffffff",
        },
        Template {
            id: "classic",
            name: "Klassisch",
            description: "Titel und Jahr",
            preview: "#f8fafc",
            header: TextSection::styled("Ordner", 18.0, Bold),
            divider: divider(true, 40.0),
            body: TextSection::styled("2025", 14.0, Normal),
            background_color: "#ffffff",
        },
        Template {
            id: "business",
            name: "Geschäftlich",
            description: "Professionelles Design",
            preview: "#1e40af",
            header: TextSection::styled("Firma GmbH", 14.0, Bold).with_color("#1e40af"),
            divider: Divider {
                color: "#1e40af".to_string(),
                thickness: Px(2.0),
                ..divider(true, 35.0)
            },
            body: TextSection::styled("Buchhaltung\n2025", 12.0, Normal).with_color("#374151"),
            background_color: "#f0f9ff",
        },
        Template {
            id: "colorful",
            name: "Farbig",
            description: "Auffälliges farbiges Design",
            preview: "#dc2626",
            header: TextSection::styled("WICHTIG", 16.0, Bold).with_color("#ffffff"),
            divider: divider(false, 50.0),
            body: TextSection::styled("Dokumente", 12.0, Normal).with_color("#ffffff"),
            background_color: "#dc2626",
        },
        Template {
            id: "minimal",
            name: "Minimal",
            description: "Schlichtes Design",
            preview: "#f3f4f6",
            header: TextSection::styled("", 14.0, Normal),
            divider: divider(false, 30.0),
            body: TextSection::styled("Notizen", 16.0, Normal).with_color("#6b7280"),
            background_color: "#f9fafb",
        },
        Template {
            id: "archive",
            name: "Archiv",
            description: "Für Archivordner",
            preview: "#78716c",
            header: TextSection::styled("ARCHIV", 14.0, Bold).with_color("#44403c"),
            divider: Divider {
                color: "#a8a29e".to_string(),
                style: LineStyle::Dashed,
                ..divider(true, 45.0)
            },
            body: TextSection::styled("Jahr\nKategorie", 11.0, Normal).with_color("#57534e"),
            background_color: "#f5f5f4",
        },
    ]
}

/// Look up a built-in template by id.
pub fn find(id: &str) -> Option<Template> {
    builtin().into_iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_templates_with_unique_ids() {
        let templates = builtin();
        assert_eq!(templates.len(), 6);
        let mut ids: Vec<_> = templates.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn instantiate_mints_new_ids() {
        let classic = find("classic").unwrap();
        let a = classic.instantiate();
        let b = classic.instantiate();
        assert_ne!(a.id, b.id);
        assert_eq!(a.header, b.header);
        assert_eq!(a.header.text, "Ordner");
    }

    #[test]
    fn business_template_preset() {
        let label = find("business").unwrap().instantiate();
        assert_eq!(label.divider.thickness, Px(2.0));
        assert_eq!(label.divider.horizontal_position, Percent(35.0));
        assert_eq!(label.body.text, "Buchhaltung\n2025");
        assert_eq!(label.background_color, "#f0f9ff");
    }

    #[test]
    fn archive_template_uses_dashed_divider() {
        let label = find("archive").unwrap().instantiate();
        assert_eq!(label.divider.style, LineStyle::Dashed);
        assert!(label.divider.visible);
    }

    #[test]
    fn unknown_template_is_none() {
        assert!(find("fancy").is_none());
    }
}

//! Store settings - the singleton configuration record for the storefront.

use serde::{Deserialize, Serialize};

use super::id::SettingsId;

/// The store-wide settings record.
///
/// Fetched once at bootstrap and re-fetched on demand after an admin edit;
/// the latest fetch always overwrites the previous value wholesale (no
/// merge). Every consumer must tolerate the record being absent - the
/// storefront renders with hard-coded fallbacks until it arrives.
///
/// The wire format matches the data service row: nullable columns map to
/// `Option`, the keyword list and flags default when missing so partial
/// rows still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Row id, needed to address the record on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SettingsId>,
    #[serde(default)]
    pub store_name: Option<String>,
    #[serde(default)]
    pub store_description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub og_image_url: Option<String>,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Nested theme sub-record (stored as a JSON column on the row).
    #[serde(default)]
    pub theme_settings: ThemeSettings,
    /// Enables the testimonials block on the home page.
    #[serde(default)]
    pub show_testimonials: bool,
}

/// Theme sub-record nested inside [`StoreSettings`].
///
/// Field names are camelCase on the wire (the JSON column predates the
/// snake_case convention of the other tables).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettings {
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub background_gradient: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_row_parses_with_defaults() {
        let json =
            r##"{"store_name": "Perfume House", "theme_settings": {"primaryColor": "#112233"}}"##;
        let settings: StoreSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.store_name.as_deref(), Some("Perfume House"));
        assert_eq!(
            settings.theme_settings.primary_color.as_deref(),
            Some("#112233")
        );
        assert_eq!(settings.theme_settings.secondary_color, None);
        assert!(settings.keywords.is_empty());
        assert!(!settings.show_testimonials);
        assert_eq!(settings.id, None);
    }

    #[test]
    fn test_theme_fields_are_camel_case_on_the_wire() {
        let settings = StoreSettings {
            theme_settings: ThemeSettings {
                background_gradient: Some("linear-gradient(#000, #fff)".to_string()),
                ..ThemeSettings::default()
            },
            ..StoreSettings::default()
        };

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json["theme_settings"]["backgroundGradient"],
            "linear-gradient(#000, #fff)"
        );
    }
}

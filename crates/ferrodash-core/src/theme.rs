use serde::{Deserialize, Serialize};

const LIGHT_STYLESHEET: &str = "https://stackpath.bootstrapcdn.com/bootswatch/4.5.2/materia/bootstrap.min.css";
const DARK_STYLESHEET: &str = "https://stackpath.bootstrapcdn.com/bootswatch/4.5.2/slate/bootstrap.min.css";

/// Page theme driven by the moon toggle. Not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn from_toggle(on: bool) -> Self {
        if on {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Text colour passed to every chart and styled heading.
    pub const fn font_color(self) -> &'static str {
        match self {
            Self::Light => "black",
            Self::Dark => "white",
        }
    }

    pub const fn stylesheet(self) -> &'static str {
        match self {
            Self::Light => LIGHT_STYLESHEET,
            Self::Dark => DARK_STYLESHEET,
        }
    }

    pub fn styles(self) -> ThemeStyles {
        let color = self.font_color();
        let row_title = TextStyle {
            color,
            text_decoration: Some("underline"),
        };

        ThemeStyles {
            app_title: TextStyle {
                color,
                text_decoration: None,
            },
            row2_title: row_title,
            row3_title: row_title,
            stylesheet: self.stylesheet(),
        }
    }
}

/// Inline CSS applied to a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStyle {
    pub color: &'static str,
    #[serde(rename = "text-decoration", skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<&'static str>,
}

/// Output of the `change-color` binding plus the stylesheet to swap in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeStyles {
    pub app_title: TextStyle,
    pub row2_title: TextStyle,
    pub row3_title: TextStyle,
    pub stylesheet: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_maps_to_theme() {
        assert_eq!(Theme::from_toggle(false), Theme::Light);
        assert_eq!(Theme::from_toggle(true), Theme::Dark);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn dark_styles_are_white_and_underlined() {
        let styles = Theme::Dark.styles();
        assert_eq!(styles.app_title.color, "white");
        assert_eq!(styles.app_title.text_decoration, None);
        assert_eq!(styles.row2_title.text_decoration, Some("underline"));
        assert!(styles.stylesheet.contains("/slate/"));
    }

    #[test]
    fn style_serializes_css_property_names() {
        let value = serde_json::to_value(Theme::Light.styles()).expect("serializes");
        assert_eq!(value["row3_title"]["text-decoration"], "underline");
        assert_eq!(value["row3_title"]["color"], "black");
        assert!(value["app_title"].get("text-decoration").is_none());
    }
}

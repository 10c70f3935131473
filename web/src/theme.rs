use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    /// Without a theme the page follows the browser's color scheme.
    pub(crate) fn apply(theme: Option<Self>) {
        use gloo::utils::document;
        let Some(html) = document().document_element() else {
            log::error!("document has no root element, theme not applied");
            return;
        };
        if let Some(theme) = theme {
            let scheme = theme.scheme();
            log::debug!("theme-scheme: {}", scheme);
            if let Err(err) = html.set_attribute(Self::ATTR_NAME, scheme) {
                log::error!("failed to set theme: {:?}", err);
            }
        } else {
            log::debug!("no theme preference");
            if let Err(err) = html.remove_attribute(Self::ATTR_NAME) {
                log::error!("failed to set theme: {:?}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn scheme_matches_css_attribute_values() {
        assert_eq!(Theme::Light.scheme(), "light");
        assert_eq!(Theme::Dark.scheme(), "dark");
    }

    #[test]
    fn parses_from_lowercase_names() {
        assert_eq!(Theme::from_str("dark", true), Ok(Theme::Dark));
        assert!(Theme::from_str("sepia", true).is_err());
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        fn html_theme() -> Option<String> {
            gloo::utils::document()
                .document_element()
                .and_then(|html| html.get_attribute(Theme::ATTR_NAME))
        }

        #[wasm_bindgen_test]
        fn apply_sets_and_clears_html_attribute() {
            Theme::apply(Some(Theme::Dark));
            assert_eq!(html_theme().as_deref(), Some("dark"));

            Theme::apply(None);
            assert_eq!(html_theme(), None);
        }
    }
}

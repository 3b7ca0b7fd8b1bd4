use enrollment::Registration;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::app::Mode;

/// Navigation target. `Details` carries the submitted record by value, so the
/// confirmation page cannot exist without the data it displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Form,
    #[serde(rename_all = "camelCase")]
    Details { form_data: Registration },
}

impl Route {
    /// Page registry id.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Form => "form",
            Route::Details { .. } => "details",
        }
    }

    /// Keybinding/style mode active while this route is shown.
    pub fn mode(&self) -> Mode {
        match self {
            Route::Form => Mode::Form,
            Route::Details { .. } => Mode::Details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    /// Flip the masked rendering of the password field.
    TogglePassword,
    Navigate(Route),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn route_names_match_page_registry() {
        assert_eq!(Route::Form.name(), "form");
        let details = Route::Details {
            form_data: Registration::default(),
        };
        assert_eq!(details.name(), "details");
        assert_eq!(details.mode(), Mode::Details);
    }

    #[test]
    fn details_payload_serializes_as_form_data() {
        let mut record = Registration::default();
        record.first_name = "Asha".to_string();
        let route = Route::Details { form_data: record };
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["Details"]["formData"]["firstName"], "Asha");
    }

    #[test]
    fn unit_actions_deserialize_from_config_strings() {
        assert_eq!(json5::from_str::<Action>("\"Quit\"").unwrap(), Action::Quit);
        assert_eq!(
            json5::from_str::<Action>("\"TogglePassword\"").unwrap(),
            Action::TogglePassword
        );
    }
}

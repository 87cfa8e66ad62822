macro_rules! settings_builders {
    ($name: ident: $_type: ty) => {
        paste::paste! {
            pub fn [<with_ $name>](mut self, $name: $_type) -> Self {
                self.$name = $name;
                self
            }
        }
    };
    ($($name: ident: $_type: ty),*) => {
        $(
            settings_builders!($name: $_type);
        )*
    };
}

/// How placement arrows are drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArrowSettings {
    /// How far from the source block's center the arrow tip sits, in blocks (defaults to 1)
    pub distance_from_center: f64,

    /// Sideways reach of each arrow head line (defaults to 0.25)
    pub head_width: f64,

    /// How far along the arrow the head lines end, measured from the center (defaults to 0.75)
    pub head_back: f64,

    /// Line width passed to the outliner (defaults to 1/16)
    pub line_width: f32,
}

impl Default for ArrowSettings {
    fn default() -> Self {
        ArrowSettings {
            distance_from_center: 1.0,
            head_width: 0.25,
            head_back: 0.75,
            line_width: 1.0 / 16.0,
        }
    }
}

impl ArrowSettings {
    settings_builders!(
        distance_from_center: f64,
        head_width: f64,
        head_back: f64,
        line_width: f32
    );
}

#[cfg(test)]
mod test {
    use super::ArrowSettings;

    #[test]
    fn builders_override_single_fields() {
        let settings = ArrowSettings::default()
            .with_distance_from_center(2.0)
            .with_line_width(0.125);

        assert_eq!(settings.distance_from_center, 2.0);
        assert_eq!(settings.line_width, 0.125);
        assert_eq!(settings.head_width, 0.25);
        assert_eq!(settings.head_back, 0.75);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_use_defaults() {
        let settings: ArrowSettings =
            serde_json::from_str(r#"{ "distance_from_center": 1.5 }"#).unwrap();

        assert_eq!(
            settings,
            ArrowSettings::default().with_distance_from_center(1.5)
        );
    }
}

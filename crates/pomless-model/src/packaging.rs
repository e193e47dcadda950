use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Packaging kinds a synthesized model can carry.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Packaging {
    EclipsePlugin,
    EclipseTestPlugin,
    EclipseFeature,
    EclipseRepository,
}

impl Packaging {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Bundle packaging, switched to the test variant for test modules.
    pub fn bundle(is_test_module: bool) -> Self {
        if is_test_module {
            Packaging::EclipseTestPlugin
        } else {
            Packaging::EclipsePlugin
        }
    }
}

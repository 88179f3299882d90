//! Supported CSS preprocessors.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::error::MixinError;

/// A CSS preprocessor that mixins can be generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Engine {
    /// Indented Sass syntax.
    Sass,
    Scss,
    Less,
    Stylus,
}

/// Engine identifiers accepted in configuration.
pub static ENGINES: phf::Map<&'static str, Engine> = phf_map! {
    "sass" => Engine::Sass,
    "scss" => Engine::Scss,
    "less" => Engine::Less,
    "stylus" => Engine::Stylus,
};

impl Engine {
    pub fn from_name(name: &str) -> Option<Engine> {
        ENGINES.get(name).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Engine::Sass => "sass",
            Engine::Scss => "scss",
            Engine::Less => "less",
            Engine::Stylus => "stylus",
        }
    }

    /// File extension of the generated mixin file.
    pub fn extension(self) -> &'static str {
        match self {
            Engine::Sass => "sass",
            Engine::Scss => "scss",
            Engine::Less => "less",
            Engine::Stylus => "styl",
        }
    }

    /// How the macro's `name` parameter is interpolated into a selector.
    pub fn interpolation(self) -> &'static str {
        match self {
            Engine::Sass | Engine::Scss => "#{$name}",
            Engine::Less => "@{name}",
            Engine::Stylus => "{name}",
        }
    }

    /// Defines one macro that wraps the caller's block in `selector`.
    pub fn mixin(self, macro_name: &str, selector: &str) -> String {
        match self {
            Engine::Sass => format!("@mixin {macro_name}($name)\n  {selector}\n    @content\n"),
            Engine::Scss => format!(
                "@mixin {macro_name}($name) {{\n  {selector} {{\n    @content;\n  }}\n}}\n"
            ),
            Engine::Less => format!(
                ".{macro_name}(@name; @rules) {{\n  {selector} {{\n    @rules();\n  }}\n}}\n"
            ),
            Engine::Stylus => format!("{macro_name}(name)\n  {selector}\n    {{block}}\n"),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = MixinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::from_name(s).ok_or_else(|| MixinError::UnknownEngine(s.to_string()))
    }
}

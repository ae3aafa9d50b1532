//! Stylesheets for generated markup.
//!
//! The ruleset is fixed per dialect and covers the class names the markup
//! compilers emit (`app`, `page`, `card`, `space`, `container`, `badge`).
//! Per-component `style` overrides are not compiled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleDialect {
    /// Plain CSS
    #[default]
    Css,
    /// Nested rules with variables and mixins
    Scss,
    /// Tailwind directives with `@apply` component classes
    Tailwind,
}

impl StyleDialect {
    /// File extension of the stylesheet, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            StyleDialect::Scss => "scss",
            StyleDialect::Css | StyleDialect::Tailwind => "css",
        }
    }
}

impl fmt::Display for StyleDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StyleDialect::Css => "css",
            StyleDialect::Scss => "scss",
            StyleDialect::Tailwind => "tailwind",
        })
    }
}

impl FromStr for StyleDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "css" => Ok(StyleDialect::Css),
            "scss" => Ok(StyleDialect::Scss),
            "tailwind" => Ok(StyleDialect::Tailwind),
            other => Err(format!("Unknown style: {}. Use: css, scss, or tailwind", other)),
        }
    }
}

/// Compile the stylesheet for `dialect`
pub fn compile_stylesheet(dialect: StyleDialect) -> String {
    match dialect {
        StyleDialect::Css => PLAIN_CSS,
        StyleDialect::Scss => SCSS,
        StyleDialect::Tailwind => TAILWIND,
    }
    .to_string()
}

const PLAIN_CSS: &str = r#"/* Global */
.app {
  min-height: 100vh;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
}

/* Pages */
.page {
  padding: 20px;
  max-width: 1200px;
  margin: 0 auto;
}

/* Components */
.card {
  border: 1px solid #d9d9d9;
  border-radius: 6px;
  background: #fff;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
}

.card-header {
  padding: 16px 24px;
  border-bottom: 1px solid #f0f0f0;
  font-weight: 500;
}

.card-body {
  padding: 16px 24px;
}

.space {
  display: flex;
  gap: 8px;
}

.space.vertical {
  flex-direction: column;
}

.container {
  padding: 16px;
  background: #fafafa;
  border-radius: 4px;
}

.badge {
  display: inline-block;
  min-width: 20px;
  padding: 0 6px;
  border-radius: 10px;
  background: #f5222d;
  color: #fff;
  font-size: 12px;
  text-align: center;
}
"#;

const SCSS: &str = r#"// Variables
$primary-color: #1890ff;
$success-color: #52c41a;
$warning-color: #faad14;
$error-color: #f5222d;
$text-color: #262626;
$text-color-secondary: #595959;
$border-color: #d9d9d9;
$border-color-light: #f0f0f0;
$background-color: #fafafa;
$background-color-light: #ffffff;
$border-radius: 6px;
$spacing-sm: 8px;
$spacing-md: 16px;
$spacing-lg: 24px;
$shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
$shadow-md: 0 2px 8px rgba(0, 0, 0, 0.1);

// Mixins
@mixin flex-center {
  display: flex;
  align-items: center;
  justify-content: center;
}

@mixin flex-between {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

@mixin card-base {
  background: $background-color-light;
  border: 1px solid $border-color-light;
  border-radius: $border-radius;
  box-shadow: $shadow-sm;
  transition: all 0.2s ease;
}

// Global
.app {
  min-height: 100vh;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
  background-color: $background-color;
  color: $text-color;
}

// Pages
.page {
  padding: $spacing-lg;
  max-width: 1200px;
  margin: 0 auto;
}

// Components
.card {
  @include card-base;

  &-header {
    padding: $spacing-md $spacing-lg;
    border-bottom: 1px solid $border-color-light;
    font-weight: 500;
  }

  &-body {
    padding: $spacing-md $spacing-lg;
  }
}

.space {
  display: flex;
  gap: $spacing-sm;

  &.vertical {
    flex-direction: column;
  }
}

.container {
  padding: $spacing-md;
  background: $background-color;
  border-radius: 4px;
}

.badge {
  @include flex-center;
  display: inline-flex;
  min-width: 20px;
  padding: 0 6px;
  border-radius: 10px;
  background: $error-color;
  color: $background-color-light;
  font-size: 12px;
}

button {
  padding: $spacing-sm $spacing-md;
  border: 1px solid $border-color;
  border-radius: $border-radius;
  background: $background-color-light;
  color: $text-color;
  cursor: pointer;
  transition: all 0.2s ease;

  &:hover {
    border-color: $primary-color;
    color: $primary-color;
  }

  &:active {
    transform: scale(0.98);
  }
}

input {
  padding: $spacing-sm $spacing-md;
  border: 1px solid $border-color;
  border-radius: $border-radius;
  background: $background-color-light;
  color: $text-color;
  transition: all 0.2s ease;

  &:focus {
    outline: none;
    border-color: $primary-color;
    box-shadow: 0 0 0 2px rgba($primary-color, 0.2);
  }
}

// Small screens
@media (max-width: 768px) {
  .page {
    padding: $spacing-md;
  }

  .card {
    &-header,
    &-body {
      padding: $spacing-sm $spacing-md;
    }
  }
}
"#;

const TAILWIND: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

@layer components {
  .page {
    @apply p-5 max-w-screen-xl mx-auto;
  }

  .card {
    @apply border border-gray-200 rounded-lg bg-white shadow-sm;
  }

  .card-header {
    @apply px-6 py-4 border-b border-gray-100 font-medium;
  }

  .card-body {
    @apply px-6 py-4;
  }

  .space {
    @apply flex gap-2;
  }

  .space.vertical {
    @apply flex-col;
  }

  .container {
    @apply p-4 bg-gray-50 rounded;
  }

  .badge {
    @apply inline-block min-w-[20px] px-1.5 rounded-full bg-red-500 text-white text-xs text-center;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_dialect_covers_generated_classes() {
        for dialect in [StyleDialect::Css, StyleDialect::Scss, StyleDialect::Tailwind] {
            let css = compile_stylesheet(dialect);

            println!("Generated {}:\n{}", dialect, css);

            for class in [".page", ".card", ".space", ".container", ".badge"] {
                assert!(css.contains(class), "{} missing {}", dialect, class);
            }
        }
    }

    #[test]
    fn test_dialect_features() {
        assert!(compile_stylesheet(StyleDialect::Scss).contains("$primary-color: #1890ff;"));
        assert!(compile_stylesheet(StyleDialect::Scss).contains("&-header {"));
        assert!(compile_stylesheet(StyleDialect::Tailwind).starts_with("@tailwind base;"));
        assert!(!compile_stylesheet(StyleDialect::Css).contains('$'));
    }

    #[test]
    fn test_dialect_serde_and_extension() {
        let dialect: StyleDialect = serde_json::from_str("\"tailwind\"").unwrap();
        assert_eq!(dialect, StyleDialect::Tailwind);
        assert_eq!(dialect.extension(), "css");
        assert_eq!(StyleDialect::Scss.extension(), "scss");
        assert_eq!(StyleDialect::default(), StyleDialect::Css);
        assert_eq!("scss".parse::<StyleDialect>(), Ok(StyleDialect::Scss));
        assert!("less".parse::<StyleDialect>().is_err());
    }
}

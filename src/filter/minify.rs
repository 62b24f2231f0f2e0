//! Built-in minification filters.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use crate::error::PressError;
use crate::log;

use super::AssetFilter;

/// JavaScript minifier (`minify-js`).
pub struct JsMinifier {
    verbose: bool,
}

impl JsMinifier {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl AssetFilter for JsMinifier {
    fn filter_js(&self, content: String) -> Result<String, PressError> {
        let allocator = Allocator::default();
        let source_type = SourceType::mjs();
        let ret = Parser::new(&allocator, &content, source_type).parse();
        if !ret.errors.is_empty() {
            return Err(PressError::Filter {
                name: "minify-js".into(),
                reason: format!("{} parse error(s)", ret.errors.len()),
            });
        }
        let mut program = ret.program;
        let options = MinifierOptions {
            mangle: Some(MangleOptions::default()),
            compress: Some(CompressOptions::smallest()),
        };
        let ret = Minifier::new(options).minify(&allocator, &mut program);
        let code = Codegen::new()
            .with_options(CodegenOptions {
                minify: true,
                comments: CommentOptions::disabled(),
                ..CodegenOptions::default()
            })
            .with_scoping(ret.scoping)
            .build(&program)
            .code;

        if self.verbose {
            log!("minify-js"; "{} -> {} bytes", content.len(), code.len());
        }
        Ok(code)
    }
}

/// CSS minifier (`minify-css`).
pub struct CssMinifier {
    verbose: bool,
}

impl CssMinifier {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl AssetFilter for CssMinifier {
    fn filter_css(&self, content: String) -> Result<String, PressError> {
        let stylesheet =
            StyleSheet::parse(&content, ParserOptions::default()).map_err(|err| {
                PressError::Filter {
                    name: "minify-css".into(),
                    reason: err.to_string(),
                }
            })?;
        let result = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..PrinterOptions::default()
            })
            .map_err(|err| PressError::Filter {
                name: "minify-css".into(),
                reason: err.to_string(),
            })?;

        if self.verbose {
            log!("minify-css"; "{} -> {} bytes", content.len(), result.code.len());
        }
        Ok(result.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css() {
        let filter = CssMinifier::new(false);
        let out = filter
            .filter_css("body {\n  color: red;\n}\n".into())
            .unwrap();
        assert_eq!(out, "body{color:red}");
    }

    #[test]
    fn test_minify_css_parse_error() {
        let filter = CssMinifier::new(false);
        let err = filter.filter_css("body { color: }".into()).unwrap_err();
        assert!(matches!(err, PressError::Filter { .. }));
    }

    #[test]
    fn test_minify_js() {
        let filter = JsMinifier::new(false);
        let out = filter
            .filter_js("console.log( 'hello' );\n".into())
            .unwrap();
        assert!(out.contains("console.log"));
        assert!(out.len() < "console.log( 'hello' );\n".len());
    }

    #[test]
    fn test_minify_js_parse_error() {
        let filter = JsMinifier::new(false);
        let err = filter.filter_js("function (".into()).unwrap_err();
        assert!(matches!(err, PressError::Filter { .. }));
    }

    #[test]
    fn test_minify_js_passes_css_through() {
        let filter = JsMinifier::new(false);
        let css = "body { color: red; }".to_string();
        assert_eq!(filter.filter_css(css.clone()).unwrap(), css);
    }
}

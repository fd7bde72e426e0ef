use std::path::Path;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use swc_common::{FileName, Globals, SourceMap, Spanned, sync::Lrc};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

use crate::core::parsers::lower::Lowerer;
use crate::core::syntax::SyntaxNode;

/// Source language handled by an extractor group.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Javascript,
    Typescript,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Typescript => "typescript",
        }
    }

    /// File extensions picked up when walking a directory for this language.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Language::Javascript => &["js", "jsx", "mjs", "cjs"],
            Language::Typescript => &["ts", "tsx", "mts", "cts"],
        }
    }

    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }

    /// JSX is enabled for plain `.js` files as well, since React projects rarely use `.jsx`.
    fn syntax_for(&self, file_path: &str) -> Syntax {
        match self {
            Language::Javascript => Syntax::Es(EsSyntax {
                jsx: !file_path.ends_with(".mjs") && !file_path.ends_with(".cjs"),
                ..Default::default()
            }),
            Language::Typescript => Syntax::Typescript(TsSyntax {
                tsx: file_path.ends_with(".tsx"),
                ..Default::default()
            }),
        }
    }
}

/// A parsed source file: the lowered syntax tree plus its trimmed lines for
/// leading comment lookup.
#[derive(Debug)]
pub struct ParsedSource {
    pub program: SyntaxNode,
    pub lines: Vec<String>,
}

impl ParsedSource {
    /// Trimmed source line by 1-indexed line number.
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }
}

/// Parse JavaScript/TypeScript source code into the extractor's syntax tree.
///
/// Each call uses its own `SourceMap`, so files can be parsed on any thread.
/// Any syntax error is returned as an error; callers treat it as fatal.
pub fn parse_source(code: &str, file_path: &str, language: Language) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    let lines = code.split('\n').map(|line| line.trim().to_string()).collect();

    GLOBALS.set(&Globals::new(), || {
        let source_map: Lrc<SourceMap> = Default::default();
        let source_file = source_map.new_source_file(
            FileName::Real(file_path.into()).into(),
            code.to_string(),
        );

        let mut parser = Parser::new(
            language.syntax_for(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let program = parser.parse_program().map_err(|e| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            anyhow!(
                "Failed to parse {}:{}:{}: {}",
                file_path,
                loc.line,
                loc.col_display + 1,
                e.kind().msg()
            )
        })?;

        let program = Lowerer::new(&source_map).lower_program(&program);

        Ok(ParsedSource { program, lines })
    })
}

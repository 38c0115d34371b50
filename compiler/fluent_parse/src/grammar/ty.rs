//! Type annotations.

use crate::{ParseError, Parser};
use fluent_ir::{TokenKind, TypeExpr};

impl Parser<'_> {
    /// `type := IDENT | "List" "[" type "]"`
    ///
    /// A bare `List` with no brackets is a simple type.
    pub(crate) fn parse_type(&mut self) -> Result<TypeExpr, ParseError> {
        let name = self.cursor.expect_ident()?;
        if name == "List" && self.cursor.eat(TokenKind::LBracket) {
            let element = self.parse_type()?;
            self.cursor.expect(TokenKind::RBracket)?;
            return Ok(TypeExpr::list(element));
        }
        Ok(TypeExpr::Simple(name))
    }
}

//! Syntax tree node definitions.
//!
//! These are plain data: nothing in this workspace builds them from tokens
//! yet. Each node keeps the token it started with so diagnostics and
//! debugging output can point back at the source text, and every node
//! renders back to Monkey source through `Display`.

use crate::token_kind::TokenKind;
use std::fmt;

// ============================================================================
// Core Node Types
// ============================================================================

/// The token a node was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeToken {
    pub kind: TokenKind,
    pub literal: String,
}

impl NodeToken {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}

/// Behaviour shared by every syntax tree node.
pub trait Node: fmt::Display {
    /// The literal of the token this node was built from.
    fn token_literal(&self) -> &str;
}

// ============================================================================
// Program
// ============================================================================

/// The root of every syntax tree: a sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |statement| statement.token_literal())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(s) => s.token_literal(),
            Statement::Return(s) => s.token_literal(),
            Statement::Expression(s) => s.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => fmt::Display::fmt(s, f),
            Statement::Return(s) => fmt::Display::fmt(s, f),
            Statement::Expression(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: NodeToken,
    pub name: Identifier,
    /// `None` until a parser knows how to build the bound expression.
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: NodeToken,
    pub return_value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.return_value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// A bare expression used in statement position, e.g. `x + 5;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: NodeToken,
    pub expression: Option<Expression>,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{}", expression),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => fmt::Display::fmt(ident, f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: NodeToken,
    pub value: String,
}

impl Identifier {
    /// Build an identifier whose token literal and value are both `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            token: NodeToken::new(TokenKind::Ident, name.clone()),
            value: name,
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn let_statement(name: &str, value: Option<&str>) -> Statement {
        Statement::Let(LetStatement {
            token: NodeToken::new(TokenKind::Let, "let"),
            name: Identifier::new(name),
            value: value.map(|v| Expression::Identifier(Identifier::new(v))),
        })
    }

    #[test]
    fn test_program_display() {
        let program = Program {
            statements: vec![let_statement("myVar", Some("anotherVar"))],
        };
        assert_eq!(program.to_string(), "let myVar = anotherVar;");
    }

    #[test]
    fn test_program_token_literal() {
        assert_eq!(Program::default().token_literal(), "");

        let program = Program {
            statements: vec![
                let_statement("x", None),
                Statement::Return(ReturnStatement {
                    token: NodeToken::new(TokenKind::Return, "return"),
                    return_value: None,
                }),
            ],
        };
        assert_eq!(program.token_literal(), "let");
        assert_eq!(program.to_string(), "let x = ;return ;");
    }

    #[test]
    fn test_return_statement_display() {
        let statement = ReturnStatement {
            token: NodeToken::new(TokenKind::Return, "return"),
            return_value: Some(Expression::Identifier(Identifier::new("result"))),
        };
        assert_eq!(statement.to_string(), "return result;");
        assert_eq!(statement.token_literal(), "return");
    }

    #[test]
    fn test_expression_statement_display() {
        let statement = ExpressionStatement {
            token: NodeToken::new(TokenKind::Ident, "foobar"),
            expression: Some(Expression::Identifier(Identifier::new("foobar"))),
        };
        assert_eq!(statement.to_string(), "foobar");

        let empty = ExpressionStatement {
            token: NodeToken::new(TokenKind::Ident, "x"),
            expression: None,
        };
        assert_eq!(empty.to_string(), "");
    }
}

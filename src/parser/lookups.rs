use crate::lexer::tokens::TokenKind;

/// Precedence levels of the binary operators, loosest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

const ADDITIVE_OPERATORS: &[TokenKind] = &[TokenKind::Minus, TokenKind::Plus];
const MULTIPLICATIVE_OPERATORS: &[TokenKind] = &[TokenKind::Slash, TokenKind::Star];

impl BindingPower {
    /// The operator kinds that bind at this level.
    pub fn operators(&self) -> &'static [TokenKind] {
        match self {
            BindingPower::Additive => ADDITIVE_OPERATORS,
            BindingPower::Multiplicative => MULTIPLICATIVE_OPERATORS,
        }
    }

    /// The level an operator kind binds at, or `None` for non-operators.
    pub fn of(kind: TokenKind) -> Option<BindingPower> {
        [BindingPower::Additive, BindingPower::Multiplicative]
            .into_iter()
            .find(|bp| bp.operators().contains(&kind))
    }
}

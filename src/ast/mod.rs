/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root
/// - expressions: Binary and literal expressions
/// - statements: Expression statements
pub mod ast;
pub mod expressions;
pub mod statements;
